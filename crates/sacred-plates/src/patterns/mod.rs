//! Plate generators.
//!
//! Each generator is a pure function of [`GeometryParameters`] built from
//! the shared primitives. [`Generator`] is the closed set of them; adding
//! a plate means one enum variant, one match arm, and one catalog entry.

mod lattice;
mod metatron;
mod spiral;
mod sri_yantra;
mod stars;
mod tree_of_life;
mod vesica;

pub use lattice::{
    generate_egg_of_life, generate_flower_of_life, generate_fruit_of_life, generate_seed_of_life,
    generate_torus,
};
pub use metatron::{generate_metatrons_cube, generate_vector_equilibrium};
pub use spiral::generate_golden_spiral;
pub use sri_yantra::generate_sri_yantra;
pub use stars::{generate_hexagram, generate_pentagram, generate_star_of_lakshmi};
pub use tree_of_life::generate_tree_of_life;
pub use vesica::generate_vesica_piscis;

use tracing::{debug, instrument};

use crate::error::GenerationError;
use crate::geometry::{GeometryOutput, GeometryParameters};

/// Available generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    FlowerOfLife,
    SeedOfLife,
    EggOfLife,
    FruitOfLife,
    MetatronsCube,
    VesicaPiscis,
    Hexagram,
    Pentagram,
    StarOfLakshmi,
    SriYantra,
    TreeOfLife,
    GoldenSpiral,
    Torus,
    VectorEquilibrium,
}

impl Generator {
    /// Get all available generators.
    pub fn all() -> &'static [Generator] {
        &[
            Generator::FlowerOfLife,
            Generator::SeedOfLife,
            Generator::EggOfLife,
            Generator::FruitOfLife,
            Generator::MetatronsCube,
            Generator::VesicaPiscis,
            Generator::Hexagram,
            Generator::Pentagram,
            Generator::StarOfLakshmi,
            Generator::SriYantra,
            Generator::TreeOfLife,
            Generator::GoldenSpiral,
            Generator::Torus,
            Generator::VectorEquilibrium,
        ]
    }

    /// Stable generator id, as referenced by catalog entries.
    pub fn id(&self) -> &'static str {
        match self {
            Generator::FlowerOfLife => "flower-of-life",
            Generator::SeedOfLife => "seed-of-life",
            Generator::EggOfLife => "egg-of-life",
            Generator::FruitOfLife => "fruit-of-life",
            Generator::MetatronsCube => "metatrons-cube",
            Generator::VesicaPiscis => "vesica-piscis",
            Generator::Hexagram => "hexagram",
            Generator::Pentagram => "pentagram",
            Generator::StarOfLakshmi => "star-of-lakshmi",
            Generator::SriYantra => "sri-yantra",
            Generator::TreeOfLife => "tree-of-life",
            Generator::GoldenSpiral => "golden-spiral",
            Generator::Torus => "torus",
            Generator::VectorEquilibrium => "vector-equilibrium",
        }
    }

    /// Parse a generator from its id.
    pub fn from_id(id: &str) -> Option<Generator> {
        Generator::all().iter().copied().find(|g| g.id() == id)
    }

    /// Compute this generator's geometry.
    ///
    /// Parameters are checked first; the output is checked for non-finite
    /// coordinates before it is returned, so callers only ever see
    /// geometry the renderer accepts.
    #[instrument(level = "debug", skip(self), fields(generator = self.id()))]
    pub fn generate(&self, params: &GeometryParameters) -> Result<GeometryOutput, GenerationError> {
        validate(params)?;

        let unit = params.size / 2.0;
        let detail = params.detail;

        let geometry = match self {
            Generator::FlowerOfLife => generate_flower_of_life(unit),
            Generator::SeedOfLife => generate_seed_of_life(unit),
            Generator::EggOfLife => generate_egg_of_life(unit),
            Generator::FruitOfLife => generate_fruit_of_life(unit),
            Generator::MetatronsCube => generate_metatrons_cube(unit),
            Generator::VesicaPiscis => generate_vesica_piscis(unit, detail)?,
            Generator::Hexagram => generate_hexagram(unit),
            Generator::Pentagram => generate_pentagram(unit)?,
            Generator::StarOfLakshmi => generate_star_of_lakshmi(unit),
            Generator::SriYantra => generate_sri_yantra(unit),
            Generator::TreeOfLife => generate_tree_of_life(unit),
            Generator::GoldenSpiral => generate_golden_spiral(unit, detail),
            Generator::Torus => generate_torus(unit),
            Generator::VectorEquilibrium => generate_vector_equilibrium(unit),
        };

        if let Some(element) = geometry.first_non_finite() {
            return Err(GenerationError::Degenerate {
                pattern: self.id(),
                reason: format!("{} is not finite", element),
            });
        }

        debug!(
            circles = geometry.circles.len(),
            polylines = geometry.polylines.len(),
            segments = geometry.segments.len(),
            "generated geometry"
        );
        Ok(geometry)
    }
}

/// Reject parameters no generator can work with.
///
/// `size` must be finite and positive; `detail` must be at least 1. Small
/// details (below 3) are accepted and just produce coarse curves.
pub fn validate(params: &GeometryParameters) -> Result<(), GenerationError> {
    if !params.size.is_finite() || params.size <= 0.0 {
        return Err(GenerationError::InvalidParameters {
            reason: format!("size must be finite and positive, got {}", params.size),
        });
    }
    if params.detail == 0 {
        return Err(GenerationError::InvalidParameters {
            reason: "detail must be at least 1".into(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_and_are_unique() {
        for g in Generator::all() {
            assert_eq!(Generator::from_id(g.id()), Some(*g));
        }
        let mut ids: Vec<_> = Generator::all().iter().map(|g| g.id()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), Generator::all().len());
        assert_eq!(Generator::from_id("not-a-real-pattern"), None);
    }

    #[test]
    fn every_generator_produces_geometry() {
        let params = GeometryParameters::new(2.0, 48);
        for g in Generator::all() {
            let geometry = g.generate(&params).unwrap();
            assert!(!geometry.is_empty(), "{} produced nothing", g.id());
        }
    }

    #[test]
    fn generation_is_deterministic() {
        let params = GeometryParameters::new(2.0, 140);
        for g in Generator::all() {
            assert_eq!(g.generate(&params).unwrap(), g.generate(&params).unwrap(), "{}", g.id());
        }
    }

    #[test]
    fn detail_never_changes_circle_count() {
        for g in Generator::all() {
            let coarse = g.generate(&GeometryParameters::new(2.0, 1)).unwrap();
            let fine = g.generate(&GeometryParameters::new(2.0, 140)).unwrap();
            assert_eq!(coarse.circles.len(), fine.circles.len(), "{}", g.id());
            assert_eq!(coarse.polylines.len(), fine.polylines.len(), "{}", g.id());
            assert_eq!(coarse.segments.len(), fine.segments.len(), "{}", g.id());
        }
    }

    #[test]
    fn tiny_sizes_keep_every_element() {
        for g in Generator::all() {
            let reference = g.generate(&GeometryParameters::new(2.0, 48)).unwrap();
            for size in [1e-7, 1e-9, 1e-12] {
                let tiny = g
                    .generate(&GeometryParameters::new(size, 48))
                    .unwrap_or_else(|e| panic!("{} at size {}: {}", g.id(), size, e));
                assert_eq!(tiny.element_count(), reference.element_count(), "{} at size {}", g.id(), size);
            }
        }
    }

    #[test]
    fn invalid_parameters_are_rejected() {
        let g = Generator::FlowerOfLife;
        for params in [
            GeometryParameters::new(0.0, 10),
            GeometryParameters::new(-1.0, 10),
            GeometryParameters::new(f64::NAN, 10),
            GeometryParameters::new(f64::INFINITY, 10),
            GeometryParameters::new(2.0, 0),
        ] {
            assert!(
                matches!(g.generate(&params), Err(GenerationError::InvalidParameters { .. })),
                "{:?} should be rejected",
                params
            );
        }
    }

    #[test]
    fn overflowing_size_is_degenerate_not_a_panic() {
        let result = Generator::MetatronsCube.generate(&GeometryParameters::new(f64::MAX, 8));
        assert!(matches!(result, Err(GenerationError::Degenerate { .. })));
    }
}
