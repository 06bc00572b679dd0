//! Property tests over random parameters, slugs and canvases.

use approx::assert_relative_eq;
use proptest::prelude::*;

use sacred_plates::{
    Catalog, GeometryParameters, PlateVariant, RenderOptions, Generator, render, slug_seed,
    to_line_set,
};

fn any_generator() -> impl Strategy<Value = Generator> {
    prop::sample::select(Generator::all().to_vec())
}

fn any_variant() -> impl Strategy<Value = PlateVariant> {
    prop::sample::select(PlateVariant::all().to_vec())
}

/// Canvas coordinates of every drawn point in a rendered plate.
fn drawn_points(svg: &str) -> Vec<(f64, f64)> {
    let mut points = Vec::new();
    for line in svg.lines() {
        let line = line.trim();
        if line.starts_with("<circle") {
            let get = |name: &str| -> f64 {
                let start = line.find(&format!(" {}=\"", name)).unwrap() + name.len() + 3;
                let rest = &line[start..];
                rest[..rest.find('"').unwrap()].parse().unwrap()
            };
            let (cx, cy, r) = (get("cx"), get("cy"), get("r"));
            points.push((cx - r, cy - r));
            points.push((cx + r, cy + r));
        } else if line.starts_with("<path") {
            let start = line.find("d=\"").unwrap() + 3;
            let rest = &line[start..];
            let d = &rest[..rest.find('"').unwrap()];
            for seg in svgtypes::PathParser::from(d) {
                if let Ok(
                    svgtypes::PathSegment::MoveTo { x, y, .. } | svgtypes::PathSegment::LineTo { x, y, .. },
                ) = seg
                {
                    points.push((x, y));
                }
            }
        }
    }
    points
}

proptest! {
    #[test]
    fn generation_is_deterministic(g in any_generator(), size in 0.01f64..1000.0, detail in 1u32..400) {
        let params = GeometryParameters::new(size, detail);
        prop_assert_eq!(g.generate(&params).unwrap(), g.generate(&params).unwrap());
    }

    #[test]
    fn size_only_scales_the_plate(g in any_generator(), exponent in -12i32..6) {
        let size = 10f64.powi(exponent);
        let scaled = g.generate(&GeometryParameters::new(size, 48)).unwrap();
        let reference = g.generate(&GeometryParameters::new(2.0, 48)).unwrap();
        prop_assert_eq!(scaled.circles.len(), reference.circles.len());
        prop_assert_eq!(scaled.polylines.len(), reference.polylines.len());
        prop_assert_eq!(scaled.segments.len(), reference.segments.len());
    }

    #[test]
    fn circle_loops_close(g in any_generator(), detail in 3u32..512) {
        let geometry = g.generate(&GeometryParameters::new(2.0, detail)).unwrap();
        let set = to_line_set(&geometry, detail);
        for ring in &set[..geometry.circles.len()] {
            prop_assert_eq!(ring.len(), detail as usize + 1);
            let (first, last) = (ring[0], ring[ring.len() - 1]);
            assert_relative_eq!(first.x, last.x, epsilon = 1e-9);
            assert_relative_eq!(first.y, last.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn rendered_plates_fit_their_canvas(
        g in any_generator(),
        size in 0.1f64..50.0,
        width in 40.0f64..2000.0,
        height in 40.0f64..2000.0,
        padding in 0.0f64..19.0,
        seed in any::<u64>(),
    ) {
        let geometry = g.generate(&GeometryParameters::new(size, 24)).unwrap();
        let options = RenderOptions::for_variant(PlateVariant::Full)
            .with_size(width, height)
            .with_padding(padding)
            .with_seed(seed);
        let svg = render(&geometry, &options).unwrap();
        // Center and radius are each rounded to two decimals
        for (x, y) in drawn_points(&svg) {
            prop_assert!(x >= -0.011 && x <= width + 0.011, "x {} outside 0..{}", x, width);
            prop_assert!(y >= -0.011 && y <= height + 0.011, "y {} outside 0..{}", y, height);
        }
    }

    #[test]
    fn same_seed_same_document(g in any_generator(), variant in any_variant(), seed in any::<u64>()) {
        let geometry = g.generate(&GeometryParameters::new(2.0, 48)).unwrap();
        let options = RenderOptions::for_variant(variant).with_seed(seed);
        prop_assert_eq!(render(&geometry, &options).unwrap(), render(&geometry, &options).unwrap());
    }

    #[test]
    fn slug_seed_is_stable_and_positive(slug in ".*") {
        let seed = slug_seed(&slug);
        prop_assert!(seed >= 1);
        prop_assert_eq!(seed, slug_seed(&slug));
    }

    #[test]
    fn unknown_slugs_never_panic(slug in "[a-z-]{0,24}") {
        let studio = sacred_plates::PlateStudio::new();
        let svg = studio.render_plate(&slug, PlateVariant::Thumbnail);
        prop_assert!(svg.starts_with("<?xml"));
        if !Catalog::standard().contains(&slug) {
            prop_assert!(svg.contains(sacred_plates::FALLBACK_MARKER));
        }
    }
}
