//! The plate catalog: slug → display metadata and generator.
//!
//! Pure data. The standard catalog is a static table; [`Catalog`] indexes
//! it by slug once at construction so lookups don't scan.

use std::collections::HashMap;

use serde::Serialize;

use crate::patterns::Generator;

/// One catalog entry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    /// Stable identifier used for generation, caching and routing
    pub slug: &'static str,
    pub title: &'static str,
    pub caption: &'static str,
    /// Generator that produces this plate
    #[serde(serialize_with = "serialize_generator")]
    pub generator: Generator,
}

fn serialize_generator<S: serde::Serializer>(generator: &Generator, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(generator.id())
}

impl CatalogEntry {
    pub const fn new(slug: &'static str, title: &'static str, caption: &'static str, generator: Generator) -> Self {
        Self { slug, title, caption, generator }
    }
}

/// The standard plates, in display order.
pub const STANDARD_PLATES: &[CatalogEntry] = &[
    CatalogEntry::new(
        "flower-of-life",
        "Flower of Life",
        "Nineteen overlapping circles in hexagonal symmetry",
        Generator::FlowerOfLife,
    ),
    CatalogEntry::new(
        "seed-of-life",
        "Seed of Life",
        "Seven circles: the first day of the flower",
        Generator::SeedOfLife,
    ),
    CatalogEntry::new(
        "egg-of-life",
        "Egg of Life",
        "Seven touching circles, the cell's early division",
        Generator::EggOfLife,
    ),
    CatalogEntry::new(
        "fruit-of-life",
        "Fruit of Life",
        "Thirteen circles drawn from the flower's lattice",
        Generator::FruitOfLife,
    ),
    CatalogEntry::new(
        "metatrons-cube",
        "Metatron's Cube",
        "Every center of the fruit joined to every other",
        Generator::MetatronsCube,
    ),
    CatalogEntry::new(
        "vesica-piscis",
        "Vesica Piscis",
        "Two circles sharing a lens",
        Generator::VesicaPiscis,
    ),
    CatalogEntry::new(
        "hexagram",
        "Hexagram",
        "Two interlaced triangles",
        Generator::Hexagram,
    ),
    CatalogEntry::new(
        "pentagram",
        "Pentagram",
        "The five-pointed star and its golden pentagons",
        Generator::Pentagram,
    ),
    CatalogEntry::new(
        "star-of-lakshmi",
        "Star of Lakshmi",
        "Two squares turned by an eighth",
        Generator::StarOfLakshmi,
    ),
    CatalogEntry::new(
        "sri-yantra",
        "Sri Yantra",
        "Nine interlocking triangles within lotus and enclosure",
        Generator::SriYantra,
    ),
    CatalogEntry::new(
        "tree-of-life",
        "Tree of Life",
        "Ten sephirot and twenty-two paths",
        Generator::TreeOfLife,
    ),
    CatalogEntry::new(
        "golden-spiral",
        "Golden Spiral",
        "Quarter arcs through a Fibonacci tiling",
        Generator::GoldenSpiral,
    ),
    CatalogEntry::new(
        "torus",
        "Torus",
        "Twelve circles turning about a center",
        Generator::Torus,
    ),
    CatalogEntry::new(
        "vector-equilibrium",
        "Vector Equilibrium",
        "The cuboctahedron seen along its axis",
        Generator::VectorEquilibrium,
    ),
];

/// Indexed, ordered catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
    by_slug: HashMap<&'static str, usize>,
}

impl Catalog {
    /// Build a catalog from entries. Later duplicates of a slug are ignored.
    pub fn new(entries: &[CatalogEntry]) -> Self {
        let mut kept = Vec::with_capacity(entries.len());
        let mut by_slug = HashMap::with_capacity(entries.len());
        for entry in entries {
            if !by_slug.contains_key(entry.slug) {
                by_slug.insert(entry.slug, kept.len());
                kept.push(*entry);
            }
        }
        Self { entries: kept, by_slug }
    }

    /// The catalog shipped with the crate.
    pub fn standard() -> Self {
        Self::new(STANDARD_PLATES)
    }

    /// All entries in display order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn get(&self, slug: &str) -> Option<&CatalogEntry> {
        self.by_slug.get(slug).map(|&i| &self.entries[i])
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Display title for a slug, or the slug itself when it isn't listed.
    pub fn title_or_slug<'a>(&self, slug: &'a str) -> &'a str {
        match self.get(slug) {
            Some(entry) => entry.title,
            None => slug,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
