//! # sacred-plates
//!
//! Deterministic sacred-geometry plates: named patterns computed as exact
//! circles, polylines and segments, then drawn as SVG or flattened into
//! 3-D curves.
//!
//! The request path lives in [`studio::PlateStudio`]:
//!
//! ```
//! use sacred_plates::{PlateStudio, PlateVariant};
//!
//! let studio = PlateStudio::new();
//! let svg = studio.render_plate("flower-of-life", PlateVariant::Thumbnail);
//! assert!(svg.starts_with("<?xml"));
//! ```
//!
//! The pieces underneath are usable on their own: [`patterns::Generator`]
//! for geometry, [`svg::render`] for documents, [`lineset::to_line_set`]
//! for curves.
//!
//! ## Rust Lesson #1: Modules
//!
//! Each `pub mod` below is one file under `src/`. The `pub use` lines
//! re-export the everyday types at the crate root, so callers write
//! `sacred_plates::PlateStudio` instead of `sacred_plates::studio::PlateStudio`.

pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fallback;
pub mod geometry;
pub mod lineset;
pub mod patterns;
pub mod primitives;
pub mod rng;
pub mod studio;
pub mod style;
pub mod svg;

// Re-export common types at crate root for convenience.
pub use cache::{CacheStats, PlateCache};
pub use catalog::{Catalog, CatalogEntry, STANDARD_PLATES};
pub use config::{PlateVariant, RenderProfile, StudioConfig};
pub use error::{GenerationError, PlateError, RenderError};
pub use fallback::{FALLBACK_MARKER, render_error, render_error_sized};
pub use geometry::{
    Circle, GeometryOutput, GeometryParameters, LineSet, Point, Point3, Polyline, Polyline3D,
    Segment,
};
pub use lineset::to_line_set;
pub use patterns::Generator;
pub use rng::slug_seed;
pub use studio::{PlateSource, PlateStudio};
pub use svg::{RenderOptions, render};

/// Generate geometry for a slug from the standard catalog.
pub fn generate(slug: &str, params: &GeometryParameters) -> Result<GeometryOutput, GenerationError> {
    Catalog::standard().generate(slug, params)
}
