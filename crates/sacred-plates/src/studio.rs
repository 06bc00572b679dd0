//! Request path: slug + variant in, document out.
//!
//! [`PlateStudio`] ties the pieces together. It is the only place where
//! errors turn into placeholder plates; everything below it returns
//! `Result`s.

use tracing::{info, warn};

use crate::cache::{CacheStats, PlateCache};
use crate::catalog::Catalog;
use crate::config::{PlateVariant, StudioConfig};
use crate::error::{GenerationError, PlateError};
use crate::fallback::render_error_sized;
use crate::geometry::{GeometryOutput, GeometryParameters, LineSet};
use crate::lineset::to_line_set;
use crate::rng::slug_seed;
use crate::svg::{RenderOptions, render};

/// Something that turns a slug into geometry.
///
/// The studio only ever generates through this trait, so hosts can add
/// their own plates and tests can count calls.
///
/// ## Rust Lesson #4: Traits as Seams
///
/// `PlateStudio<S: PlateSource = Catalog>` is generic over the source with
/// a default, so `PlateStudio::new()` needs no type annotation while tests
/// can plug in a wrapper. The `Send + Sync` bound lets a studio be shared
/// across threads.
pub trait PlateSource: Send + Sync {
    fn generate(&self, slug: &str, params: &GeometryParameters) -> Result<GeometryOutput, GenerationError>;
}

impl PlateSource for Catalog {
    fn generate(&self, slug: &str, params: &GeometryParameters) -> Result<GeometryOutput, GenerationError> {
        match self.get(slug) {
            Some(entry) => entry.generator.generate(params),
            None => Err(GenerationError::UnknownPattern { slug: slug.to_string() }),
        }
    }
}

impl<T: PlateSource + ?Sized> PlateSource for &T {
    fn generate(&self, slug: &str, params: &GeometryParameters) -> Result<GeometryOutput, GenerationError> {
        (**self).generate(slug, params)
    }
}

/// Generates, renders and caches plates, with fallback on failure.
pub struct PlateStudio<S: PlateSource = Catalog> {
    source: S,
    catalog: Catalog,
    config: StudioConfig,
    cache: PlateCache,
}

impl PlateStudio<Catalog> {
    /// Studio over the standard catalog with default profiles.
    pub fn new() -> Self {
        Self::with_config(StudioConfig::default())
    }

    pub fn with_config(config: StudioConfig) -> Self {
        Self::with_source(Catalog::standard(), config)
    }
}

impl Default for PlateStudio<Catalog> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PlateSource> PlateStudio<S> {
    /// Studio over a custom source. Titles for placeholders still come
    /// from the standard catalog.
    pub fn with_source(source: S, config: StudioConfig) -> Self {
        Self {
            source,
            catalog: Catalog::standard(),
            config,
            cache: PlateCache::new(),
        }
    }

    /// Replace the catalog used for placeholder titles.
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }

    pub fn is_cached(&self, slug: &str, variant: PlateVariant) -> bool {
        self.cache.contains(&PlateCache::key(slug, variant.name()))
    }

    /// The SVG document for a plate. Never fails.
    ///
    /// Success and failure are both cached under `slug-variant`; a plate
    /// that failed once stays a placeholder for the studio's lifetime.
    pub fn render_plate(&self, slug: &str, variant: PlateVariant) -> String {
        let key = PlateCache::key(slug, variant.name());
        self.cache.get_or_create(&key, || match self.try_render(slug, variant) {
            Ok(svg) => svg,
            Err(error) => {
                warn!(slug, variant = variant.name(), %error, "rendering placeholder plate");
                let profile = self.config.profile(variant);
                render_error_sized(self.catalog.title_or_slug(slug), profile.width, profile.height)
            }
        })
    }

    /// Generate and render without caching or fallback.
    pub fn try_render(&self, slug: &str, variant: PlateVariant) -> Result<String, PlateError> {
        let profile = self.config.profile(variant);
        let geometry = self.source.generate(slug, &self.config.parameters(variant))?;
        let options = RenderOptions::from_profile(profile, variant, slug_seed(slug));
        let svg = render(&geometry, &options)?;

        info!(
            slug,
            variant = variant.name(),
            circles = geometry.circles.len(),
            polylines = geometry.polylines.len(),
            segments = geometry.segments.len(),
            "rendered plate"
        );
        Ok(svg)
    }

    /// The plate as 3-D curves at the variant's detail.
    ///
    /// Not cached and no placeholder: curve consumers get the error.
    pub fn line_set(&self, slug: &str, variant: PlateVariant) -> Result<LineSet, PlateError> {
        let params = self.config.parameters(variant);
        let geometry = self.source.generate(slug, &params)?;
        Ok(to_line_set(&geometry, params.detail))
    }
}
