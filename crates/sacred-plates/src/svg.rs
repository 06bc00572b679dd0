//! SVG plate renderer.
//!
//! Turns a [`GeometryOutput`] into a self-contained SVG document. The
//! canonical space is y-up and centered on the origin; the canvas is y-down
//! with its origin top-left, so the fit transform flips y.
//!
//! ## Fit Transform
//!
//! The bounding box of every element (circles expanded by their radius) is
//! scaled uniformly to fit inside the padded canvas and centered in any
//! slack left on the shorter axis. Because the scale is uniform and the box
//! already contains each element, every emitted coordinate lands inside
//! `[padding, width - padding] x [padding, height - padding]`.

use tracing::instrument;

use crate::config::{PlateVariant, RenderProfile};
use crate::error::RenderError;
use crate::geometry::{GeometryOutput, Point};
use crate::rng::Rng;
use crate::style::{JitterConfig, StrokeStyle, jitter_stroke};

/// Paper tone behind every plate.
pub const BACKGROUND: &str = "#f4ecd8";
/// Ink used for every stroke.
pub const INK: &str = "#2f2419";

/// Style options for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
    pub stroke_width: f64,
    /// Variant the plate is drawn for; fixes the base opacity
    pub style: PlateVariant,
    /// Seed for per-element stroke variation
    pub seed: u64,
    /// Relative stroke variation, see [`crate::style`]
    pub jitter: f64,
}

impl RenderOptions {
    /// Options from a profile, drawn in `style` with the given seed.
    pub fn from_profile(profile: &RenderProfile, style: PlateVariant, seed: u64) -> Self {
        Self {
            width: profile.width,
            height: profile.height,
            padding: profile.padding,
            stroke_width: profile.stroke_width,
            style,
            seed,
            jitter: profile.jitter,
        }
    }

    /// Options for a variant's built-in profile.
    pub fn for_variant(style: PlateVariant) -> Self {
        let profile = match style {
            PlateVariant::Thumbnail => RenderProfile::THUMBNAIL,
            PlateVariant::Full => RenderProfile::FULL,
        };
        Self::from_profile(&profile, style, 1)
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_stroke_width(mut self, stroke_width: f64) -> Self {
        self.stroke_width = stroke_width;
        self
    }

    pub fn with_style(mut self, style: PlateVariant) -> Self {
        self.style = style;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_jitter(mut self, jitter: f64) -> Self {
        self.jitter = jitter;
        self
    }

    /// Reject canvases with no drawable area.
    fn check_canvas(&self) -> Result<(), RenderError> {
        let usable_w = self.width - 2.0 * self.padding;
        let usable_h = self.height - 2.0 * self.padding;
        let finite = [self.width, self.height, self.padding, self.stroke_width, self.jitter]
            .iter()
            .all(|v| v.is_finite());

        if !finite || self.padding < 0.0 || usable_w <= 0.0 || usable_h <= 0.0 {
            return Err(RenderError::InvalidCanvas {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::for_variant(PlateVariant::Thumbnail)
    }
}

/// Uniform canonical-to-canvas mapping with a y flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTransform {
    pub scale: f64,
    /// Canvas x of canonical x = 0
    pub tx: f64,
    /// Canvas y of canonical y = 0
    pub ty: f64,
}

impl FitTransform {
    /// Fit `bounds` (min_x, min_y, max_x, max_y) into the padded canvas.
    pub fn fit(bounds: (f64, f64, f64, f64), options: &RenderOptions) -> Result<Self, RenderError> {
        let (min_x, min_y, max_x, max_y) = bounds;
        let extent_w = max_x - min_x;
        let extent_h = max_y - min_y;
        if !extent_w.is_finite() || !extent_h.is_finite() {
            return Err(RenderError::NonFiniteCoordinate {
                element: "bounding box".into(),
            });
        }

        let usable_w = options.width - 2.0 * options.padding;
        let usable_h = options.height - 2.0 * options.padding;

        let scale_x = if extent_w > 0.0 { usable_w / extent_w } else { f64::INFINITY };
        let scale_y = if extent_h > 0.0 { usable_h / extent_h } else { f64::INFINITY };
        let mut scale = scale_x.min(scale_y);
        // A lone point (or subnormal extent) has nothing to scale
        if !scale.is_finite() {
            scale = 1.0;
        }

        let slack_x = (usable_w - extent_w * scale) / 2.0;
        let slack_y = (usable_h - extent_h * scale) / 2.0;

        Ok(Self {
            scale,
            tx: options.padding + slack_x - min_x * scale,
            ty: options.padding + slack_y + max_y * scale,
        })
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.tx + p.x * self.scale, self.ty - p.y * self.scale)
    }

    #[inline]
    pub fn length(&self, d: f64) -> f64 {
        d * self.scale
    }
}

/// Render geometry as an SVG document.
///
/// Elements appear in geometry order (circles, polylines, segments); each
/// is one `<circle>` or `<path>`. Empty geometry gives a blank plate.
#[instrument(level = "debug", skip_all, fields(elements = geometry.element_count(), seed = options.seed))]
pub fn render(geometry: &GeometryOutput, options: &RenderOptions) -> Result<String, RenderError> {
    options.check_canvas()?;
    if let Some(element) = geometry.first_non_finite() {
        return Err(RenderError::NonFiniteCoordinate { element });
    }

    let mut svg = String::with_capacity(256 + geometry.element_count() * 96);
    svg.push_str(&format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" data-plate-variant="{variant}">
  <rect x="0" y="0" width="{w}" height="{h}" fill="{bg}"/>
"#,
        w = options.width,
        h = options.height,
        variant = options.style.name(),
        bg = BACKGROUND,
    ));

    if geometry.is_empty() {
        svg.push_str("</svg>\n");
        return Ok(svg);
    }
    // Only point-less polylines leave no bounds; their paths are empty anyway
    let bounds = geometry.bounding_box().unwrap_or((0.0, 0.0, 0.0, 0.0));
    let fit = FitTransform::fit(bounds, options)?;

    let jitter = JitterConfig::new(options.stroke_width.max(0.0), options.style.opacity())
        .with_amount(options.jitter)
        .with_seed(options.seed);
    let mut rng = Rng::new(jitter.seed);

    svg.push_str(&format!(
        "  <g fill=\"none\" stroke=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\">\n",
        INK
    ));

    for circle in &geometry.circles {
        let c = fit.apply(circle.center());
        let stroke = jitter_stroke(&jitter, &mut rng);
        svg.push_str(&format!(
            "    <circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\"{}/>\n",
            c.x,
            c.y,
            fit.length(circle.r.abs()),
            stroke_attrs(&stroke)
        ));
    }

    for polyline in &geometry.polylines {
        let stroke = jitter_stroke(&jitter, &mut rng);
        svg.push_str(&format!(
            "    <path d=\"{}\"{}/>\n",
            path_data(polyline.points.iter().map(|p| fit.apply(*p))),
            stroke_attrs(&stroke)
        ));
    }

    for segment in &geometry.segments {
        let stroke = jitter_stroke(&jitter, &mut rng);
        svg.push_str(&format!(
            "    <path d=\"{}\"{}/>\n",
            path_data([fit.apply(segment.a), fit.apply(segment.b)].into_iter()),
            stroke_attrs(&stroke)
        ));
    }

    svg.push_str("  </g>\n</svg>\n");
    Ok(svg)
}

/// `M x y L x y ...` for canvas points.
fn path_data(points: impl Iterator<Item = Point>) -> String {
    let mut d = String::new();
    for (i, p) in points.enumerate() {
        if i > 0 {
            d.push(' ');
        }
        d.push_str(&format!("{}{:.2} {:.2}", if i == 0 { 'M' } else { 'L' }, p.x, p.y));
    }
    d
}

fn stroke_attrs(stroke: &StrokeStyle) -> String {
    format!(
        " stroke-width=\"{:.3}\" stroke-opacity=\"{:.3}\"",
        stroke.width, stroke.opacity
    )
}
