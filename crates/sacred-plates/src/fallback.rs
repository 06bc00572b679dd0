//! Placeholder plates for patterns that failed to generate or render.
//!
//! The placeholder has a fixed layout: background, a dashed frame, a
//! crossed-out circle, and the title as text. It never contains `<circle>`
//! or `<path>` elements, so it can't be mistaken for a real plate by
//! anything counting primitives, and it carries `data-plate-fallback`.

use quick_xml::escape::escape;

use crate::svg::{BACKGROUND, INK};

/// Attribute present on the root of every placeholder document.
pub const FALLBACK_MARKER: &str = r#"data-plate-fallback="true""#;

/// Default canvas, matching the thumbnail profile.
const DEFAULT_WIDTH: f64 = 320.0;
const DEFAULT_HEIGHT: f64 = 240.0;

/// Placeholder document at the default thumbnail size.
pub fn render_error(title: &str) -> String {
    render_error_sized(title, DEFAULT_WIDTH, DEFAULT_HEIGHT)
}

/// Placeholder document at a given canvas size.
///
/// Keeps layout stable when a plate fails: callers pass the dimensions the
/// real plate would have had. Non-finite or non-positive sizes fall back to
/// the default canvas.
pub fn render_error_sized(title: &str, width: f64, height: f64) -> String {
    let (width, height) = if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
        (width, height)
    } else {
        (DEFAULT_WIDTH, DEFAULT_HEIGHT)
    };

    let cx = width / 2.0;
    let cy = height / 2.0;
    let r = width.min(height) * 0.18;
    let inset = width.min(height) * 0.06;
    let font_size = (height * 0.07).max(8.0);
    let d = r * std::f64::consts::FRAC_1_SQRT_2;

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}" {marker}>
  <rect x="0" y="0" width="{w}" height="{h}" fill="{bg}"/>
  <rect x="{inset:.2}" y="{inset:.2}" width="{fw:.2}" height="{fh:.2}" fill="none" stroke="{ink}" stroke-opacity="0.35" stroke-dasharray="6 4"/>
  <ellipse cx="{cx:.2}" cy="{cy_mark:.2}" rx="{r:.2}" ry="{r:.2}" fill="none" stroke="{ink}" stroke-opacity="0.45"/>
  <line x1="{x0:.2}" y1="{y0:.2}" x2="{x1:.2}" y2="{y1:.2}" stroke="{ink}" stroke-opacity="0.45"/>
  <text x="{cx:.2}" y="{ty:.2}" text-anchor="middle" font-family="serif" font-size="{font_size:.1}" fill="{ink}">{title}</text>
</svg>
"#,
        w = width,
        h = height,
        marker = FALLBACK_MARKER,
        bg = BACKGROUND,
        ink = INK,
        inset = inset,
        fw = width - 2.0 * inset,
        fh = height - 2.0 * inset,
        cx = cx,
        cy_mark = cy - font_size * 0.6,
        r = r,
        x0 = cx - d,
        y0 = cy - font_size * 0.6 + d,
        x1 = cx + d,
        y1 = cy - font_size * 0.6 - d,
        ty = cy + r + font_size * 0.4,
        font_size = font_size,
        title = escape(title),
    )
}
