//! Render a single plate.
//!
//! Goes through the same cached request path a host would use, so an
//! unknown slug prints a placeholder plate rather than failing.

use std::error::Error;

use sacred_plates::{FALLBACK_MARKER, PlateStudio, PlateVariant, StudioConfig};
use tracing::warn;

use super::common::{write_output, write_png};

/// Execute the render command.
pub fn run(
    config: &StudioConfig,
    slug: &str,
    variant: PlateVariant,
    output: Option<&str>,
    png: Option<&str>,
    png_scale: f32,
) -> Result<(), Box<dyn Error>> {
    let studio = PlateStudio::with_config(config.clone());
    let svg = studio.render_plate(slug, variant);

    if svg.contains(FALLBACK_MARKER) {
        warn!(slug, "no plate could be drawn; wrote placeholder");
    }

    write_output(&svg, output)?;

    if let Some(png_path) = png {
        write_png(&svg, png_path, png_scale)?;
    }
    Ok(())
}
