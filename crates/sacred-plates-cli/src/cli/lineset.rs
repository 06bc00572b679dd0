//! Export a plate's 3-D line set as JSON.
//!
//! Output is an array of polylines, each an array of `{x, y, z}` points.
//! Unlike `render` there is no placeholder: an unknown slug is an error.

use std::error::Error;

use sacred_plates::{PlateStudio, PlateVariant, StudioConfig};
use tracing::info;

use super::common::write_output;

/// Execute the lineset command.
pub fn run(
    config: &StudioConfig,
    slug: &str,
    variant: PlateVariant,
    output: Option<&str>,
    pretty: bool,
) -> Result<(), Box<dyn Error>> {
    let studio = PlateStudio::with_config(config.clone());
    let set = studio.line_set(slug, variant)?;

    let points: usize = set.iter().map(|line| line.len()).sum();
    info!(slug, variant = variant.name(), polylines = set.len(), points, "built line set");

    let mut text = if pretty {
        serde_json::to_string_pretty(&set)?
    } else {
        serde_json::to_string(&set)?
    };
    text.push('\n');
    write_output(&text, output)
}
