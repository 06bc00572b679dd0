//! Contact sheet of every catalog plate.
//!
//! Each cell is the plate's thumbnail exactly as the request path renders
//! it (placeholders included), nested as an inner `<svg>` and labelled
//! with the plate's title underneath.

use std::error::Error;

use quick_xml::escape::escape;
use sacred_plates::{FALLBACK_MARKER, PlateStudio, PlateVariant, StudioConfig};
use tracing::{debug, info};

use super::common::{write_output, write_png};

const MARGIN: f64 = 24.0;
const GUTTER: f64 = 16.0;
const HEADER_HEIGHT: f64 = 36.0;
const LABEL_HEIGHT: f64 = 20.0;

/// Execute the sheet command.
pub fn run(
    config: &StudioConfig,
    output: Option<&str>,
    columns: usize,
    png: Option<&str>,
    png_scale: f32,
) -> Result<(), Box<dyn Error>> {
    if columns == 0 {
        return Err("columns must be at least 1".into());
    }

    let studio = PlateStudio::with_config(config.clone());
    let svg = build_sheet(&studio, columns);

    write_output(&svg, output)?;
    if let Some(png_path) = png {
        write_png(&svg, png_path, png_scale)?;
    }
    Ok(())
}

/// Lay out every catalog plate in a grid `columns` wide.
pub fn build_sheet(studio: &PlateStudio, columns: usize) -> String {
    let columns = columns.max(1);
    let entries = studio.catalog().entries();
    let profile = studio.config().profile(PlateVariant::Thumbnail);
    let rows = entries.len().div_ceil(columns);

    let cell_width = profile.width;
    let cell_height = profile.height + LABEL_HEIGHT;
    let page_width = 2.0 * MARGIN + columns as f64 * cell_width + (columns.saturating_sub(1)) as f64 * GUTTER;
    let page_height = 2.0 * MARGIN
        + HEADER_HEIGHT
        + rows as f64 * cell_height
        + (rows.saturating_sub(1)) as f64 * GUTTER;

    info!(plates = entries.len(), columns, rows, "building contact sheet");

    let mut sheet = String::new();
    sheet.push_str(&format!(
        r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="{w:.2}" height="{h:.2}" viewBox="0 0 {w:.2} {h:.2}">
  <title>Sacred Geometry Plates</title>
  <rect width="100%" height="100%" fill="#ffffff"/>
  <text x="{cx:.2}" y="{ty:.2}" font-family="serif" font-size="20" text-anchor="middle" fill="#2f2419">Sacred Geometry Plates</text>
"##,
        w = page_width,
        h = page_height,
        cx = page_width / 2.0,
        ty = MARGIN + HEADER_HEIGHT / 2.0 + 6.0,
    ));

    let mut placeholders = 0;
    for (idx, entry) in entries.iter().enumerate() {
        let col = idx % columns;
        let row = idx / columns;
        let x = MARGIN + col as f64 * (cell_width + GUTTER);
        let y = MARGIN + HEADER_HEIGHT + row as f64 * (cell_height + GUTTER);

        let plate = studio.render_plate(entry.slug, PlateVariant::Thumbnail);
        if plate.contains(FALLBACK_MARKER) {
            placeholders += 1;
        }
        debug!(slug = entry.slug, col, row, "placed plate");

        sheet.push_str(&format!("  <g id=\"plate-{}\">\n", entry.slug));
        sheet.push_str(&nest(&plate, x, y));
        sheet.push_str(&format!(
            "    <text x=\"{:.2}\" y=\"{:.2}\" font-family=\"serif\" font-size=\"12\" text-anchor=\"middle\" fill=\"#2f2419\">{}</text>\n  </g>\n",
            x + cell_width / 2.0,
            y + profile.height + LABEL_HEIGHT - 6.0,
            escape(entry.title)
        ));
    }

    sheet.push_str("</svg>\n");
    info!(placeholders, "contact sheet done");
    sheet
}

/// Strip the XML declaration and position a document's root at (x, y).
fn nest(svg: &str, x: f64, y: f64) -> String {
    let body = match svg.find("?>") {
        Some(end) => svg[end + 2..].trim_start(),
        None => svg,
    };
    let mut nested = body.replacen("<svg ", &format!("<svg x=\"{:.2}\" y=\"{:.2}\" ", x, y), 1);
    if !nested.ends_with('\n') {
        nested.push('\n');
    }
    nested
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nest_drops_declaration_and_positions_root() {
        let nested = nest("<?xml version=\"1.0\"?>\n<svg width=\"10\"></svg>\n", 5.0, 7.5);
        assert!(nested.starts_with("<svg x=\"5.00\" y=\"7.50\" width=\"10\""));
        assert!(!nested.contains("<?xml"));
    }

    #[test]
    fn sheet_has_one_cell_per_plate() {
        let studio = PlateStudio::new();
        let sheet = build_sheet(&studio, 4);
        let cells = sheet.matches("<g id=\"plate-").count();
        assert_eq!(cells, studio.catalog().len());
        assert_eq!(sheet.matches("<?xml").count(), 1);
        assert!(sheet.contains("Metatron&apos;s Cube") || sheet.contains("Metatron's Cube"));
    }

    #[test]
    fn sheet_is_a_valid_document() {
        let sheet = build_sheet(&PlateStudio::new(), 3);
        assert!(usvg::Tree::from_str(&sheet, &usvg::Options::default()).is_ok());
    }
}
