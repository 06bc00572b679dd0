//! Common utilities shared across CLI commands.

use std::error::Error;
use std::fs;
use std::io::{self, Write};

use sacred_plates::StudioConfig;
use tiny_skia::Pixmap;
use tracing::info;

/// Load a studio config from YAML, or the defaults when no path is given.
///
/// Keys missing from the file keep their default values.
pub fn load_config(path: Option<&str>) -> Result<StudioConfig, Box<dyn Error>> {
    let Some(path) = path else {
        return Ok(StudioConfig::default());
    };
    let text = fs::read_to_string(path).map_err(|e| format!("reading {}: {}", path, e))?;
    let config: StudioConfig = serde_yaml::from_str(&text).map_err(|e| format!("parsing {}: {}", path, e))?;
    info!(path, size = config.size, "loaded config");
    Ok(config)
}

/// Write text to a file, or to stdout when no path is given.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), Box<dyn Error>> {
    match path {
        Some(path) => {
            fs::write(path, content).map_err(|e| format!("writing {}: {}", path, e))?;
            info!(path, bytes = content.len(), "wrote output");
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

/// Rasterize an SVG document to a PNG file using resvg.
pub fn write_png(svg: &str, png_path: &str, scale: f32) -> Result<(), Box<dyn Error>> {
    if !(scale.is_finite() && scale > 0.0) {
        return Err(format!("PNG scale must be positive, got {}", scale).into());
    }

    let options = usvg::Options::default();
    let tree = usvg::Tree::from_str(svg, &options)?;

    let size = tree.size();
    let pixmap_width = (size.width() * scale).ceil() as u32;
    let pixmap_height = (size.height() * scale).ceil() as u32;

    let mut pixmap = Pixmap::new(pixmap_width, pixmap_height).ok_or("could not create pixmap")?;

    // Fill with white background
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    pixmap.save_png(png_path)?;
    info!(path = png_path, width = pixmap_width, height = pixmap_height, "wrote PNG");
    Ok(())
}
