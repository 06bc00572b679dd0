//! List the plates in the standard catalog.

use std::error::Error;

use sacred_plates::Catalog;

use super::common::write_output;

/// Execute the plates command.
pub fn run(json: bool) -> Result<(), Box<dyn Error>> {
    let catalog = Catalog::standard();

    if json {
        let mut text = serde_json::to_string_pretty(catalog.entries())?;
        text.push('\n');
        return write_output(&text, None);
    }

    let width = catalog.entries().iter().map(|e| e.slug.len()).max().unwrap_or(0);
    let mut text = format!("{} plates:\n", catalog.len());
    for entry in catalog.entries() {
        text.push_str(&format!(
            "  {:<width$}  {} - {}\n",
            entry.slug,
            entry.title,
            entry.caption,
            width = width
        ));
    }
    write_output(&text, None)
}
