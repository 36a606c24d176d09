//! Catalog command handler for listing the reference tables.

use anyhow::{Context, Result};

use aerocharge_cli::output::{render_catalog, render_catalog_json, CatalogTable, OutputFormat};
use aerocharge_cli::terminal::ColorPalette;
use aerocharge_lib::reference_catalog;

/// Print one reference table, or all of them when `table` is `None`.
pub fn handle_catalog(table: Option<CatalogTable>, format: OutputFormat) -> Result<()> {
    let catalog = reference_catalog().context("failed to load reference catalog")?;

    match format {
        OutputFormat::Text => print!("{}", render_catalog(catalog, table, &ColorPalette::detect())),
        OutputFormat::Json => {
            let json = render_catalog_json(catalog, table)
                .context("failed to serialize reference catalog")?;
            println!("{json}");
        }
    }

    Ok(())
}
