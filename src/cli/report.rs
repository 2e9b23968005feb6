//! Non-interactive output: flow listing, catalog dump and validation summary.

use std::io::{self, Write};

use crate::config::CatalogSource;
use crate::models::Catalog;

/// One line per flow: id, title and step count
pub fn write_flow_list<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    let id_width = catalog
        .flows()
        .iter()
        .map(|f| f.id.as_str().len())
        .max()
        .unwrap_or(0);

    for flow in catalog.flows() {
        let marker = if flow.id == catalog.default_flow() { "*" } else { " " };
        writeln!(
            out,
            "{} {:width$}  {}  ({} steps)",
            marker,
            flow.id.as_str(),
            flow.label(),
            flow.steps.len(),
            width = id_width
        )?;
    }
    Ok(())
}

/// Pretty JSON of the catalog, in the same shape the loader reads
pub fn write_catalog_json<W: Write>(out: &mut W, catalog: &Catalog) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&catalog.to_document())
        .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
    writeln!(out, "{}", json)
}

/// Summary printed by --check
pub fn write_check_summary<W: Write>(
    out: &mut W,
    catalog: &Catalog,
    source: &CatalogSource,
) -> io::Result<()> {
    writeln!(out, "✓ Catalog OK ({})", source)?;
    writeln!(out, "  flows:        {}", catalog.len())?;
    writeln!(out, "  steps:        {}", catalog.step_count())?;
    writeln!(out, "  default flow: {}", catalog.default_flow())?;
    writeln!(
        out,
        "  architecture: {}",
        if catalog.architecture().is_some() { "yes" } else { "no" }
    )?;
    Ok(())
}
