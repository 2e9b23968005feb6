//! Catalog and log file locations.

use std::fmt;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::CatalogError;
use crate::models::Catalog;

/// Directory name used below the working directory and the user config dir
pub const APP_DIR: &str = "msa-flow";

/// File name of a catalog override
pub const CATALOG_FILE: &str = "catalog.json";

/// Where the active catalog came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// Passed with --catalog / MSA_FLOW_CATALOG
    Explicit(PathBuf),
    /// Found in one of the search locations
    Discovered(PathBuf),
    Embedded,
}

impl fmt::Display for CatalogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogSource::Explicit(path) | CatalogSource::Discovered(path) => {
                write!(f, "{}", path.display())
            }
            CatalogSource::Embedded => f.write_str("embedded default"),
        }
    }
}

/// Implicit catalog locations, in priority order:
/// 1. ./msa-flow/catalog.json (local project customization)
/// 2. <config dir>/msa-flow/catalog.json (global user config)
pub fn catalog_search_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(APP_DIR).join(CATALOG_FILE)];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join(APP_DIR).join(CATALOG_FILE));
    }
    paths
}

/// Load the catalog. An explicit path must load; search paths that do not
/// exist are skipped; the embedded catalog is the last resort.
pub fn resolve_catalog(
    explicit: Option<&Path>,
    search_paths: &[PathBuf],
) -> Result<(Catalog, CatalogSource), CatalogError> {
    if let Some(path) = explicit {
        let catalog = Catalog::load(path)?;
        info!(path = %path.display(), "loaded catalog from command line");
        return Ok((catalog, CatalogSource::Explicit(path.to_path_buf())));
    }

    for path in search_paths {
        if path.is_file() {
            // A file that exists but is malformed is still an error
            let catalog = Catalog::load(path)?;
            info!(path = %path.display(), "loaded catalog");
            return Ok((catalog, CatalogSource::Discovered(path.clone())));
        }
    }

    info!("using embedded catalog");
    Ok((Catalog::builtin()?, CatalogSource::Embedded))
}

/// Default log destination: <data dir>/msa-flow/msa-flow.log, falling back
/// to the working directory when no data dir is known
pub fn default_log_path() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join(APP_DIR))
        .unwrap_or_default()
        .join("msa-flow.log")
}
