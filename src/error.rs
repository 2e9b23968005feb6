//! Error types for catalog loading and navigation.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::FlowId;

/// Malformed or unreadable catalog configuration.
///
/// All of these are raised at load time so a loaded catalog can never
/// produce an out-of-range cursor.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid catalog document ({origin}): {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("catalog contains no flows")]
    Empty,

    #[error("flow '{0}' has no steps")]
    EmptyFlow(FlowId),

    #[error("flow '{0}' is defined more than once")]
    DuplicateFlow(FlowId),

    #[error("default flow '{0}' is not defined in the catalog")]
    UnknownDefaultFlow(FlowId),
}

/// Rejected navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("flow '{0}' is not part of the loaded catalog")]
    FlowNotInCatalog(FlowId),
}

/// A flow identifier string that does not name any known flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown flow id '{0}' (expected one of: signup, login, authRequest, interService, query)")]
pub struct UnknownFlowId(pub String);

/// An accent colour that is not in `#rrggbb` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid colour '{0}', expected #rrggbb")]
pub struct ColorError(pub String);
