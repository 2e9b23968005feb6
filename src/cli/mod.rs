//! CLI argument parsing and non-interactive reports.

mod args;
mod report;

pub use args::{parse_args, VERSION};
pub use report::{write_catalog_json, write_check_summary, write_flow_list};
