//! CLI argument parsing and configuration.

use std::path::PathBuf;

use clap::Parser;

use crate::models::FlowId;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Step through microservice request flows in the terminal
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "msa-flow-tui", version, about, long_about = None)]
#[command(after_help = "Examples:
  msa-flow-tui                           # Walk through the embedded flows
  msa-flow-tui --flow login              # Start on the login flow
  msa-flow-tui --catalog my-flows.json   # Use a custom catalog
  msa-flow-tui --dump-catalog > c.json   # Export the catalog for editing")]
pub struct CliConfig {
    /// Catalog JSON file (default: ./msa-flow/catalog.json, then the user
    /// config dir, then the embedded catalog)
    #[arg(long, short = 'c', env = "MSA_FLOW_CATALOG", value_name = "PATH")]
    pub catalog: Option<PathBuf>,

    /// Flow to start on (signup, login, authRequest, interService, query)
    #[arg(long, short = 'f', value_name = "ID")]
    pub flow: Option<FlowId>,

    /// Start with the architecture overview hidden
    #[arg(long)]
    pub no_architecture: bool,

    /// Print the flows of the catalog and exit
    #[arg(long, conflicts_with_all = ["dump_catalog", "check"])]
    pub list_flows: bool,

    /// Print the catalog as JSON and exit
    #[arg(long, conflicts_with = "check")]
    pub dump_catalog: bool,

    /// Validate the catalog, print a summary and exit
    #[arg(long)]
    pub check: bool,

    /// Log file (default: <data dir>/msa-flow/msa-flow.log)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> CliConfig {
    CliConfig::parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        CliConfig::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let config = CliConfig::try_parse_from(["msa-flow-tui"]).unwrap();
        assert_eq!(config.flow, None);
        assert!(!config.no_architecture);
        assert!(!config.list_flows && !config.dump_catalog && !config.check);
    }

    #[test]
    fn test_flow_parsed_as_id() {
        let config = CliConfig::try_parse_from(["msa-flow-tui", "--flow", "interService"]).unwrap();
        assert_eq!(config.flow, Some(FlowId::InterService));
    }

    #[test]
    fn test_unknown_flow_rejected() {
        let result = CliConfig::try_parse_from(["msa-flow-tui", "-f", "checkout"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_catalog_path() {
        let config =
            CliConfig::try_parse_from(["msa-flow-tui", "--catalog", "flows.json", "--no-architecture"])
                .unwrap();
        assert_eq!(config.catalog, Some(PathBuf::from("flows.json")));
        assert!(config.no_architecture);
    }

    #[test]
    fn test_exit_modes_conflict() {
        let result = CliConfig::try_parse_from(["msa-flow-tui", "--list-flows", "--check"]);
        assert!(result.is_err());
    }
}
