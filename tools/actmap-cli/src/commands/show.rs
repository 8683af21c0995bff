//! `actmap show` subcommand
//!
//! Prints every `(address, button)` pair after wildcard expansion and
//! overwrites, in the order the generated function will list them.

use crate::config::{load_mapping, DEFAULT_CONFIG_PATH};
use crate::error::CliResult;
use crate::output::{json, mapping_rows, table, OutputFormat};
use clap::Args;
use std::path::PathBuf;

/// Print the expanded mapping table
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// Path to the mapping file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

impl ShowCommand {
    pub fn execute(self) -> CliResult<()> {
        let store = load_mapping(&self.config)?;
        let rows = mapping_rows(&store);

        let rendered = match self.format {
            OutputFormat::Table => table::format_mappings_table(&rows),
            OutputFormat::Json => json::format_mappings_json(&rows, true)?,
            OutputFormat::JsonCompact => json::format_mappings_json(&rows, false)?,
        };
        println!("{rendered}");

        Ok(())
    }
}
