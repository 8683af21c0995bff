//! Mapping file loading shared by all commands

use std::path::Path;

use actmap_codegen::{parse_config, MappingStore};
use anyhow::Context;
use tracing::debug;

use crate::error::{CliError, CliResult};

/// Mapping file read when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "embedded/user_config.conf";

/// Generated header written when `--output` is not given.
pub const DEFAULT_OUTPUT_PATH: &str = "embedded/user_config_map.hpp";

/// Read and parse a mapping file, failing on the first invalid line.
pub fn load_mapping(path: &Path) -> CliResult<MappingStore> {
    if !path.exists() {
        return Err(CliError::config_not_found(path));
    }

    let text =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;

    let store = parse_config(&text).map_err(|e| CliError::invalid_config(path, e))?;
    debug!(
        path = %path.display(),
        addresses = store.address_count(),
        mappings = store.mapping_count(),
        "mapping file parsed"
    );
    Ok(store)
}
