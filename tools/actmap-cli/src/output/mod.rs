//! Output Formatting
//!
//! Renderings of an expanded mapping for `actmap show`.

pub mod json;
pub mod table;

use actmap_codegen::{Address, MappingStore};
use serde::Serialize;

/// Output format selection
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact JSON (one line)
    JsonCompact,
}

/// One expanded `(address, button)` mapping, flattened for display.
#[derive(Debug, Clone, Serialize)]
pub struct MappingRow {
    pub address: Address,
    pub button: u8,
    pub value: i64,
    pub group: i64,
    pub encoded: i32,
}

/// Flatten a store into rows, preserving emission order.
pub fn mapping_rows(store: &MappingStore) -> Vec<MappingRow> {
    store
        .entries()
        .flat_map(|(address, bindings)| {
            bindings.map(move |b| MappingRow {
                address,
                button: b.button,
                value: b.value,
                group: b.group,
                encoded: b.encoded(),
            })
        })
        .collect()
}
