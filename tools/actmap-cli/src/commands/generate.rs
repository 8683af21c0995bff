//! `actmap generate` subcommand
//!
//! Reads the mapping file and emits the `map_action` lookup function.
//!
//! # Usage
//!
//! ```text
//! actmap generate                               # embedded/user_config.conf -> embedded/user_config_map.hpp
//! actmap generate --check                       # validate only (CI)
//! actmap generate --dry-run                     # print to stdout, don't write
//! actmap generate --target rust -o src/map.rs   # Rust const fn instead of C++
//! ```
//!
//! The mapping file is parsed completely before anything is written, so an
//! invalid line never leaves a partial or modified output file behind.

use crate::config::{load_mapping, DEFAULT_CONFIG_PATH, DEFAULT_OUTPUT_PATH};
use crate::error::CliResult;
use actmap_codegen::{generate, OutputTarget};
use anyhow::Context;
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Language of the generated function
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum TargetArg {
    /// C++ header fragment (nested switch)
    #[default]
    Cpp,
    /// Rust const fn (nested match)
    Rust,
}

impl From<TargetArg> for OutputTarget {
    fn from(arg: TargetArg) -> Self {
        match arg {
            TargetArg::Cpp => OutputTarget::Cpp,
            TargetArg::Rust => OutputTarget::Rust,
        }
    }
}

/// Generate the lookup function from the mapping file
#[derive(Debug, Args)]
pub struct GenerateCommand {
    /// Path to the mapping file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Output path [default: embedded/user_config_map.hpp, `.rs` for --target rust]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Language of the generated function
    #[arg(short, long, value_enum, default_value = "cpp")]
    pub target: TargetArg,

    /// Validate the mapping file without writing (exit 1 if invalid)
    #[arg(long)]
    pub check: bool,

    /// Print generated output to stdout instead of writing the file
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    pub fn execute(self) -> CliResult<()> {
        // ── Parse (fail fast) ──────────────────────────────────────────────
        let store = load_mapping(&self.config)?;

        if self.check {
            println!(
                "{} {} validated successfully ({} address(es), {} mapping(s))",
                "✓".green(),
                self.config.display(),
                store.address_count(),
                store.mapping_count()
            );
            return Ok(());
        }

        // ── Generate ───────────────────────────────────────────────────────
        let target = OutputTarget::from(self.target);
        let source = generate(&store, target);

        if self.dry_run {
            print!("{source}");
            return Ok(());
        }

        // ── Write ──────────────────────────────────────────────────────────
        let output = self.output_path(target);
        write_if_changed(&output, &source)?;

        println!(
            "{} Mapping written into {}, all done ({} address(es), {} mapping(s))",
            "✓".green(),
            output.display(),
            store.address_count(),
            store.mapping_count()
        );

        Ok(())
    }

    fn output_path(&self, target: OutputTarget) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_PATH).with_extension(target.extension()))
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Write `contents` to `path`, creating parent directories as needed.
/// Leaves the file untouched when it already holds `contents`.
fn write_if_changed(path: &Path, contents: &str) -> CliResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating directory: {}", parent.display()))?;
    }

    let existing = std::fs::read_to_string(path).ok();
    if existing.as_deref() == Some(contents) {
        println!("  {} {} unchanged", "·".dimmed(), path.display());
        return Ok(());
    }

    std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
    println!("  {} {} written", "→".cyan(), path.display());
    Ok(())
}
