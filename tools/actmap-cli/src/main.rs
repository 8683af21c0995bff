//! actmap CLI - compile button mapping files into firmware lookup code
//!
//! Reads a mapping file (`embedded/user_config.conf` by default) and writes
//! the generated `map_action` function (`embedded/user_config_map.hpp`).

use clap::{Parser, Subcommand};
use commands::{generate::GenerateCommand, show::ShowCommand};

mod commands;
mod config;
mod error;
mod output;

/// actmap - compile button mappings into lookup code
#[derive(Debug, Parser)]
#[command(name = "actmap")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate the lookup function from the mapping file
    #[command(name = "generate")]
    Generate(GenerateCommand),

    /// Print the expanded mapping table
    #[command(name = "show")]
    Show(ShowCommand),
}

fn main() {
    let cli = Cli::parse();

    // Log to stderr, stdout carries generated output in --dry-run mode
    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Command::Generate(cmd) => cmd.execute(),
        Command::Show(cmd) => cmd.execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
