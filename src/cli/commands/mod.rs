//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod build;
mod cache;
mod corrections;
mod parse;
mod source;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::load_settings;

#[derive(Parser)]
#[command(name = "imadic")]
#[command(about = "Build kana-to-name IME dictionaries from character listings")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true, env = "IMADIC_CONFIG")]
    config: Option<PathBuf>,

    /// Data directory (overrides config file)
    #[arg(long, global = true, env = "IMADIC_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Build dictionaries (all configured dictionaries if none are named)
    Build {
        /// Dictionary names to build
        names: Vec<String>,
        /// Refetch source pages even when a cached name list exists
        #[arg(short, long)]
        refresh: bool,
    },

    /// Classify texts the way scraped candidates are classified
    Parse {
        /// Texts to classify
        #[arg(required = true)]
        texts: Vec<String>,
    },

    /// Validate the correction files
    CheckCorrections,

    /// List configured dictionary sources
    List,

    /// Manage cached name lists
    Cache {
        #[command(subcommand)]
        command: CacheCommands,
    },
}

#[derive(Subcommand)]
enum CacheCommands {
    /// List cached dictionaries
    List,
    /// Delete cached name lists (all if none are named)
    Clear {
        /// Dictionary names to clear
        names: Vec<String>,
    },
}

/// Parse arguments and run the selected command.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let (settings, _config) = load_settings(cli.config.as_deref(), cli.data_dir).await?;

    match cli.command {
        Commands::Build { names, refresh } => build::cmd_build(&settings, &names, refresh).await,
        Commands::Parse { texts } => parse::cmd_parse(&texts),
        Commands::CheckCorrections => corrections::cmd_check_corrections(&settings),
        Commands::List => source::cmd_list(&settings),
        Commands::Cache { command } => match command {
            CacheCommands::List => cache::cmd_cache_list(&settings),
            CacheCommands::Clear { names } => cache::cmd_cache_clear(&settings, &names),
        },
    }
}
