//! CLI module for jsoncanvas
//!
//! Provides commands:
//! - `check`: decode files and report errors
//! - `fmt`: re-encode a file in canonical form
//! - `list`: enumerate canvas files in a directory
//! - `inspect`: summarize a canvas
//! - `config`: show or persist the effective configuration

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::settings::load_config;

pub mod check;
pub mod config;
pub mod fmt;
pub mod inspect;
pub mod list;

/// JSON Canvas command line tool
#[derive(Parser, Debug)]
#[command(name = "jsoncanvas")]
#[command(about = "Validate, format and inspect JSON Canvas files")]
#[command(version)]
pub struct Cli {
    /// Additional configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Decode canvas files and report the first error in each
    Check {
        /// Files to check
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Also reject duplicate ids, dangling edges and non-positive sizes
        #[arg(long)]
        strict: bool,
    },
    /// Rewrite a canvas in canonical key order
    Fmt {
        /// File to format
        file: PathBuf,
        /// Write back to the file instead of stdout
        #[arg(short, long)]
        write: bool,
        /// Emit compact JSON
        #[arg(long)]
        compact: bool,
    },
    /// List canvas files in a directory
    List {
        /// Directory to list (defaults to the configured canvas directory)
        dir: Option<PathBuf>,
    },
    /// Summarize nodes, edges and colors of a canvas
    Inspect {
        /// File to inspect
        file: PathBuf,
    },
    /// Show or save configuration
    #[command(subcommand)]
    Config(config::ConfigCommands),
}

/// Run the CLI command
pub fn run(cli: Cli) -> Result<()> {
    let Some(command) = cli.command else {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        cmd.print_help()?;
        println!();
        return Ok(());
    };

    let app_config =
        load_config(cli.config.as_deref()).context("Failed to load configuration")?;
    match command {
        Commands::Check { files, strict } => {
            check::run(&files, strict || app_config.validation.strict)
        }
        Commands::Fmt {
            file,
            write,
            compact,
        } => fmt::run(&file, write, compact || !app_config.output.pretty),
        Commands::List { dir } => list::run(&dir.unwrap_or_else(|| app_config.canvas_dir())),
        Commands::Inspect { file } => inspect::run(&file, &app_config),
        Commands::Config(cmd) => config::run(cmd, &app_config),
    }
}
