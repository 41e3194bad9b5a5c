//! CLI configuration management
//!
//! Provides `jsoncanvas config {show,save}` for viewing the effective
//! settings and persisting them to config/local.toml.

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Subcommand;
use tracing::info;

use crate::settings::AppConfig;

const LOCAL_CONFIG_PATH: &str = "config/local.toml";

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration as TOML
    Show,
    /// Write the effective configuration to a file
    Save {
        /// Destination (defaults to config/local.toml)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

pub fn run(cmd: ConfigCommands, config: &AppConfig) -> Result<()> {
    match cmd {
        ConfigCommands::Show => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        ConfigCommands::Save { output, force } => {
            let path = output.unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_PATH));
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            config.save(&path)?;
            info!(path = %path.display(), "Saved configuration");
            println!("✅ Wrote {}", path.display());
            Ok(())
        }
    }
}
