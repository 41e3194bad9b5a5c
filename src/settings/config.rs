//! Application configuration types

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default directory for `list`
    #[serde(default)]
    pub canvas_dir: Option<String>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub validation: ValidationConfig,
    #[serde(default)]
    pub palette: PaletteConfig,
}

impl AppConfig {
    /// Directory to list when none is given on the command line
    ///
    /// Configured `canvas_dir`, else the user's documents directory, else the
    /// current directory.
    pub fn canvas_dir(&self) -> PathBuf {
        self.canvas_dir
            .as_ref()
            .map(PathBuf::from)
            .or_else(dirs::document_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_toml()?;
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }
        fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }
}

/// Output formatting
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

/// Decode validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidationConfig {
    #[serde(default)]
    pub strict: bool,
}

/// Hex values for the six preset colors, in preset order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    #[serde(default = "default_red")]
    pub red: String,
    #[serde(default = "default_orange")]
    pub orange: String,
    #[serde(default = "default_yellow")]
    pub yellow: String,
    #[serde(default = "default_green")]
    pub green: String,
    #[serde(default = "default_cyan")]
    pub cyan: String,
    #[serde(default = "default_purple")]
    pub purple: String,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            red: default_red(),
            orange: default_orange(),
            yellow: default_yellow(),
            green: default_green(),
            cyan: default_cyan(),
            purple: default_purple(),
        }
    }
}

impl PaletteConfig {
    /// Entries in preset order (`"1"` first)
    pub fn entries(&self) -> [&str; 6] {
        [
            &self.red,
            &self.orange,
            &self.yellow,
            &self.green,
            &self.cyan,
            &self.purple,
        ]
    }
}

fn default_true() -> bool {
    true
}

fn default_red() -> String {
    "#fb464c".to_string()
}
fn default_orange() -> String {
    "#e9973f".to_string()
}
fn default_yellow() -> String {
    "#e0de71".to_string()
}
fn default_green() -> String {
    "#44cf6e".to_string()
}
fn default_cyan() -> String {
    "#53dfdd".to_string()
}
fn default_purple() -> String {
    "#a882ff".to_string()
}
