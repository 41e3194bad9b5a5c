//! Configuration loading
//!
//! Handles loading configuration from embedded defaults, files, and environment.

use super::config::AppConfig;
use anyhow::{Context, Result};
use config::{Config, Environment, File, FileFormat};
use std::path::Path;

/// Embedded default configuration (compiled into binary)
pub const DEFAULT_CONFIG: &str = include_str!("../../config/default.toml");

/// Load configuration from files and environment
pub fn load_config(user_file: Option<&Path>) -> Result<AppConfig> {
    let mut builder = Config::builder()
        // 1. Embedded defaults (always available)
        .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
        // 2. Project overrides (optional)
        .add_source(File::with_name("config/local").required(false));

    // 3. Explicit --config file (must exist)
    if let Some(path) = user_file {
        builder = builder.add_source(File::from(path).required(true));
    }

    // 4. Environment variables (highest priority), e.g. JSONCANVAS_OUTPUT__PRETTY
    let config = builder
        .add_source(
            Environment::with_prefix("JSONCANVAS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .context("Failed to build configuration")?;

    config
        .try_deserialize()
        .context("Failed to deserialize configuration")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_parse() {
        let config: AppConfig = toml::from_str(DEFAULT_CONFIG).unwrap();
        assert!(config.output.pretty);
        assert!(!config.validation.strict);
        assert_eq!(config.palette.cyan, "#53dfdd");
    }

    #[test]
    fn test_user_file_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[validation]\nstrict = true\n[palette]\nred = \"#ff0000\"\n")
            .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.validation.strict);
        assert_eq!(config.palette.red, "#ff0000");
        assert_eq!(config.palette.orange, "#e9973f");
    }

    #[test]
    fn test_missing_user_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
