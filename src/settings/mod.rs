//! CLI configuration: types and layered loading

mod config;
mod loader;

pub use self::config::{AppConfig, PaletteConfig};
pub use self::loader::load_config;
