//! Preset color palette
//!
//! Canvas documents only store preset indices; the palette that turns them
//! into RGB values comes from configuration and is handed to whatever needs to
//! display colors.

use jsoncanvas_core::{CanvasColor, ColorError, HexColor};

use crate::settings::PaletteConfig;

/// Immutable mapping from preset index to hex color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    presets: [HexColor; 6],
}

impl Palette {
    /// Build from configuration, rejecting entries that are not hex colors
    pub fn from_config(config: &PaletteConfig) -> Result<Self, ColorError> {
        let [red, orange, yellow, green, cyan, purple] = config.entries().map(HexColor::new);
        Ok(Self {
            presets: [red?, orange?, yellow?, green?, cyan?, purple?],
        })
    }

    /// Hex value a color is displayed with
    pub fn resolve<'a>(&'a self, color: &'a CanvasColor) -> &'a HexColor {
        match color {
            CanvasColor::Hex(hex) => hex,
            CanvasColor::Preset(preset) => &self.presets[usize::from(preset.index()) - 1],
        }
    }
}
