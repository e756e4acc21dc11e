//! Underlay configuration system.
//!
//! Loads style values from `underlay.toml` as an alternative to
//! hard-coding them at construction: colors as `"#rrggbb[aa]"` hex
//! strings, radii and paddings as plain numbers. The parsed config
//! converts into the [`StyleSheet`] consumed by the style presets.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use underlay_core::Color;
use underlay_span::StyleSheet;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color literal {0:?} (expected #rrggbb or #rrggbbaa)")]
    InvalidColor(String),
}

/// Top-level configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct UnderlayConfig {
    /// Background style values.
    pub style: StyleConfig,
}

/// Style configuration, mirroring [`StyleSheet`] with serializable
/// color literals.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Fill color of the marked background.
    pub fill: String,
    /// Halo color painted behind failed spans.
    pub halo: String,
    pub corner_radius: f32,
    pub horizontal_padding: f32,
    pub vertical_padding: f32,
    pub halo_inset: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        let defaults = StyleSheet::default();
        Self {
            fill: hex_of(defaults.fill),
            halo: hex_of(defaults.halo),
            corner_radius: defaults.corner_radius,
            horizontal_padding: defaults.horizontal_padding,
            vertical_padding: defaults.vertical_padding,
            halo_inset: defaults.halo_inset,
        }
    }
}

impl UnderlayConfig {
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn to_style_sheet(&self) -> Result<StyleSheet, ConfigError> {
        Ok(StyleSheet {
            fill: parse_hex_color(&self.style.fill)?,
            halo: parse_hex_color(&self.style.halo)?,
            corner_radius: self.style.corner_radius,
            horizontal_padding: self.style.horizontal_padding,
            vertical_padding: self.style.vertical_padding,
            halo_inset: self.style.halo_inset,
        })
    }
}

/// Parse a `#rrggbb` or `#rrggbbaa` literal.
pub fn parse_hex_color(s: &str) -> Result<Color, ConfigError> {
    let hex = s
        .strip_prefix('#')
        .ok_or_else(|| ConfigError::InvalidColor(s.to_owned()))?;
    let invalid = || ConfigError::InvalidColor(s.to_owned());
    let byte = |range: std::ops::Range<usize>| -> Result<u8, ConfigError> {
        u8::from_str_radix(hex.get(range).ok_or_else(invalid)?, 16).map_err(|_| invalid())
    };
    match hex.len() {
        6 => Ok(Color::rgba(byte(0..2)?, byte(2..4)?, byte(4..6)?, 0xff)),
        8 => Ok(Color::rgba(
            byte(0..2)?,
            byte(2..4)?,
            byte(4..6)?,
            byte(6..8)?,
        )),
        _ => Err(invalid()),
    }
}

fn hex_of(color: Color) -> String {
    let [r, g, b, a] = color.to_srgba_u8();
    if a == 0xff {
        format!("#{r:02x}{g:02x}{b:02x}")
    } else {
        format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
    }
}
