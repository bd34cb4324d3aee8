//! Dialog colors and their TOML configuration.
//!
//! ```toml
//! [theme]
//! fg = "#000000"
//! bg = "#00aaaa"
//! selected_bg = "#e6c800"
//! field_fg = "#ffffff"
//! field_bg = "#0000aa"
//! ```
//!
//! Every key is optional; anything missing keeps the default.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::term::{CellStyle, Rgb};
use crate::widgets::WidgetStyle;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("reading {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("theme.{key}: {value:?} is not a #rrggbb color")]
    Color { key: &'static str, value: String },
}

/// Resolved dialog colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub fg: Rgb,
    pub bg: Rgb,
    /// Background of the highlighted button.
    pub selected_bg: Rgb,
    pub field_fg: Rgb,
    pub field_bg: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            fg: Rgb::BLACK,
            bg: Rgb::CYAN,
            selected_bg: Rgb::YELLOW,
            field_fg: Rgb::WHITE,
            field_bg: Rgb::BLUE,
        }
    }
}

impl Theme {
    pub fn text(&self) -> CellStyle {
        CellStyle::new(self.fg, self.bg)
    }

    pub fn button(&self, highlighted: bool) -> CellStyle {
        if highlighted {
            CellStyle::new(self.fg, self.selected_bg)
        } else {
            self.text()
        }
    }

    pub fn widget(&self) -> WidgetStyle {
        WidgetStyle {
            normal: CellStyle::new(self.field_fg, self.field_bg),
            cursor: CellStyle::new(self.field_bg, self.field_fg),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeConfig {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub selected_bg: Option<String>,
    pub field_fg: Option<String>,
    pub field_bg: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct DialogConfig {
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl DialogConfig {
    /// Load from `path`. A missing file gives the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        let config = Self::from_toml_str(&contents)?;
        log::info!("loaded config from {}", path.display());
        log::debug!("config: {config:?}");
        Ok(config)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    pub fn theme(&self) -> Result<Theme, ConfigError> {
        let defaults = Theme::default();
        let t = &self.theme;
        Ok(Theme {
            fg: color("fg", t.fg.as_deref(), defaults.fg)?,
            bg: color("bg", t.bg.as_deref(), defaults.bg)?,
            selected_bg: color("selected_bg", t.selected_bg.as_deref(), defaults.selected_bg)?,
            field_fg: color("field_fg", t.field_fg.as_deref(), defaults.field_fg)?,
            field_bg: color("field_bg", t.field_bg.as_deref(), defaults.field_bg)?,
        })
    }
}

fn color(key: &'static str, value: Option<&str>, default: Rgb) -> Result<Rgb, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => Rgb::from_hex(v).ok_or_else(|| ConfigError::Color {
            key,
            value: v.to_string(),
        }),
    }
}
