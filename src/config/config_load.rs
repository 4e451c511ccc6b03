// src/config/config_load.rs
//
// loading of config.toml

use nannou::prelude::*;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use thiserror::Error;

use crate::config::{GridConfig, LoggingConfig, StyleConfig, WindowConfig};
use crate::models::{GridSpec, GridSpecError, GridStyle};

const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid color {value:?} for {field}, expected #rgb or #rrggbb")]
    InvalidColor { field: &'static str, value: String },
    #[error("invalid grid settings: {0}")]
    InvalidGrid(#[from] GridSpecError),
}

#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    pub window: WindowConfig,
    pub grid: GridConfig,
    pub style: StyleConfig,
    pub logging: LoggingConfig,
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return exe_config;
        }

        // Fallback to loading from the current working directory
        Self::load_from_path(PathBuf::from(CONFIG_FILE))
    }

    fn load_from_exe_dir() -> Option<Result<Self, ConfigError>> {
        let exe_path = std::env::current_exe().ok()?;
        let config_path = exe_path.parent()?.join(CONFIG_FILE);

        if config_path.exists() {
            Some(Self::load_from_path(config_path))
        } else {
            None
        }
    }

    fn load_from_path(path: PathBuf) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = Self::from_toml(&content)?;
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        // fail early on bad values rather than at first render
        config.grid_style()?;
        config.background_color()?;
        config.grid_spec(1.0)?;
        Ok(config)
    }

    /// Builds the grid spec, preferring the configured density over the
    /// one reported by the display.
    pub fn grid_spec(&self, display_density: f32) -> Result<GridSpec, ConfigError> {
        let density = self.grid.pixel_density.unwrap_or(display_density);
        Ok(GridSpec::new(
            self.grid.extent_px,
            self.grid.step_px,
            density,
        )?)
    }

    pub fn grid_style(&self) -> Result<GridStyle, ConfigError> {
        Ok(GridStyle {
            line_color: parse_color("style.line_color", &self.style.line_color)?,
            dot_color: parse_color("style.dot_color", &self.style.dot_color)?,
            line_width: self.style.line_width,
            dot_radius: self.style.dot_radius,
        })
    }

    pub fn background_color(&self) -> Result<Rgb<f32>, ConfigError> {
        parse_color("style.background_color", &self.style.background_color)
    }
}

fn hex_color_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^#([0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("hex color pattern is valid")
    })
}

/// Parses `#rgb` or `#rrggbb`.
pub fn parse_color(field: &'static str, value: &str) -> Result<Rgb<f32>, ConfigError> {
    let invalid = || ConfigError::InvalidColor {
        field,
        value: value.to_string(),
    };
    let caps = hex_color_regex().captures(value.trim()).ok_or_else(invalid)?;
    let hex = &caps[1];

    // shorthand #eee means #eeeeee
    let expanded: String = if hex.len() == 3 {
        hex.chars().flat_map(|c| [c, c]).collect()
    } else {
        hex.to_string()
    };

    let channel = |i: usize| {
        u8::from_str_radix(&expanded[i..i + 2], 16)
            .map(|v| v as f32 / 255.0)
            .map_err(|_| invalid())
    };
    Ok(rgb(channel(0)?, channel(2)?, channel(4)?))
}
