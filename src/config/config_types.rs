// src/config/config_types.rs
//
// Config types for the app. Every field has a default so a partial
// config.toml (or none at all) still yields a usable widget.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "gridpan".to_string(),
            width: 1280,
            height: 800,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GridConfig {
    pub extent_px: f32,
    pub step_px: f32,
    // None: use the window's scale factor
    pub pixel_density: Option<f32>,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            extent_px: 2000.0,
            step_px: 40.0,
            pixel_density: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub line_color: String,
    pub dot_color: String,
    pub background_color: String,
    pub line_width: f32,
    pub dot_radius: f32,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_color: "#eee".to_string(),
            dot_color: "#bbb".to_string(),
            background_color: "#fff".to_string(),
            line_width: 1.0,
            dot_radius: 2.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}
