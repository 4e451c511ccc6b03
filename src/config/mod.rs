// src/config/mod.rs

pub mod config_load;
pub mod config_types;

pub use config_load::{parse_color, Config, ConfigError};
pub use config_types::{GridConfig, LoggingConfig, StyleConfig, WindowConfig};
