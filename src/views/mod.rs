// src/views/mod.rs

pub mod grid_pan_widget;

pub use grid_pan_widget::{GridPanWidget, WidgetError};
