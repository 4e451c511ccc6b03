// src/models/grid_style.rs

use nannou::prelude::*;

// Stroke and fill used for the grid raster.
// Defaults are the light neutral #eee lines and slightly darker #bbb dots.
#[derive(Debug, Clone, PartialEq)]
pub struct GridStyle {
    pub line_color: Rgb<f32>,
    pub dot_color: Rgb<f32>,
    pub line_width: f32,
    pub dot_radius: f32,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            line_color: gray(0xee),
            dot_color: gray(0xbb),
            line_width: 1.0,
            dot_radius: 2.0,
        }
    }
}

fn gray(level: u8) -> Rgb<f32> {
    let v = level as f32 / 255.0;
    rgb(v, v, v)
}
