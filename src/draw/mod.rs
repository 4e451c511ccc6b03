// src/draw/mod.rs
// The drawing-surface boundary
//
// DrawSurface is the immediate-mode context the grid renderer talks to.
// Coordinates are logical pixels, origin at the top left, y pointing down.

pub mod arc;
pub mod path_builder;
pub mod recording_surface;
pub mod texture_surface;

pub use path_builder::PathBuilder;
pub use recording_surface::{DrawCommand, RecordingSurface};
pub use texture_surface::TextureSurface;

use nannou::prelude::*;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum RenderError {
    #[error("no drawing context available: {0}")]
    ContextUnavailable(String),
}

pub trait DrawSurface {
    /// Device pixels per logical pixel for the display this surface targets.
    fn pixel_density(&self) -> f32;

    /// Resolution of the backing raster, in physical pixels.
    fn set_backing_size(&mut self, width: u32, height: u32);

    /// Size the surface occupies on screen, in logical pixels.
    fn set_display_size(&mut self, width: f32, height: f32);

    /// Multiplies the current scale. All later drawing is in scaled units.
    fn scale(&mut self, factor: f32);

    fn clear(&mut self);

    fn set_stroke_style(&mut self, color: Rgb<f32>, width: f32);

    fn set_fill_color(&mut self, color: Rgb<f32>);

    fn begin_path(&mut self);

    fn move_to(&mut self, point: Point2);

    fn line_to(&mut self, point: Point2);

    /// Adds a circular arc to the current path. Angles in radians,
    /// measured clockwise on screen since y points down.
    fn arc(&mut self, center: Point2, radius: f32, start_angle: f32, end_angle: f32);

    fn stroke(&mut self);

    fn fill(&mut self);

    /// Pushes everything drawn so far to the backing raster.
    fn flush(&mut self) -> Result<(), RenderError>;
}
