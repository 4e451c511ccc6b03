// src/draw/recording_surface.rs
//
// A DrawSurface that keeps every call as a DrawCommand instead of
// rasterizing. Used to inspect what the renderer asked for.

use nannou::prelude::*;

use crate::draw::{DrawSurface, RenderError};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    SetBackingSize { width: u32, height: u32 },
    SetDisplaySize { width: f32, height: f32 },
    Scale(f32),
    Clear,
    SetStrokeStyle { color: Rgb<f32>, width: f32 },
    SetFillColor(Rgb<f32>),
    BeginPath,
    MoveTo(Point2),
    LineTo(Point2),
    Arc {
        center: Point2,
        radius: f32,
        start_angle: f32,
        end_angle: f32,
    },
    Stroke,
    Fill,
    Flush,
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pixel_density: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(pixel_density: f32) -> Self {
        Self {
            pixel_density,
            commands: Vec::new(),
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn count(&self, wanted: &DrawCommand) -> usize {
        self.commands.iter().filter(|c| *c == wanted).count()
    }

    pub fn arcs(&self) -> impl Iterator<Item = (Point2, f32)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Arc { center, radius, .. } => Some((*center, *radius)),
            _ => None,
        })
    }
}

impl DrawSurface for RecordingSurface {
    fn pixel_density(&self) -> f32 {
        self.pixel_density
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        self.commands
            .push(DrawCommand::SetBackingSize { width, height });
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.commands
            .push(DrawCommand::SetDisplaySize { width, height });
    }

    fn scale(&mut self, factor: f32) {
        self.commands.push(DrawCommand::Scale(factor));
    }

    fn clear(&mut self) {
        self.commands.push(DrawCommand::Clear);
    }

    fn set_stroke_style(&mut self, color: Rgb<f32>, width: f32) {
        self.commands
            .push(DrawCommand::SetStrokeStyle { color, width });
    }

    fn set_fill_color(&mut self, color: Rgb<f32>) {
        self.commands.push(DrawCommand::SetFillColor(color));
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, point: Point2) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point2) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn arc(&mut self, center: Point2, radius: f32, start_angle: f32, end_angle: f32) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start_angle,
            end_angle,
        });
    }

    fn stroke(&mut self) {
        self.commands.push(DrawCommand::Stroke);
    }

    fn fill(&mut self) {
        self.commands.push(DrawCommand::Fill);
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        self.commands.push(DrawCommand::Flush);
        Ok(())
    }
}
