// src/models/grid_spec.rs
//
// Static grid configuration consumed once at render time.

use thiserror::Error;

// Keeps the one-shot render bounded: at most this many lines per axis,
// so at most MAX_LINES_PER_AXIS^2 dots.
pub const MAX_LINES_PER_AXIS: usize = 1024;

// wgpu's default max_texture_dimension_2d
pub const MAX_BACKING_SIZE: u32 = 8192;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum GridSpecError {
    #[error("grid extent must be a finite, non-negative size, got {0}")]
    InvalidExtent(f32),
    #[error("grid step must be a finite, positive size, got {0}")]
    InvalidStep(f32),
    #[error("pixel density must be finite and positive, got {0}")]
    InvalidDensity(f32),
    #[error("extent {extent} with step {step} needs more than {max} lines per axis")]
    TooManyLines { extent: f32, step: f32, max: usize },
    #[error("backing raster of {size} px per axis exceeds the {max} px limit")]
    BackingTooLarge { size: f32, max: u32 },
}

/// Size of the grid in logical pixels, spacing between lines, and the
/// device pixel density the backing raster is rendered at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridSpec {
    extent_px: f32,
    step_px: f32,
    pixel_density: f32,
    line_count: usize,
    backing_size: u32,
}

impl GridSpec {
    pub fn new(extent_px: f32, step_px: f32, pixel_density: f32) -> Result<Self, GridSpecError> {
        if !extent_px.is_finite() || extent_px < 0.0 {
            return Err(GridSpecError::InvalidExtent(extent_px));
        }
        if !step_px.is_finite() || step_px <= 0.0 {
            return Err(GridSpecError::InvalidStep(step_px));
        }
        if !pixel_density.is_finite() || pixel_density <= 0.0 {
            return Err(GridSpecError::InvalidDensity(pixel_density));
        }

        let line_count = checked_line_count(extent_px, step_px).ok_or(
            GridSpecError::TooManyLines {
                extent: extent_px,
                step: step_px,
                max: MAX_LINES_PER_AXIS,
            },
        )?;

        let backing = (extent_px * pixel_density).round();
        if !backing.is_finite() || backing > MAX_BACKING_SIZE as f32 {
            return Err(GridSpecError::BackingTooLarge {
                size: backing,
                max: MAX_BACKING_SIZE,
            });
        }

        Ok(Self {
            extent_px,
            step_px,
            pixel_density,
            line_count,
            backing_size: backing as u32,
        })
    }

    pub fn extent_px(&self) -> f32 {
        self.extent_px
    }

    pub fn step_px(&self) -> f32 {
        self.step_px
    }

    pub fn pixel_density(&self) -> f32 {
        self.pixel_density
    }

    /// Number of line positions along one axis, both boundaries included.
    pub fn line_count(&self) -> usize {
        self.line_count
    }

    /// Positions 0, step, 2*step, ... up to and including the extent.
    // Computed from the index so long grids don't accumulate float error.
    pub fn line_positions(&self) -> impl Iterator<Item = f32> {
        let step = self.step_px;
        (0..self.line_count).map(move |i| i as f32 * step)
    }

    pub fn dot_count(&self) -> usize {
        self.line_count * self.line_count
    }

    /// Backing raster size in physical pixels, per axis.
    pub fn backing_size(&self) -> u32 {
        self.backing_size
    }
}

// None when the count is not finite or over MAX_LINES_PER_AXIS
fn checked_line_count(extent_px: f32, step_px: f32) -> Option<usize> {
    let intervals = (extent_px / step_px).floor();
    if !intervals.is_finite() || intervals >= MAX_LINES_PER_AXIS as f32 {
        return None;
    }
    (intervals as usize).checked_add(1)
}
