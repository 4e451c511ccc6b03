// src/models/mod.rs

pub mod drag_state;
pub mod grid_spec;
pub mod grid_style;

pub use drag_state::{DragState, PanPhase};
pub use grid_spec::{GridSpec, GridSpecError, MAX_BACKING_SIZE, MAX_LINES_PER_AXIS};
pub use grid_style::GridStyle;
