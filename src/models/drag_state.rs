// src/models/drag_state.rs
//
// Transient pointer-drag state, reinitialized on every drag start

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanPhase {
    Idle,
    Dragging,
}

// last_pointer_position is only meaningful while active
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    pub active: bool,
    pub last_pointer_position: Point2,
}

impl Default for DragState {
    fn default() -> Self {
        Self {
            active: false,
            last_pointer_position: Point2::ZERO,
        }
    }
}

impl DragState {
    pub fn started_at(position: Point2) -> Self {
        Self {
            active: true,
            last_pointer_position: position,
        }
    }

    pub fn phase(&self) -> PanPhase {
        if self.active {
            PanPhase::Dragging
        } else {
            PanPhase::Idle
        }
    }
}
