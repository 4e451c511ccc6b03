// src/controllers/pan_controller.rs
//
// Turns pointer drags into an accumulated pan offset.
//
// Idle --drag_start--> Dragging --drag_end--> Idle
// Dragging --drag_move--> Dragging (offset += pointer delta)
//
// Moves are applied incrementally against the previous pointer position,
// so the offset tracks the pointer exactly however many moves arrive.

use nannou::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

use crate::controllers::pointer_release::{ListenerId, ListenerStatus, PointerReleaseHub};
use crate::models::{DragState, PanPhase};

type OffsetObserver = Box<dyn FnMut(Vec2)>;

#[derive(Default)]
pub struct PanController {
    offset: Vec2,
    // shared with the global release listener, which only holds a Weak
    drag: Rc<Cell<DragState>>,
    release_listener: Option<ListenerId>,
    observer: Option<OffsetObserver>,
}

impl PanController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    pub fn phase(&self) -> PanPhase {
        self.drag.get().phase()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.get().active
    }

    /// Called with the new offset every time it changes.
    pub fn set_offset_observer<F>(&mut self, observer: F)
    where
        F: FnMut(Vec2) + 'static,
    {
        self.observer = Some(Box::new(observer));
    }

    pub fn drag_start(&mut self, position: Point2) {
        self.drag.set(DragState::started_at(position));
        log::debug!("Drag started at ({:.1}, {:.1})", position.x, position.y);
    }

    /// Applies the pointer delta since the last event. Returns the delta,
    /// or None when no drag is active.
    pub fn drag_move(&mut self, position: Point2) -> Option<Vec2> {
        let state = self.drag.get();
        if !state.active {
            return None;
        }

        let delta = position - state.last_pointer_position;
        self.offset += delta;
        self.drag.set(DragState::started_at(position));

        if let Some(observer) = self.observer.as_mut() {
            observer(self.offset);
        }
        Some(delta)
    }

    pub fn drag_end(&mut self) {
        end_drag(&self.drag);
    }

    /// Installs the global release listener. Does nothing if already attached.
    pub fn attach(&mut self, hub: &mut PointerReleaseHub) {
        if self.release_listener.is_some() {
            return;
        }
        let drag = Rc::downgrade(&self.drag);
        // once the controller is dropped the hub prunes this listener
        let id = hub.subscribe(move || match drag.upgrade() {
            Some(drag) => {
                end_drag(&drag);
                ListenerStatus::Alive
            }
            None => ListenerStatus::Dead,
        });
        self.release_listener = Some(id);
    }

    pub fn detach(&mut self, hub: &mut PointerReleaseHub) {
        if let Some(id) = self.release_listener.take() {
            hub.unsubscribe(id);
        }
    }

    pub fn is_attached(&self) -> bool {
        self.release_listener.is_some()
    }
}

fn end_drag(drag: &Cell<DragState>) {
    let mut state = drag.get();
    if state.active {
        log::debug!("Drag ended");
    }
    state.active = false;
    drag.set(state);
}
