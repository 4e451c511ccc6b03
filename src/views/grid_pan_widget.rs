// src/views/grid_pan_widget.rs
//
// A pannable grid background: the grid is rendered once onto its
// surface at initialize, then displayed translated by the pan offset.
// It is not re-rendered on resize, density change or pan.

use nannou::prelude::*;
use thiserror::Error;

use crate::controllers::{PanController, PointerReleaseHub};
use crate::draw::{DrawSurface, RenderError};
use crate::models::{GridSpec, GridStyle, PanPhase};
use crate::render::GridRenderer;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum WidgetError {
    #[error("widget is already initialized")]
    AlreadyInitialized,
    #[error("widget has been disposed")]
    Disposed,
    #[error(transparent)]
    Render(#[from] RenderError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Created,
    Mounted,
    Disposed,
}

pub struct GridPanWidget<S: DrawSurface> {
    spec: GridSpec,
    renderer: GridRenderer,
    surface: S,
    controller: PanController,
    lifecycle: Lifecycle,
    render_count: u32,
}

impl<S: DrawSurface> GridPanWidget<S> {
    pub fn new(spec: GridSpec, style: GridStyle, surface: S) -> Self {
        Self {
            spec,
            renderer: GridRenderer::new(style),
            surface,
            controller: PanController::new(),
            lifecycle: Lifecycle::Created,
            render_count: 0,
        }
    }

    /// Renders the grid and installs the global release listener.
    /// Must be called exactly once.
    pub fn initialize(&mut self, hub: &mut PointerReleaseHub) -> Result<(), WidgetError> {
        match self.lifecycle {
            Lifecycle::Mounted => return Err(WidgetError::AlreadyInitialized),
            Lifecycle::Disposed => return Err(WidgetError::Disposed),
            Lifecycle::Created => {}
        }

        self.renderer.render(&mut self.surface, &self.spec)?;
        self.render_count += 1;
        self.controller.attach(hub);
        self.lifecycle = Lifecycle::Mounted;
        Ok(())
    }

    /// Removes the global release listener. Safe to call more than once.
    pub fn dispose(&mut self, hub: &mut PointerReleaseHub) {
        if self.lifecycle == Lifecycle::Disposed {
            log::warn!("Grid widget disposed twice");
            return;
        }
        self.controller.drag_end();
        self.controller.detach(hub);
        self.lifecycle = Lifecycle::Disposed;
    }

    pub fn pointer_pressed(&mut self, position: Point2) {
        self.controller.drag_start(position);
    }

    pub fn pointer_moved(&mut self, position: Point2) -> Option<Vec2> {
        self.controller.drag_move(position)
    }

    pub fn pointer_released(&mut self) {
        self.controller.drag_end();
    }

    pub fn set_offset_observer<F>(&mut self, observer: F)
    where
        F: FnMut(Vec2) + 'static,
    {
        self.controller.set_offset_observer(observer);
    }

    pub fn offset(&self) -> Vec2 {
        self.controller.offset()
    }

    pub fn phase(&self) -> PanPhase {
        self.controller.phase()
    }

    pub fn render_count(&self) -> u32 {
        self.render_count
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Where the grid surface is shown, relative to the widget's centre
    /// (y up): its logical size, centred, shifted by the pan offset.
    pub fn display_rect(&self) -> Rect {
        let extent = self.spec.extent_px();
        Rect::from_xy_wh(self.offset(), vec2(extent, extent))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawCommand, RecordingSurface};

    fn widget() -> GridPanWidget<RecordingSurface> {
        let spec = GridSpec::new(2000.0, 40.0, 1.0).unwrap();
        GridPanWidget::new(spec, GridStyle::default(), RecordingSurface::new(1.0))
    }

    #[test]
    fn test_render_runs_once_regardless_of_panning() {
        let mut hub = PointerReleaseHub::new();
        let mut widget = widget();
        widget.initialize(&mut hub).unwrap();

        widget.pointer_pressed(pt2(0.0, 0.0));
        for i in 1..=50 {
            widget.pointer_moved(pt2(i as f32, -(i as f32)));
        }
        widget.pointer_released();

        assert_eq!(widget.render_count(), 1);
        assert_eq!(widget.surface().count(&DrawCommand::Flush), 1);
        assert_eq!(widget.offset(), vec2(50.0, -50.0));
    }

    #[test]
    fn test_second_initialize_is_rejected() {
        let mut hub = PointerReleaseHub::new();
        let mut widget = widget();
        widget.initialize(&mut hub).unwrap();

        assert_eq!(
            widget.initialize(&mut hub),
            Err(WidgetError::AlreadyInitialized)
        );
        assert_eq!(widget.render_count(), 1);
        assert_eq!(hub.len(), 1);
    }

    #[test]
    fn test_release_outside_widget_ends_drag() {
        let mut hub = PointerReleaseHub::new();
        let mut widget = widget();
        widget.initialize(&mut hub).unwrap();

        widget.pointer_pressed(pt2(10.0, 10.0));
        widget.pointer_moved(pt2(30.0, 10.0));
        assert_eq!(widget.phase(), PanPhase::Dragging);

        hub.dispatch();
        assert_eq!(widget.phase(), PanPhase::Idle);
        assert_eq!(widget.pointer_moved(pt2(300.0, 300.0)), None);
        assert_eq!(widget.offset(), vec2(20.0, 0.0));
    }

    #[test]
    fn test_dispose_removes_global_listener() {
        let mut hub = PointerReleaseHub::new();
        let mut widget = widget();
        widget.initialize(&mut hub).unwrap();
        assert_eq!(hub.len(), 1);

        widget.dispose(&mut hub);
        assert!(hub.is_empty());
        assert!(!widget.is_mounted());
        assert_eq!(hub.dispatch(), 0);
        assert_eq!(widget.initialize(&mut hub), Err(WidgetError::Disposed));
    }

    #[test]
    fn test_dropped_widget_listener_is_pruned() {
        let mut hub = PointerReleaseHub::new();
        let mut widget = widget();
        widget.initialize(&mut hub).unwrap();
        drop(widget);

        assert_eq!(hub.dispatch(), 1);
        assert!(hub.is_empty());
    }

    #[test]
    fn test_display_rect_is_centred_translation() {
        let mut hub = PointerReleaseHub::new();
        let mut widget = widget();
        widget.initialize(&mut hub).unwrap();

        let rect = widget.display_rect();
        assert_eq!(rect.xy(), Vec2::ZERO);
        assert_eq!(rect.wh(), vec2(2000.0, 2000.0));

        widget.pointer_pressed(pt2(100.0, 100.0));
        widget.pointer_moved(pt2(120.0, 115.0));
        widget.pointer_moved(pt2(90.0, 115.0));
        widget.pointer_released();

        let rect = widget.display_rect();
        assert_eq!(rect.xy(), vec2(-10.0, 15.0));
        // size never changes, only position
        assert_eq!(rect.wh(), vec2(2000.0, 2000.0));
    }

    #[test]
    fn test_render_failure_leaves_widget_unmounted() {
        struct NoContext;
        impl DrawSurface for NoContext {
            fn pixel_density(&self) -> f32 {
                1.0
            }
            fn set_backing_size(&mut self, _: u32, _: u32) {}
            fn set_display_size(&mut self, _: f32, _: f32) {}
            fn scale(&mut self, _: f32) {}
            fn clear(&mut self) {}
            fn set_stroke_style(&mut self, _: Rgb<f32>, _: f32) {}
            fn set_fill_color(&mut self, _: Rgb<f32>) {}
            fn begin_path(&mut self) {}
            fn move_to(&mut self, _: Point2) {}
            fn line_to(&mut self, _: Point2) {}
            fn arc(&mut self, _: Point2, _: f32, _: f32, _: f32) {}
            fn stroke(&mut self) {}
            fn fill(&mut self) {}
            fn flush(&mut self) -> Result<(), RenderError> {
                Err(RenderError::ContextUnavailable("test".to_string()))
            }
        }

        let mut hub = PointerReleaseHub::new();
        let spec = GridSpec::new(100.0, 10.0, 1.0).unwrap();
        let mut widget = GridPanWidget::new(spec, GridStyle::default(), NoContext);

        assert!(matches!(
            widget.initialize(&mut hub),
            Err(WidgetError::Render(_))
        ));
        assert!(!widget.is_mounted());
        assert!(hub.is_empty());
        assert_eq!(widget.render_count(), 0);
    }
}
