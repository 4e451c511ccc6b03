// src/render/grid_renderer.rs
// Draws the static grid raster: lines first, intersection dots on top

use nannou::prelude::*;
use std::f32::consts::TAU;

use crate::draw::{DrawSurface, RenderError};
use crate::models::{GridSpec, GridStyle};

pub struct GridRenderer {
    style: GridStyle,
}

impl GridRenderer {
    pub fn new(style: GridStyle) -> Self {
        Self { style }
    }

    /// Renders the whole grid onto the surface. Grid coordinates are
    /// logical pixels; the surface is scaled by the GridSpec's density.
    pub fn render(&self, surface: &mut dyn DrawSurface, spec: &GridSpec) -> Result<(), RenderError> {
        let extent = spec.extent_px();
        let backing = spec.backing_size();

        surface.set_backing_size(backing, backing);
        surface.set_display_size(extent, extent);
        surface.scale(spec.pixel_density());
        surface.clear();

        surface.set_stroke_style(self.style.line_color, self.style.line_width);
        for x in spec.line_positions() {
            surface.begin_path();
            surface.move_to(pt2(x, 0.0));
            surface.line_to(pt2(x, extent));
            surface.stroke();
        }
        for y in spec.line_positions() {
            surface.begin_path();
            surface.move_to(pt2(0.0, y));
            surface.line_to(pt2(extent, y));
            surface.stroke();
        }

        // Dots go after every line so they sit on top
        surface.set_fill_color(self.style.dot_color);
        for x in spec.line_positions() {
            for y in spec.line_positions() {
                surface.begin_path();
                surface.arc(pt2(x, y), self.style.dot_radius, 0.0, TAU);
                surface.fill();
            }
        }

        surface.flush()?;
        log::info!(
            "Rendered {0}x{0} grid ({1} lines per axis, {2} dots) at density {3}",
            extent,
            spec.line_count(),
            spec.dot_count(),
            spec.pixel_density()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{DrawCommand, RecordingSurface};

    fn render_default(density: f32) -> RecordingSurface {
        let spec = GridSpec::new(2000.0, 40.0, density).unwrap();
        let mut surface = RecordingSurface::new(density);
        GridRenderer::new(GridStyle::default())
            .render(&mut surface, &spec)
            .unwrap();
        surface
    }

    #[test]
    fn test_line_and_dot_counts() {
        let surface = render_default(1.0);

        // 51 vertical + 51 horizontal
        assert_eq!(surface.count(&DrawCommand::Stroke), 102);
        assert_eq!(surface.count(&DrawCommand::Fill), 2601);
        assert_eq!(surface.arcs().count(), 2601);
        assert_eq!(surface.count(&DrawCommand::Flush), 1);
    }

    #[test]
    fn test_surface_setup_uses_pixel_density() {
        let surface = render_default(2.0);
        let commands = surface.commands();

        assert_eq!(
            commands[0],
            DrawCommand::SetBackingSize {
                width: 4000,
                height: 4000
            }
        );
        assert_eq!(
            commands[1],
            DrawCommand::SetDisplaySize {
                width: 2000.0,
                height: 2000.0
            }
        );
        assert_eq!(commands[2], DrawCommand::Scale(2.0));
        assert_eq!(commands[3], DrawCommand::Clear);
    }

    #[test]
    fn test_lines_span_full_extent() {
        let surface = render_default(1.0);
        let commands = surface.commands();

        // First vertical line at x=0, last horizontal line at y=2000
        assert!(commands.contains(&DrawCommand::MoveTo(pt2(0.0, 0.0))));
        assert!(commands.contains(&DrawCommand::LineTo(pt2(0.0, 2000.0))));
        assert!(commands.contains(&DrawCommand::MoveTo(pt2(0.0, 2000.0))));
        assert!(commands.contains(&DrawCommand::LineTo(pt2(2000.0, 2000.0))));
        assert!(commands.contains(&DrawCommand::MoveTo(pt2(2000.0, 0.0))));
    }

    #[test]
    fn test_dots_drawn_after_all_lines() {
        let surface = render_default(1.0);
        let commands = surface.commands();

        let last_stroke = commands
            .iter()
            .rposition(|c| *c == DrawCommand::Stroke)
            .unwrap();
        let first_fill = commands
            .iter()
            .position(|c| *c == DrawCommand::Fill)
            .unwrap();
        assert!(last_stroke < first_fill);
    }

    #[test]
    fn test_default_style_is_applied() {
        let surface = render_default(1.0);
        let style = GridStyle::default();

        assert_eq!(
            surface.count(&DrawCommand::SetStrokeStyle {
                color: style.line_color,
                width: 1.0
            }),
            1
        );
        assert_eq!(surface.count(&DrawCommand::SetFillColor(style.dot_color)), 1);
        assert!(surface.arcs().all(|(_, radius)| radius == 2.0));
    }

    #[test]
    fn test_dots_sit_on_intersections() {
        let spec = GridSpec::new(80.0, 40.0, 1.0).unwrap();
        let mut surface = RecordingSurface::new(1.0);
        GridRenderer::new(GridStyle::default())
            .render(&mut surface, &spec)
            .unwrap();

        let centers: Vec<Point2> = surface.arcs().map(|(c, _)| c).collect();
        assert_eq!(centers.len(), 9);
        assert!(centers.contains(&pt2(0.0, 0.0)));
        assert!(centers.contains(&pt2(40.0, 80.0)));
        assert!(centers.contains(&pt2(80.0, 80.0)));
    }
}
