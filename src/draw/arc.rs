// src/draw/arc.rs
// Tessellates circular arcs into points

use nannou::prelude::*;

pub const ARC_RESOLUTION: usize = 32;

/// Points along an arc from start_angle to end_angle (radians), inclusive
/// of both ends. A full turn yields a closed ring whose last point
/// repeats the first.
pub fn arc_points(
    center: Point2,
    radius: f32,
    start_angle: f32,
    end_angle: f32,
    resolution: usize,
) -> Vec<Point2> {
    let resolution = resolution.max(1);
    let sweep = end_angle - start_angle;
    let mut points = Vec::with_capacity(resolution + 1);

    for i in 0..=resolution {
        let t = i as f32 / resolution as f32;
        let angle = start_angle + t * sweep;
        points.push(pt2(
            center.x + radius * angle.cos(),
            center.y + radius * angle.sin(),
        ));
    }
    points
}
