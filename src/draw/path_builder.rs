// src/draw/path_builder.rs
//
// Path state for surfaces that rasterize through nannou: subpaths in
// surface space (top left origin, y down), plus the mapping into
// nannou's centred, y-up draw space.

use nannou::prelude::*;

use crate::draw::arc::{arc_points, ARC_RESOLUTION};

/// Maps a surface point into draw space for a surface of `display_size`.
/// (0,0) lands at (-w/2, h/2) and (w,h) at (w/2, -h/2).
pub fn to_draw_space(point: Point2, display_size: Vec2) -> Point2 {
    pt2(
        point.x - display_size.x / 2.0,
        display_size.y / 2.0 - point.y,
    )
}

#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    subpaths: Vec<Vec<Point2>>,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self) {
        self.subpaths.clear();
    }

    pub fn move_to(&mut self, point: Point2) {
        self.subpaths.push(vec![point]);
    }

    // Without a preceding move_to, this opens the first subpath
    pub fn line_to(&mut self, point: Point2) {
        self.current().push(point);
    }

    pub fn arc(&mut self, center: Point2, radius: f32, start_angle: f32, end_angle: f32) {
        let points = arc_points(center, radius, start_angle, end_angle, ARC_RESOLUTION);
        self.current().extend(points);
    }

    pub fn subpaths(&self) -> &[Vec<Point2>] {
        &self.subpaths
    }

    /// Consecutive point pairs of every subpath, for stroking.
    pub fn stroke_segments(&self) -> impl Iterator<Item = (Point2, Point2)> + '_ {
        self.subpaths
            .iter()
            .flat_map(|subpath| subpath.windows(2).map(|w| (w[0], w[1])))
    }

    /// Subpaths that enclose an area; anything under 3 points is skipped.
    pub fn fill_polygons(&self) -> impl Iterator<Item = &[Point2]> + '_ {
        self.subpaths
            .iter()
            .filter(|subpath| subpath.len() >= 3)
            .map(|subpath| subpath.as_slice())
    }

    fn current(&mut self) -> &mut Vec<Point2> {
        if self.subpaths.is_empty() {
            self.subpaths.push(Vec::new());
        }
        let last = self.subpaths.len() - 1;
        &mut self.subpaths[last]
    }
}
