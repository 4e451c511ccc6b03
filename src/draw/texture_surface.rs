// src/draw/texture_surface.rs
//
// DrawSurface backed by a wgpu texture. Calls are recorded into a
// nannou Draw and rasterized into the texture on flush, at the
// accumulated scale so the logical grid stays sharp on dense displays.

use nannou::prelude::*;
use std::sync::Arc;

use crate::draw::path_builder::{to_draw_space, PathBuilder};
use crate::draw::{DrawSurface, RenderError};

pub struct TextureSurface {
    device_queue: Arc<wgpu::DeviceQueuePair>,
    pixel_density: f32,
    texture: Option<wgpu::Texture>,
    draw: Draw,
    display_size: Vec2,
    scale: f32,
    stroke_color: Rgb<f32>,
    stroke_width: f32,
    fill_color: Rgb<f32>,
    path: PathBuilder,
}

impl TextureSurface {
    /// Targets the window's GPU device and takes its scale factor as the
    /// display's pixel density.
    pub fn new(window: &Window) -> Self {
        Self {
            device_queue: window.device_queue_pair().clone(),
            pixel_density: window.scale_factor(),
            texture: None,
            draw: Draw::new(),
            display_size: Vec2::ZERO,
            scale: 1.0,
            stroke_color: rgb(0.0, 0.0, 0.0),
            stroke_width: 1.0,
            fill_color: rgb(0.0, 0.0, 0.0),
            path: PathBuilder::new(),
        }
    }

    pub fn texture(&self) -> Option<&wgpu::Texture> {
        self.texture.as_ref()
    }

    fn to_draw_space(&self, point: Point2) -> Point2 {
        to_draw_space(point, self.display_size)
    }
}

impl DrawSurface for TextureSurface {
    fn pixel_density(&self) -> f32 {
        self.pixel_density
    }

    fn set_backing_size(&mut self, width: u32, height: u32) {
        let Some(size) = backing_extent(width, height) else {
            log::warn!("Refusing to allocate a {}x{} grid texture", width, height);
            self.texture = None;
            return;
        };
        let texture = wgpu::TextureBuilder::new()
            .size(size)
            // Drawn into by the Draw renderer, then sampled when displayed
            .usage(wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING)
            .sample_count(1)
            .format(wgpu::TextureFormat::Rgba16Float)
            .build(self.device_queue.device());
        self.texture = Some(texture);
    }

    fn set_display_size(&mut self, width: f32, height: f32) {
        self.display_size = vec2(width, height);
    }

    fn scale(&mut self, factor: f32) {
        self.scale *= factor;
    }

    fn clear(&mut self) {
        self.draw.background().color(srgba(0.0, 0.0, 0.0, 0.0));
    }

    fn set_stroke_style(&mut self, color: Rgb<f32>, width: f32) {
        self.stroke_color = color;
        self.stroke_width = width;
    }

    fn set_fill_color(&mut self, color: Rgb<f32>) {
        self.fill_color = color;
    }

    fn begin_path(&mut self) {
        self.path.begin();
    }

    fn move_to(&mut self, point: Point2) {
        self.path.move_to(point);
    }

    fn line_to(&mut self, point: Point2) {
        self.path.line_to(point);
    }

    fn arc(&mut self, center: Point2, radius: f32, start_angle: f32, end_angle: f32) {
        self.path.arc(center, radius, start_angle, end_angle);
    }

    fn stroke(&mut self) {
        for (p1, p2) in self.path.stroke_segments() {
            self.draw
                .line()
                .start(self.to_draw_space(p1))
                .end(self.to_draw_space(p2))
                .stroke_weight(self.stroke_width)
                .color(self.stroke_color);
        }
    }

    fn fill(&mut self) {
        for polygon in self.path.fill_polygons() {
            let points: Vec<Point2> = polygon.iter().map(|p| self.to_draw_space(*p)).collect();
            self.draw.polygon().color(self.fill_color).points(points);
        }
    }

    fn flush(&mut self) -> Result<(), RenderError> {
        let texture = require_backing(self.texture.as_ref())?;
        let device = self.device_queue.device();

        let mut renderer = nannou::draw::RendererBuilder::new()
            .build_from_texture_descriptor(device, texture.descriptor());
        let ce_desc = wgpu::CommandEncoderDescriptor {
            label: Some("Grid texture renderer"),
        };
        let mut encoder = device.create_command_encoder(&ce_desc);
        let texture_view = texture.view().build();

        renderer.encode_render_pass(
            device,
            &mut encoder,
            &self.draw,
            self.scale,
            texture.size(),
            &texture_view,
            None,
        );
        self.device_queue.queue().submit(Some(encoder.finish()));

        // everything drawn so far now lives in the texture
        self.draw.reset();
        self.path.begin();
        Ok(())
    }
}

// None for a zero-sized raster, which leaves the surface without a context
fn backing_extent(width: u32, height: u32) -> Option<[u32; 2]> {
    if width == 0 || height == 0 {
        None
    } else {
        Some([width, height])
    }
}

fn require_backing<T>(texture: Option<&T>) -> Result<&T, RenderError> {
    texture.ok_or_else(|| {
        RenderError::ContextUnavailable("grid texture was never allocated".to_string())
    })
}
