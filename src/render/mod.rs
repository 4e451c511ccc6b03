// src/render/mod.rs
// The one-shot grid rasterizer

pub mod grid_renderer;

pub use grid_renderer::GridRenderer;
