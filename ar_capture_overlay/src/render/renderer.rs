//! Rasterizer seam.
//!
//! A [`SurfaceRenderer`] is bound to a display surface of a fixed size and
//! turns (scene, camera) into an RGBA raster with a transparent background,
//! so the live video feed shows through everywhere the solid is not drawn.

use image::RgbaImage;
use crate::error::Result;
use super::camera::Camera;
use super::scene::Scene;

/// Pixel dimensions of the bound display surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width/height ratio for the projection.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

/// Renderer bound to a display surface.
pub trait SurfaceRenderer {
    /// Current surface size.
    fn surface_size(&self) -> SurfaceSize;

    /// Resize the raster target (container resize).
    fn resize(&mut self, size: SurfaceSize);

    /// Rasterize the scene into the surface.
    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()>;

    /// The most recently rendered frame (transparent where nothing drew).
    fn frame(&self) -> &RgbaImage;
}
