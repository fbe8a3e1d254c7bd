//! Render context: scene + camera + bound renderer.
//!
//! Built fresh on every activation and dropped on deactivation; a context
//! is never reused across activate/deactivate cycles. Its lifecycle is
//! coupled to the capture session by the overlay.

use image::RgbaImage;
use crate::error::Result;
use super::camera::Camera;
use super::placement::Placement;
use super::renderer::{SurfaceRenderer, SurfaceSize};
use super::scene::{Scene, Transform};

/// Fixed per-frame yaw increment applied to the placeholder solid (radians).
pub const SPIN_STEP: f32 = 0.005;

/// The 3D layer of the overlay while active.
pub struct RenderContext {
    scene: Scene,
    camera: Camera,
    renderer: Box<dyn SurfaceRenderer>,
}

impl RenderContext {
    /// Build the standard scene on the given renderer and apply the initial
    /// placement.
    pub fn new(renderer: Box<dyn SurfaceRenderer>, placement: &Placement) -> Self {
        let camera = Camera::new(renderer.surface_size().aspect());
        let mut context = Self {
            scene: Scene::standard(),
            camera,
            renderer,
        };
        context.apply_placement(placement);
        context
    }

    /// Re-apply the placement to the solid. Takes effect on the next frame.
    pub fn apply_placement(&mut self, placement: &Placement) {
        self.scene.set_solid_transform(Transform {
            position: placement.position,
            rotation: placement.rotation,
            scale: placement.scale,
        });
    }

    /// Apply the fixed per-frame yaw increment.
    pub fn spin(&mut self) {
        if let Some(mut transform) = self.scene.solid_transform() {
            transform.rotation.y += SPIN_STEP;
            self.scene.set_solid_transform(transform);
        }
    }

    /// Rasterize the scene into the bound surface.
    pub fn render_frame(&mut self) -> Result<()> {
        self.renderer.render(&self.scene, &self.camera)
    }

    /// The most recently rendered frame.
    pub fn frame(&self) -> &RgbaImage {
        self.renderer.frame()
    }

    /// Size of the bound surface.
    pub fn surface_size(&self) -> SurfaceSize {
        self.renderer.surface_size()
    }

    /// Resize the bound surface and fix up the projection.
    pub fn resize(&mut self, size: SurfaceSize) {
        self.renderer.resize(size);
        self.camera.set_aspect(size.aspect());
    }

    /// Current transform of the placeholder solid.
    pub fn solid_transform(&self) -> Option<Transform> {
        self.scene.solid_transform()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
