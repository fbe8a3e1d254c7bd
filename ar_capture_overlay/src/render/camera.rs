//! Perspective projection for the overlay scene.
//!
//! Fixed viewpoint matching the original viewer: eye at (0, 0, 1) looking
//! down -Z, 60 degree vertical FOV, near 0.01, far 1000. Only the aspect
//! ratio changes, driven by the surface size.

use glam::{Mat4, Vec3};

/// Default vertical field of view in degrees
pub const DEFAULT_FOV_Y_DEGREES: f32 = 60.0;

/// Default near/far clip planes
pub const DEFAULT_NEAR: f32 = 0.01;
pub const DEFAULT_FAR: f32 = 1000.0;

/// Perspective camera for the overlay's 3D layer.
#[derive(Debug, Clone)]
pub struct Camera {
    position: Vec3,
    fov_y_degrees: f32,
    near: f32,
    far: f32,
    aspect: f32,
}

impl Camera {
    /// Create the standard overlay camera for the given aspect ratio.
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, 1.0),
            fov_y_degrees: DEFAULT_FOV_Y_DEGREES,
            near: DEFAULT_NEAR,
            far: DEFAULT_FAR,
            aspect,
        }
    }

    /// Camera world position.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Update the aspect ratio (surface resize).
    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// View matrix: looking from the eye position down -Z.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(
            self.position,
            self.position + Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
        )
    }

    /// Perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;
