//! Placement state for the placeholder solid.
//!
//! Position, rotation and scale adjusted by the host's range controls.
//! Updates are partial merges; values are clamped to the control ranges
//! so the solid can never be driven out of the usable volume.

use glam::Vec3;

/// Host control ranges (min, max)
pub const POSITION_X_RANGE: (f32, f32) = (-5.0, 5.0);
pub const POSITION_Y_RANGE: (f32, f32) = (-3.0, 3.0);
pub const POSITION_Z_RANGE: (f32, f32) = (-10.0, 1.0);
pub const SCALE_RANGE: (f32, f32) = (0.1, 5.0);

/// Where the placeholder solid appears: position, Euler rotation, uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, -2.0),
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// Partial placement update from the host controls.
///
/// Unset fields leave the current value untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PlacementUpdate {
    pub x: Option<f32>,
    pub y: Option<f32>,
    pub z: Option<f32>,
    pub rot_x: Option<f32>,
    pub rot_y: Option<f32>,
    pub rot_z: Option<f32>,
    pub scale: Option<f32>,
}

impl Placement {
    /// Merge a partial update and clamp to the control ranges.
    pub fn apply(&mut self, update: &PlacementUpdate) {
        if let Some(x) = update.x {
            self.position.x = x;
        }
        if let Some(y) = update.y {
            self.position.y = y;
        }
        if let Some(z) = update.z {
            self.position.z = z;
        }
        if let Some(rx) = update.rot_x {
            self.rotation.x = rx;
        }
        if let Some(ry) = update.rot_y {
            self.rotation.y = ry;
        }
        if let Some(rz) = update.rot_z {
            self.rotation.z = rz;
        }
        if let Some(scale) = update.scale {
            self.scale = scale;
        }
        self.clamp_to_ranges();
    }

    fn clamp_to_ranges(&mut self) {
        self.position.x = self.position.x.clamp(POSITION_X_RANGE.0, POSITION_X_RANGE.1);
        self.position.y = self.position.y.clamp(POSITION_Y_RANGE.0, POSITION_Y_RANGE.1);
        self.position.z = self.position.z.clamp(POSITION_Z_RANGE.0, POSITION_Z_RANGE.1);
        self.scale = self.scale.clamp(SCALE_RANGE.0, SCALE_RANGE.1);
    }
}

#[cfg(test)]
#[path = "placement_tests.rs"]
mod tests;
