//! Placeholder solid geometry.
//!
//! The overlay renders a single unit cube as a stand-in for the product
//! model. Triangles are wound counter-clockwise seen from outside so face
//! normals point outward.

use glam::Vec3;

/// A single triangle in local space.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
}

impl Triangle {
    /// Geometric face normal (right-hand winding).
    pub fn normal(&self) -> Vec3 {
        let edge1 = self.vertices[1] - self.vertices[0];
        let edge2 = self.vertices[2] - self.vertices[0];
        edge1.cross(edge2).normalize_or_zero()
    }
}

/// Triangle soup mesh.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    pub triangles: Vec<Triangle>,
}

/// Axis-aligned unit cube centered at the origin (side length 1).
pub fn unit_cube() -> TriangleMesh {
    let h = 0.5;

    // Corner shorthand: (x, y, z) each either -h or +h
    let p = |x: f32, y: f32, z: f32| Vec3::new(x, y, z);
    let quad = |a: Vec3, b: Vec3, c: Vec3, d: Vec3| {
        [
            Triangle { vertices: [a, b, c] },
            Triangle { vertices: [a, c, d] },
        ]
    };

    let mut triangles = Vec::with_capacity(12);
    // +Z (front)
    triangles.extend(quad(
        p(-h, -h, h),
        p(h, -h, h),
        p(h, h, h),
        p(-h, h, h),
    ));
    // -Z (back)
    triangles.extend(quad(
        p(h, -h, -h),
        p(-h, -h, -h),
        p(-h, h, -h),
        p(h, h, -h),
    ));
    // +X (right)
    triangles.extend(quad(
        p(h, -h, h),
        p(h, -h, -h),
        p(h, h, -h),
        p(h, h, h),
    ));
    // -X (left)
    triangles.extend(quad(
        p(-h, -h, -h),
        p(-h, -h, h),
        p(-h, h, h),
        p(-h, h, -h),
    ));
    // +Y (top)
    triangles.extend(quad(
        p(-h, h, h),
        p(h, h, h),
        p(h, h, -h),
        p(-h, h, -h),
    ));
    // -Y (bottom)
    triangles.extend(quad(
        p(-h, -h, -h),
        p(h, -h, -h),
        p(h, -h, h),
        p(-h, -h, h),
    ));

    TriangleMesh { triangles }
}

#[cfg(test)]
#[path = "mesh_tests.rs"]
mod tests;
