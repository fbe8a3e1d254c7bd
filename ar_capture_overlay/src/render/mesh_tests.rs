//! Unit tests for mesh.rs

use glam::Vec3;
use super::*;

#[test]
fn test_unit_cube_has_twelve_triangles() {
    let cube = unit_cube();
    assert_eq!(cube.triangles.len(), 12);
}

#[test]
fn test_unit_cube_vertices_on_half_extent() {
    let cube = unit_cube();
    for triangle in &cube.triangles {
        for v in &triangle.vertices {
            assert_eq!(v.x.abs(), 0.5);
            assert_eq!(v.y.abs(), 0.5);
            assert_eq!(v.z.abs(), 0.5);
        }
    }
}

#[test]
fn test_unit_cube_normals_point_outward() {
    let cube = unit_cube();
    for triangle in &cube.triangles {
        let center = (triangle.vertices[0] + triangle.vertices[1] + triangle.vertices[2]) / 3.0;
        let normal = triangle.normal();
        // Outward normal points away from the cube center (origin)
        assert!(
            normal.dot(center) > 0.0,
            "inward-facing triangle at {:?}",
            center
        );
    }
}

#[test]
fn test_unit_cube_normals_are_axis_aligned_unit_vectors() {
    let cube = unit_cube();
    for triangle in &cube.triangles {
        let n = triangle.normal();
        assert!((n.length() - 1.0).abs() < 1e-6);
        let components = [n.x.abs(), n.y.abs(), n.z.abs()];
        let ones = components.iter().filter(|c| (**c - 1.0).abs() < 1e-6).count();
        assert_eq!(ones, 1, "non-axis-aligned normal {:?}", n);
    }
}

#[test]
fn test_degenerate_triangle_normal_is_zero() {
    let triangle = Triangle {
        vertices: [Vec3::ZERO, Vec3::ZERO, Vec3::X],
    };
    assert_eq!(triangle.normal(), Vec3::ZERO);
}
