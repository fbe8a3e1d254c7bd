//! Unit tests for scene.rs
//!
//! Validates the standard scene construction, node management, and
//! the solid transform helpers.

use glam::{Vec3, Vec4Swizzles};
use super::*;

// ============================================================================
// Tests: Scene construction
// ============================================================================

#[test]
fn test_empty_scene() {
    let scene = Scene::new();
    assert_eq!(scene.node_count(), 0);
    assert!(scene.solid_key().is_none());
    assert!(scene.solid_transform().is_none());
}

#[test]
fn test_standard_scene_contents() {
    let scene = Scene::standard();
    assert_eq!(scene.node_count(), 3);
    assert!(scene.solid_key().is_some());

    let mut ambient = 0;
    let mut directional = 0;
    let mut solids = 0;
    for (_, node) in scene.nodes() {
        match node {
            SceneNode::AmbientLight { intensity, .. } => {
                ambient += 1;
                assert_eq!(*intensity, 0.4);
            }
            SceneNode::DirectionalLight {
                intensity,
                position,
                ..
            } => {
                directional += 1;
                assert_eq!(*intensity, 0.8);
                assert_eq!(*position, Vec3::new(5.0, 10.0, 5.0));
            }
            SceneNode::Solid { mesh, material, .. } => {
                solids += 1;
                assert_eq!(mesh.triangles.len(), 12);
                assert_eq!(material.opacity, 0.9);
            }
        }
    }
    assert_eq!((ambient, directional, solids), (1, 1, 1));
}

// ============================================================================
// Tests: node management
// ============================================================================

#[test]
fn test_first_solid_becomes_the_placeholder() {
    let mut scene = Scene::new();
    let key = scene.add_node(SceneNode::Solid {
        mesh: unit_cube(),
        transform: Transform::default(),
        material: Material::placeholder(),
    });
    assert_eq!(scene.solid_key(), Some(key));
}

#[test]
fn test_remove_node_clears_solid_key() {
    let mut scene = Scene::standard();
    let key = scene.solid_key().unwrap();
    assert!(scene.remove_node(key).is_some());
    assert!(scene.solid_key().is_none());
    assert_eq!(scene.node_count(), 2);
}

#[test]
fn test_removed_key_is_invalid() {
    let mut scene = Scene::standard();
    let key = scene.solid_key().unwrap();
    scene.remove_node(key);
    assert!(scene.node(key).is_none());
    assert!(scene.remove_node(key).is_none());
}

// ============================================================================
// Tests: solid transform
// ============================================================================

#[test]
fn test_set_solid_transform() {
    let mut scene = Scene::standard();
    let transform = Transform {
        position: Vec3::new(1.0, 2.0, -4.0),
        rotation: Vec3::new(0.0, 0.5, 0.0),
        scale: 2.0,
    };
    assert!(scene.set_solid_transform(transform));
    assert_eq!(scene.solid_transform(), Some(transform));
}

#[test]
fn test_set_solid_transform_without_solid_fails() {
    let mut scene = Scene::new();
    assert!(!scene.set_solid_transform(Transform::default()));
}

// ============================================================================
// Tests: Transform matrix
// ============================================================================

#[test]
fn test_transform_matrix_translates() {
    let transform = Transform {
        position: Vec3::new(1.0, -2.0, 3.0),
        ..Default::default()
    };
    let moved = transform.matrix() * Vec3::ZERO.extend(1.0);
    assert!((moved.xyz() - transform.position).length() < 1e-6);
}

#[test]
fn test_transform_matrix_scales_before_translating() {
    let transform = Transform {
        position: Vec3::new(10.0, 0.0, 0.0),
        rotation: Vec3::ZERO,
        scale: 2.0,
    };
    let corner = transform.matrix() * Vec3::new(0.5, 0.0, 0.0).extend(1.0);
    assert!((corner.x - 11.0).abs() < 1e-6);
}

#[test]
fn test_transform_matrix_yaw_rotates_x_into_minus_z() {
    let transform = Transform {
        rotation: Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0),
        ..Default::default()
    };
    let rotated = transform.matrix() * Vec3::X.extend(1.0);
    assert!(rotated.x.abs() < 1e-6);
    assert!((rotated.z - (-1.0)).abs() < 1e-6);
}
