//! Scene — lights plus the placeholder solid.
//!
//! Nodes live in a SlotMap for stable keys. The standard overlay scene is
//! fixed: one ambient light, one directional light, one placeholder solid,
//! matching what the original viewer constructs on every activation.

use glam::{Mat4, Vec3};
use slotmap::{new_key_type, SlotMap};
use super::mesh::{unit_cube, TriangleMesh};

new_key_type! {
    /// Stable key for a scene node
    pub struct SceneNodeKey;
}

/// Position/Euler-rotation/uniform-scale transform of a solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
    pub scale: f32,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

impl Transform {
    /// Model matrix: translate * rotate (XYZ Euler) * scale.
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(
                glam::EulerRot::XYZ,
                self.rotation.x,
                self.rotation.y,
                self.rotation.z,
            )
            * Mat4::from_scale(Vec3::splat(self.scale))
    }
}

/// Surface material of a solid: linear RGB color plus opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub opacity: f32,
}

impl Material {
    /// The placeholder material of the original viewer: #7aa2ff at 0.9 opacity.
    pub fn placeholder() -> Self {
        Self {
            color: Vec3::new(0x7a as f32 / 255.0, 0xa2 as f32 / 255.0, 1.0),
            opacity: 0.9,
        }
    }
}

/// A node in the overlay scene.
#[derive(Debug, Clone)]
pub enum SceneNode {
    /// Uniform light contribution
    AmbientLight { color: Vec3, intensity: f32 },
    /// Infinitely-distant light shining from `position` toward the origin
    DirectionalLight {
        color: Vec3,
        intensity: f32,
        position: Vec3,
    },
    /// A renderable solid
    Solid {
        mesh: TriangleMesh,
        transform: Transform,
        material: Material,
    },
}

/// The overlay scene: a SlotMap of nodes plus the key of the placeholder solid.
pub struct Scene {
    nodes: SlotMap<SceneNodeKey, SceneNode>,
    solid: Option<SceneNodeKey>,
}

impl Scene {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self {
            nodes: SlotMap::with_key(),
            solid: None,
        }
    }

    /// Build the standard overlay scene: ambient light (0.4), directional
    /// light (0.8 from (5, 10, 5)), and one placeholder cube.
    pub fn standard() -> Self {
        let mut scene = Self::new();
        scene.add_node(SceneNode::AmbientLight {
            color: Vec3::ONE,
            intensity: 0.4,
        });
        scene.add_node(SceneNode::DirectionalLight {
            color: Vec3::ONE,
            intensity: 0.8,
            position: Vec3::new(5.0, 10.0, 5.0),
        });
        let solid = scene.add_node(SceneNode::Solid {
            mesh: unit_cube(),
            transform: Transform::default(),
            material: Material::placeholder(),
        });
        scene.solid = Some(solid);
        scene
    }

    /// Add a node, returning its stable key.
    pub fn add_node(&mut self, node: SceneNode) -> SceneNodeKey {
        let is_solid = matches!(node, SceneNode::Solid { .. });
        let key = self.nodes.insert(node);
        if is_solid && self.solid.is_none() {
            self.solid = Some(key);
        }
        key
    }

    /// Remove a node. Returns the node if the key was valid.
    pub fn remove_node(&mut self, key: SceneNodeKey) -> Option<SceneNode> {
        if self.solid == Some(key) {
            self.solid = None;
        }
        self.nodes.remove(key)
    }

    /// Get a node by key.
    pub fn node(&self, key: SceneNodeKey) -> Option<&SceneNode> {
        self.nodes.get(key)
    }

    /// Iterate over all nodes.
    pub fn nodes(&self) -> impl Iterator<Item = (SceneNodeKey, &SceneNode)> {
        self.nodes.iter()
    }

    /// Number of nodes in the scene.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Key of the placeholder solid, if present.
    pub fn solid_key(&self) -> Option<SceneNodeKey> {
        self.solid
    }

    /// Current transform of the placeholder solid.
    pub fn solid_transform(&self) -> Option<Transform> {
        let key = self.solid?;
        match self.nodes.get(key) {
            Some(SceneNode::Solid { transform, .. }) => Some(*transform),
            _ => None,
        }
    }

    /// Overwrite the placeholder solid's transform. Returns false when the
    /// scene has no solid.
    pub fn set_solid_transform(&mut self, transform: Transform) -> bool {
        let Some(key) = self.solid else {
            return false;
        };
        match self.nodes.get_mut(key) {
            Some(SceneNode::Solid {
                transform: current, ..
            }) => {
                *current = transform;
                true
            }
            _ => false,
        }
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
