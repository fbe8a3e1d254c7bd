//! CPU rasterizer implementing the SurfaceRenderer seam.
//!
//! Flat-shaded, z-buffered triangle rasterization of the scene solids,
//! lit by the scene's ambient and directional lights. The clear color is
//! transparent black so the camera feed shows through around the solid.

use glam::{Vec3, Vec4Swizzles};
use image::{Rgba, RgbaImage};
use crate::error::Result;
use super::camera::Camera;
use super::renderer::{SurfaceRenderer, SurfaceSize};
use super::scene::{Scene, SceneNode};

/// A vertex projected to screen space, keeping NDC depth.
#[derive(Clone, Copy)]
struct ScreenVertex {
    x: f32,
    y: f32,
    depth: f32,
}

/// Aggregated lighting of the scene for flat shading.
struct SceneLighting {
    ambient: Vec3,
    /// (unit direction toward the light, color * intensity)
    directional: Vec<(Vec3, Vec3)>,
}

impl SceneLighting {
    fn collect(scene: &Scene) -> Self {
        let mut ambient = Vec3::ZERO;
        let mut directional = Vec::new();
        for (_, node) in scene.nodes() {
            match node {
                SceneNode::AmbientLight { color, intensity } => {
                    ambient += *color * *intensity;
                }
                SceneNode::DirectionalLight {
                    color,
                    intensity,
                    position,
                } => {
                    let dir = position.normalize_or_zero();
                    directional.push((dir, *color * *intensity));
                }
                SceneNode::Solid { .. } => {}
            }
        }
        Self {
            ambient,
            directional,
        }
    }

    /// Lambert term for a world-space face normal.
    fn shade(&self, normal: Vec3) -> Vec3 {
        let mut lit = self.ambient;
        for (dir, color) in &self.directional {
            lit += *color * normal.dot(*dir).max(0.0);
        }
        lit
    }
}

/// Software rasterizer bound to an in-memory RGBA surface.
pub struct SoftwareRenderer {
    size: SurfaceSize,
    frame: RgbaImage,
    depth: Vec<f32>,
}

impl SoftwareRenderer {
    /// Create a renderer bound to a surface of the given size.
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            frame: RgbaImage::new(size.width, size.height),
            depth: vec![f32::INFINITY; (size.width * size.height) as usize],
        }
    }

    fn clear(&mut self) {
        for pixel in self.frame.pixels_mut() {
            *pixel = Rgba([0, 0, 0, 0]);
        }
        self.depth.fill(f32::INFINITY);
    }

    /// Project a world-space point to screen space. None when the point is
    /// behind the eye.
    fn project(&self, camera: &Camera, world: Vec3) -> Option<ScreenVertex> {
        let clip = camera.view_projection_matrix() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        let ndc = clip.xyz() / clip.w;
        Some(ScreenVertex {
            x: (ndc.x + 1.0) * 0.5 * self.size.width as f32,
            y: (1.0 - ndc.y) * 0.5 * self.size.height as f32,
            depth: ndc.z,
        })
    }

    fn rasterize(&mut self, v: [ScreenVertex; 3], color: Rgba<u8>) {
        let edge = |a: &ScreenVertex, b: &ScreenVertex, px: f32, py: f32| {
            (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
        };

        let area = edge(&v[0], &v[1], v[2].x, v[2].y);
        if area.abs() < f32::EPSILON {
            return;
        }

        let min_x = v.iter().map(|p| p.x).fold(f32::INFINITY, f32::min).floor().max(0.0) as u32;
        let max_x = (v.iter().map(|p| p.x).fold(f32::NEG_INFINITY, f32::max).ceil() as i64)
            .clamp(0, self.size.width as i64) as u32;
        let min_y = v.iter().map(|p| p.y).fold(f32::INFINITY, f32::min).floor().max(0.0) as u32;
        let max_y = (v.iter().map(|p| p.y).fold(f32::NEG_INFINITY, f32::max).ceil() as i64)
            .clamp(0, self.size.height as i64) as u32;

        for py in min_y..max_y {
            for px in min_x..max_x {
                let cx = px as f32 + 0.5;
                let cy = py as f32 + 0.5;
                let w0 = edge(&v[1], &v[2], cx, cy) / area;
                let w1 = edge(&v[2], &v[0], cx, cy) / area;
                let w2 = edge(&v[0], &v[1], cx, cy) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }

                let depth = w0 * v[0].depth + w1 * v[1].depth + w2 * v[2].depth;
                let index = (py * self.size.width + px) as usize;
                if depth < self.depth[index] {
                    self.depth[index] = depth;
                    self.frame.put_pixel(px, py, color);
                }
            }
        }
    }
}

impl SurfaceRenderer for SoftwareRenderer {
    fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.frame = RgbaImage::new(size.width, size.height);
        self.depth = vec![f32::INFINITY; (size.width * size.height) as usize];
    }

    fn render(&mut self, scene: &Scene, camera: &Camera) -> Result<()> {
        self.clear();
        let lighting = SceneLighting::collect(scene);

        for (_, node) in scene.nodes() {
            let SceneNode::Solid {
                mesh,
                transform,
                material,
            } = node
            else {
                continue;
            };

            let model = transform.matrix();
            let alpha = (material.opacity.clamp(0.0, 1.0) * 255.0) as u8;

            for triangle in &mesh.triangles {
                let world = [
                    (model * triangle.vertices[0].extend(1.0)).xyz(),
                    (model * triangle.vertices[1].extend(1.0)).xyz(),
                    (model * triangle.vertices[2].extend(1.0)).xyz(),
                ];

                let normal = (world[1] - world[0])
                    .cross(world[2] - world[0])
                    .normalize_or_zero();
                // Backface cull against the eye
                if normal.dot(camera.position() - world[0]) <= 0.0 {
                    continue;
                }

                let lit = (material.color * lighting.shade(normal)).clamp(Vec3::ZERO, Vec3::ONE);
                let color = Rgba([
                    (lit.x * 255.0) as u8,
                    (lit.y * 255.0) as u8,
                    (lit.z * 255.0) as u8,
                    alpha,
                ]);

                let (Some(a), Some(b), Some(c)) = (
                    self.project(camera, world[0]),
                    self.project(camera, world[1]),
                    self.project(camera, world[2]),
                ) else {
                    continue;
                };
                self.rasterize([a, b, c], color);
            }
        }
        Ok(())
    }

    fn frame(&self) -> &RgbaImage {
        &self.frame
    }
}

#[cfg(test)]
#[path = "software_renderer_tests.rs"]
mod tests;
