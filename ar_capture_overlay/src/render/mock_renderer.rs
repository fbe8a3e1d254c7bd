//! Mock SurfaceRenderer for unit tests (no rasterization)
//!
//! Records render calls and snapshots the solid transform visible at each
//! render, so lifecycle and ordering properties can be asserted without a
//! real rasterizer. The probe is shared so tests keep visibility after the
//! renderer is boxed into the overlay.

use std::sync::{Arc, Mutex};
use image::RgbaImage;
use crate::error::{Error, Result};
use super::camera::Camera;
use super::renderer::{SurfaceRenderer, SurfaceSize};
use super::scene::{Scene, Transform};

/// Shared observations of a MockRenderer.
#[derive(Default)]
pub struct RenderProbe {
    /// Number of render() calls observed
    pub render_count: usize,
    /// Solid transform at the time of the most recent render
    pub last_solid_transform: Option<Transform>,
}

pub struct MockRenderer {
    size: SurfaceSize,
    frame: RgbaImage,
    pub probe: Arc<Mutex<RenderProbe>>,
    /// When set, render() fails with this error
    pub fail_with: Option<Error>,
}

impl MockRenderer {
    pub fn new(size: SurfaceSize) -> Self {
        Self {
            size,
            frame: RgbaImage::new(size.width, size.height),
            probe: Arc::new(Mutex::new(RenderProbe::default())),
            fail_with: None,
        }
    }
}

impl SurfaceRenderer for MockRenderer {
    fn surface_size(&self) -> SurfaceSize {
        self.size
    }

    fn resize(&mut self, size: SurfaceSize) {
        self.size = size;
        self.frame = RgbaImage::new(size.width, size.height);
    }

    fn render(&mut self, scene: &Scene, _camera: &Camera) -> Result<()> {
        if let Some(err) = self.fail_with.clone() {
            return Err(err);
        }
        let mut probe = self.probe.lock().unwrap();
        probe.render_count += 1;
        probe.last_solid_transform = scene.solid_transform();
        Ok(())
    }

    fn frame(&self) -> &RgbaImage {
        &self.frame
    }
}
