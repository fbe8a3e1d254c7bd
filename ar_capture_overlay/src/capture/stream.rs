//! Backend seam for camera acquisition.
//!
//! A [`VideoSource`] turns a set of [`StreamConstraints`] into a live
//! [`VideoStream`]. The overlay never talks to camera hardware directly;
//! backends (nokhwa, test mocks) implement these traits.

use image::RgbImage;
use crate::error::Result;

/// Which way the requested camera should face.
///
/// Native backends treat this as advisory (desktop cameras rarely report
/// facing); mobile-style backends use it to pick the rear camera.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacingMode {
    /// No preference
    Any,
    /// Front / selfie camera
    User,
    /// Rear / world-facing camera
    Environment,
}

/// Constraints for a stream request.
///
/// A `None` dimension means "whatever the device delivers".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StreamConstraints {
    pub facing: FacingMode,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl StreamConstraints {
    /// The preferred tier: environment-facing at 1280x720.
    pub fn environment_preferred() -> Self {
        Self {
            facing: FacingMode::Environment,
            width: Some(1280),
            height: Some(720),
        }
    }

    /// The fallback tier: any camera, any resolution.
    pub fn any() -> Self {
        Self {
            facing: FacingMode::Any,
            width: None,
            height: None,
        }
    }

    /// True when no facing or resolution preference is expressed.
    pub fn is_unconstrained(&self) -> bool {
        self.facing == FacingMode::Any && self.width.is_none() && self.height.is_none()
    }
}

/// Camera backend factory trait.
pub trait VideoSource {
    /// Whether camera capture is available at all on this backend.
    ///
    /// When false, acquisition fails immediately with `Unsupported`
    /// without trying any constraint tier.
    fn is_supported(&self) -> bool {
        true
    }

    /// Open a stream satisfying the given constraints.
    fn open(&mut self, constraints: &StreamConstraints) -> Result<Box<dyn VideoStream>>;
}

/// A live camera stream.
///
/// Owned exclusively by one [`super::CaptureSession`] while active.
pub trait VideoStream {
    /// Start frame delivery. May fail (autoplay-style restriction); the
    /// overlay treats that as a warning, not a fatal error.
    fn play(&mut self) -> Result<()>;

    /// Latest camera frame.
    fn frame(&mut self) -> Result<RgbImage>;

    /// Actual stream resolution.
    fn resolution(&self) -> (u32, u32);

    /// Stop every live track. Must be idempotent.
    fn stop(&mut self);
}

impl std::fmt::Debug for dyn VideoStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (width, height) = self.resolution();
        f.debug_struct("VideoStream")
            .field("resolution", &(width, height))
            .finish()
    }
}

#[cfg(test)]
#[path = "stream_tests.rs"]
mod tests;
