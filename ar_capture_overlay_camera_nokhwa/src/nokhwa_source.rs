//! NokhwaVideoSource - nokhwa implementation of the VideoSource trait

use image::RgbImage;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{
    ApiBackend, CameraFormat, CameraIndex, CameraInfo, FrameFormat, RequestedFormat,
    RequestedFormatType, Resolution,
};
use nokhwa::{Camera, NokhwaError};

use ar_capture_overlay::aroverlay::capture::{
    FacingMode, StreamConstraints, VideoSource, VideoStream,
};
use ar_capture_overlay::aroverlay::{Error, Result};
use ar_capture_overlay::{overlay_debug, overlay_warn};

const SOURCE: &str = "aroverlay::nokhwa";

/// Native camera backend over nokhwa's device enumeration and capture.
pub struct NokhwaVideoSource {
    backend: ApiBackend,
}

impl NokhwaVideoSource {
    /// Backend with automatic platform API selection.
    pub fn new() -> Self {
        Self {
            backend: ApiBackend::Auto,
        }
    }
}

impl Default for NokhwaVideoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl VideoSource for NokhwaVideoSource {
    fn is_supported(&self) -> bool {
        nokhwa::query(self.backend).is_ok()
    }

    fn open(&mut self, constraints: &StreamConstraints) -> Result<Box<dyn VideoStream>> {
        let devices = nokhwa::query(self.backend).map_err(map_nokhwa_error)?;
        if devices.is_empty() {
            return Err(Error::NoDeviceFound);
        }

        let device = pick_device(&devices, constraints.facing);
        overlay_debug!(
            SOURCE,
            "opening camera '{}' for {:?}",
            device.human_name(),
            constraints.facing
        );

        let format_type = match (constraints.width, constraints.height) {
            (Some(width), Some(height)) => RequestedFormatType::Closest(CameraFormat::new(
                Resolution::new(width, height),
                FrameFormat::MJPEG,
                30,
            )),
            _ => RequestedFormatType::AbsoluteHighestResolution,
        };
        let requested = RequestedFormat::new::<RgbFormat>(format_type);

        let camera =
            Camera::new(device.index().clone(), requested).map_err(map_nokhwa_error)?;

        Ok(Box::new(NokhwaVideoStream {
            camera,
            playing: false,
        }))
    }
}

/// Prefer a rear-looking device by name for the environment tier; desktop
/// enumerations rarely expose facing, so the first device is the fallback.
fn pick_device(devices: &[CameraInfo], facing: FacingMode) -> &CameraInfo {
    if facing == FacingMode::Environment {
        if let Some(rear) = devices.iter().find(|d| {
            let name = d.human_name().to_lowercase();
            name.contains("back") || name.contains("rear") || name.contains("environment")
        }) {
            return rear;
        }
    }
    &devices[0]
}

/// Map nokhwa failures into the overlay's error taxonomy.
fn map_nokhwa_error(err: NokhwaError) -> Error {
    match err {
        NokhwaError::UnsupportedOperationError(backend) => {
            Error::Unsupported(format!("camera backend {} unsupported", backend))
        }
        NokhwaError::NotImplementedError(what) => Error::Unsupported(what),
        NokhwaError::OpenDeviceError(device, reason) => {
            if is_permission_flavored(&reason) {
                Error::PermissionDenied
            } else {
                Error::Unknown(format!("opening camera '{}' failed: {}", device, reason))
            }
        }
        NokhwaError::OpenStreamError(reason) => {
            if is_permission_flavored(&reason) {
                Error::PermissionDenied
            } else {
                Error::PlaybackBlocked
            }
        }
        other => Error::Unknown(other.to_string()),
    }
}

/// Platform drivers encode denial in free-form strings; sniff the usual
/// wordings.
fn is_permission_flavored(reason: &str) -> bool {
    let reason = reason.to_lowercase();
    reason.contains("permission") || reason.contains("denied") || reason.contains("not authorized")
}

/// A live nokhwa camera stream.
pub struct NokhwaVideoStream {
    camera: Camera,
    playing: bool,
}

impl VideoStream for NokhwaVideoStream {
    fn play(&mut self) -> Result<()> {
        if self.playing {
            return Ok(());
        }
        self.camera.open_stream().map_err(map_nokhwa_error)?;
        self.playing = true;
        Ok(())
    }

    fn frame(&mut self) -> Result<RgbImage> {
        if !self.playing {
            // Lazily recover: a blocked play() leaves the overlay usable
            self.play()?;
        }
        let buffer = self.camera.frame().map_err(map_nokhwa_error)?;
        buffer
            .decode_image::<RgbFormat>()
            .map_err(map_nokhwa_error)
    }

    fn resolution(&self) -> (u32, u32) {
        let resolution = self.camera.resolution();
        (resolution.width(), resolution.height())
    }

    fn stop(&mut self) {
        if self.playing {
            if let Err(err) = self.camera.stop_stream() {
                overlay_warn!(SOURCE, "stopping camera stream failed: {}", err);
            }
            self.playing = false;
        }
    }
}

impl Drop for NokhwaVideoStream {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "nokhwa_source_tests.rs"]
mod tests;
