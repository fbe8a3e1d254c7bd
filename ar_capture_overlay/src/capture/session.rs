//! The capture session: exclusive owner of an acquired video stream.
//!
//! Exactly one session may be open per overlay at a time. Stopping releases
//! every live track and is idempotent; dropping a live session stops it.

use image::RgbImage;
use crate::error::{Error, Result};
use crate::overlay_debug;
use super::stream::VideoStream;

/// An acquired device video stream, owned exclusively while active.
pub struct CaptureSession {
    stream: Option<Box<dyn VideoStream>>,
}

impl CaptureSession {
    /// Wrap an acquired stream into a session.
    pub fn new(stream: Box<dyn VideoStream>) -> Self {
        Self {
            stream: Some(stream),
        }
    }

    /// Start playback on the bound stream.
    pub fn play(&mut self) -> Result<()> {
        match self.stream.as_mut() {
            Some(stream) => stream.play(),
            None => Err(Error::InvalidState(
                "cannot play a stopped capture session".to_string(),
            )),
        }
    }

    /// Latest video frame from the live stream.
    pub fn frame(&mut self) -> Result<RgbImage> {
        match self.stream.as_mut() {
            Some(stream) => stream.frame(),
            None => Err(Error::InvalidState(
                "cannot read a frame from a stopped capture session".to_string(),
            )),
        }
    }

    /// Stream resolution, if still live.
    pub fn resolution(&self) -> Option<(u32, u32)> {
        self.stream.as_ref().map(|s| s.resolution())
    }

    /// Whether the session still holds a live stream.
    pub fn is_live(&self) -> bool {
        self.stream.is_some()
    }

    /// Stop every live track and clear the bound stream. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            overlay_debug!("aroverlay::capture", "capture session stopped");
        }
    }
}

impl Drop for CaptureSession {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
