//! Error types for the AR capture overlay
//!
//! The taxonomy mirrors the user-facing message categories of the overlay:
//! camera/video failures are classified here and rendered for the host UI
//! via [`Error::user_message`]. No variant is ever allowed to escape the
//! overlay as a panic.

use std::fmt;

/// Result type for overlay operations
pub type Result<T> = std::result::Result<T, Error>;

/// AR capture overlay errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Camera permission was denied by the user or platform
    PermissionDenied,

    /// No camera device could be found
    NoDeviceFound,

    /// The stream was acquired but playback could not be started
    PlaybackBlocked,

    /// Camera capture is not supported on this platform/backend
    Unsupported(String),

    /// An overlay operation was invoked in the wrong lifecycle state
    InvalidState(String),

    /// Anything else (backend-specific, I/O, encoding)
    Unknown(String),
}

impl Error {
    /// User-facing message category plus a remediation hint.
    ///
    /// This is what the host UI displays inline while keeping the overlay
    /// open and retryable.
    pub fn user_message(&self) -> String {
        let mut msg = String::from("Camera access failed. ");
        match self {
            Error::PermissionDenied => {
                msg.push_str(
                    "Camera permission was denied. \
                     Check the camera permission settings for this application and allow access.",
                );
            }
            Error::NoDeviceFound => {
                msg.push_str("No camera device was found.");
            }
            Error::PlaybackBlocked => {
                msg.push_str("Video playback could not be started.");
            }
            Error::Unsupported(_) => {
                msg.push_str("Camera capture is not supported on this system.");
            }
            Error::Unknown(detail) if !detail.is_empty() => {
                msg.push_str(detail);
            }
            _ => {
                msg.push_str("An unknown error occurred.");
            }
        }
        msg
    }

    /// Short category name for logs and tests.
    pub fn category(&self) -> &'static str {
        match self {
            Error::PermissionDenied => "permission-denied",
            Error::NoDeviceFound => "no-device-found",
            Error::PlaybackBlocked => "playback-blocked",
            Error::Unsupported(_) => "unsupported",
            Error::InvalidState(_) => "invalid-state",
            Error::Unknown(_) => "unknown",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::PermissionDenied => write!(f, "Camera permission denied"),
            Error::NoDeviceFound => write!(f, "No camera device found"),
            Error::PlaybackBlocked => write!(f, "Video playback blocked"),
            Error::Unsupported(msg) => write!(f, "Camera capture unsupported: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid overlay state: {}", msg),
            Error::Unknown(msg) => write!(f, "Unknown error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
