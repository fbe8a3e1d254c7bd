/*!
# AR Capture Overlay

Core types for the AR capture overlay: a small interactive component that
acquires a device camera stream, runs a minimal 3D render loop on top of the
live feed, lets the user reposition a placeholder solid, and flattens both
layers into a single exportable PNG.

## Architecture

The core is platform-agnostic behind two trait seams:

- **VideoSource / VideoStream**: camera acquisition and frame delivery.
  Hardware backends (nokhwa, etc.) live in separate crates.
- **SurfaceRenderer**: rasterization onto a display surface. A CPU
  `SoftwareRenderer` is built in so the core is usable without a GPU.

`CaptureOverlay` ties both together with an explicit lifecycle state machine
(`Idle -> Requesting -> Active -> Idle`) driven only by its operations.
*/

// Internal modules
mod error;
mod overlay;
pub mod log;
pub mod capture;
pub mod render;
pub mod compositor;

// Main aroverlay namespace module
pub mod aroverlay {
    // Error types
    pub use crate::error::{Error, Result};

    // The overlay component
    pub use crate::overlay::{CaptureOverlay, OverlayConfig, OverlayState};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: the overlay_* macros are exported at the crate root
    }

    // Capture sub-module (camera seam)
    pub mod capture {
        pub use crate::capture::*;
    }

    // Render sub-module (scene, placement, rasterizer seam)
    pub mod render {
        pub use crate::render::*;
    }

    // Compositor sub-module (flattening + PNG export)
    pub mod compositor {
        pub use crate::compositor::*;
    }
}

// Re-export math library at crate root
pub use glam;
