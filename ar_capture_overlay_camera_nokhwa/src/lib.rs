/*!
# AR Capture Overlay - nokhwa Camera Backend

Native camera implementation of the overlay's `VideoSource`/`VideoStream`
seam, built on nokhwa's platform capture backends (V4L2, AVFoundation,
Media Foundation).

Facing-mode constraints are advisory on desktop hardware: when the
environment tier is requested, a rear-looking device is preferred by name
where one can be identified, otherwise the first enumerated camera is used.
*/

// nokhwa implementation modules
mod nokhwa_source;

pub use nokhwa_source::{NokhwaVideoSource, NokhwaVideoStream};
