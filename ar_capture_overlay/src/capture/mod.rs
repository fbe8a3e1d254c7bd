//! Camera capture: acquisition strategies, the backend seam, and the
//! exclusively-owned capture session.
//!
//! Hardware backends implement [`VideoSource`]/[`VideoStream`] in their own
//! crates; the core only speaks constraints and frames.

pub mod stream;
pub mod acquisition;
pub mod session;

#[cfg(test)]
pub mod mock_stream;

// Re-export capture types into the capture namespace
pub use stream::*;
pub use acquisition::*;
pub use session::*;
