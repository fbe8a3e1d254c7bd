//! Compositor - flattens the live video frame and the rendered 3D frame
//! into one exportable PNG.

pub mod snapshot;

pub use snapshot::*;
