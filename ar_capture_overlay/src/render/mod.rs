//! Render module - scene, placement, rasterizer seam, render context, and
//! the cancellable frame-task scheduler.

// Module declarations
pub mod placement;
pub mod camera;
pub mod mesh;
pub mod scene;
pub mod renderer;
pub mod software_renderer;
pub mod context;
pub mod frame_scheduler;

#[cfg(test)]
pub mod mock_renderer;

// Re-export from each module
pub use placement::*;
pub use camera::*;
pub use mesh::*;
pub use scene::*;
pub use renderer::*;
pub use software_renderer::*;
pub use context::*;
pub use frame_scheduler::*;
