//! The capture overlay component.
//!
//! Owns the device-camera lifecycle, the render-context lifecycle, the
//! self-rescheduling frame chain, and on-demand compositing of the live
//! camera frame with the rendered 3D frame.
//!
//! Lifecycle is an explicit state machine, `Idle -> Requesting -> Active ->
//! Idle`, with transitions triggered only by the operations below. The
//! capture session and the render context are coupled: both exist only while
//! active and both are released together on every exit path.

use std::path::PathBuf;
use chrono::Local;
use crate::capture::{acquire_stream, CaptureSession, VideoSource, VideoStream};
use crate::compositor::{composite, encode_png, snapshot_filename};
use crate::error::{Error, Result};
use crate::render::{
    FrameScheduler, FrameTaskKey, Placement, PlacementUpdate, RenderContext, SurfaceRenderer,
};
use crate::{overlay_debug, overlay_error, overlay_info, overlay_warn};

const SOURCE: &str = "aroverlay::Overlay";

/// Overlay lifecycle states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayState {
    /// No camera session; the start button is available
    Idle,
    /// Camera acquisition in flight
    Requesting,
    /// Live session + render context + frame chain
    Active,
}

/// Host-supplied configuration.
#[derive(Debug, Clone)]
pub struct OverlayConfig {
    /// Product name, used for the heading and the export filename
    pub product_name: String,
    /// Directory snapshots are written into
    pub output_dir: PathBuf,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            product_name: String::new(),
            output_dir: PathBuf::from("."),
        }
    }
}

/// The capture overlay.
pub struct CaptureOverlay {
    config: OverlayConfig,
    video_source: Box<dyn VideoSource>,
    state: OverlayState,
    session: Option<CaptureSession>,
    context: Option<RenderContext>,
    scheduler: FrameScheduler,
    loop_handle: Option<FrameTaskKey>,
    placement: Placement,
    error_message: Option<String>,
    on_close: Option<Box<dyn FnMut()>>,
}

impl CaptureOverlay {
    /// Create an idle overlay over the given camera backend.
    pub fn new(config: OverlayConfig, video_source: Box<dyn VideoSource>) -> Self {
        Self {
            config,
            video_source,
            state: OverlayState::Idle,
            session: None,
            context: None,
            scheduler: FrameScheduler::new(),
            loop_handle: None,
            placement: Placement::default(),
            error_message: None,
            on_close: None,
        }
    }

    /// Register the host callback fired by [`close`](Self::close).
    pub fn set_on_close<F: FnMut() + 'static>(&mut self, callback: F) {
        self.on_close = Some(Box::new(callback));
    }

    // ===== LIFECYCLE OPERATIONS =====

    /// Acquire a camera stream and activate the overlay.
    ///
    /// On failure the taxonomy error becomes the visible message (with its
    /// remediation hint); the overlay returns to Idle and stays open so the
    /// user can retry. Calling this while already requesting or active is a
    /// guarded no-op (stop-before-start discipline).
    pub fn request_capture(&mut self, renderer: Box<dyn SurfaceRenderer>) {
        if self.state != OverlayState::Idle {
            overlay_warn!(
                SOURCE,
                "request_capture ignored in state {:?}; stop() first",
                self.state
            );
            return;
        }

        self.state = OverlayState::Requesting;
        self.error_message = None;
        overlay_info!(SOURCE, "starting camera acquisition");

        match acquire_stream(self.video_source.as_mut()) {
            Ok(stream) => self.begin_active(stream, renderer),
            Err(err) => {
                overlay_error!(SOURCE, "camera acquisition failed: {}", err);
                self.error_message = Some(err.user_message());
                self.state = OverlayState::Idle;
            }
        }
    }

    /// Bind the acquired stream, attempt playback, and activate.
    fn begin_active(&mut self, stream: Box<dyn VideoStream>, renderer: Box<dyn SurfaceRenderer>) {
        let mut session = CaptureSession::new(stream);

        // Playback restrictions vary by environment; failure here is a
        // warning, not a teardown.
        if let Err(err) = session.play() {
            overlay_warn!(SOURCE, "video playback blocked: {}", err);
        }

        self.session = Some(session);
        self.on_activate(renderer);
    }

    /// Build a fresh render context and start the frame chain.
    fn on_activate(&mut self, renderer: Box<dyn SurfaceRenderer>) {
        self.context = Some(RenderContext::new(renderer, &self.placement));
        self.loop_handle = Some(self.scheduler.request_frame());
        self.state = OverlayState::Active;
        overlay_info!(SOURCE, "overlay active");
    }

    /// Run one frame of the render chain: spin the solid, render, reschedule.
    ///
    /// No-op unless a frame task is pending — a cancelled handle never
    /// renders against a torn-down context.
    pub fn run_frame(&mut self) {
        let Some(handle) = self.loop_handle else {
            return;
        };
        if !self.scheduler.take(handle) {
            self.loop_handle = None;
            return;
        }
        let Some(context) = self.context.as_mut() else {
            self.loop_handle = None;
            return;
        };

        context.spin();
        if let Err(err) = context.render_frame() {
            overlay_error!(SOURCE, "frame render failed: {}", err);
        }
        self.loop_handle = Some(self.scheduler.request_frame());
    }

    /// Merge a partial placement update and apply it to the solid
    /// immediately, so it is visible to the very next frame.
    pub fn set_placement(&mut self, update: PlacementUpdate) {
        self.placement.apply(&update);
        if let Some(context) = self.context.as_mut() {
            context.apply_placement(&self.placement);
        }
    }

    /// Composite the current video and render frames into a PNG, write it
    /// to the output directory, and return the bytes.
    ///
    /// A no-op (None, nothing written) before a session is acquired. Any
    /// failure along the way is logged only; visible state never changes.
    pub fn capture(&mut self) -> Option<Vec<u8>> {
        if self.session.is_none() || self.context.is_none() {
            overlay_debug!(SOURCE, "capture ignored: no active session");
            return None;
        }

        match self.capture_snapshot() {
            Ok(bytes) => Some(bytes),
            Err(err) => {
                overlay_error!(SOURCE, "snapshot capture failed: {}", err);
                None
            }
        }
    }

    fn capture_snapshot(&mut self) -> Result<Vec<u8>> {
        // Checked by capture()
        let session = self
            .session
            .as_mut()
            .ok_or_else(|| Error::InvalidState("no capture session".to_string()))?;
        let context = self
            .context
            .as_mut()
            .ok_or_else(|| Error::InvalidState("no render context".to_string()))?;

        let video = session.frame()?;
        // Render once more so the flattened image matches the live view
        context.render_frame()?;
        let combined = composite(&video, context.frame());
        let bytes = encode_png(&combined)?;

        let filename = snapshot_filename(&self.config.product_name, Local::now());
        let path = self.config.output_dir.join(&filename);
        std::fs::write(&path, &bytes)
            .map_err(|err| Error::Unknown(format!("writing {} failed: {}", path.display(), err)))?;
        overlay_info!(SOURCE, "snapshot written to {}", path.display());
        Ok(bytes)
    }

    /// Release the session, cancel the frame chain, drop the render
    /// context, return to Idle. Idempotent.
    pub fn stop(&mut self) {
        if let Some(mut session) = self.session.take() {
            session.stop();
        }
        if let Some(handle) = self.loop_handle.take() {
            self.scheduler.cancel(handle);
        }
        self.context = None;
        if self.state != OverlayState::Idle {
            overlay_info!(SOURCE, "overlay stopped");
        }
        self.state = OverlayState::Idle;
    }

    /// [`stop`](Self::stop) plus notifying the host to hide the overlay.
    pub fn close(&mut self) {
        self.stop();
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    // ===== HOST-FACING ACCESSORS =====

    /// Current lifecycle state.
    pub fn state(&self) -> OverlayState {
        self.state
    }

    /// Whether the overlay is in active (post camera-grant) mode.
    pub fn is_active(&self) -> bool {
        self.state == OverlayState::Active
    }

    /// The inline error message to display, if any.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Current placement state.
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Product name for the heading.
    pub fn product_name(&self) -> &str {
        &self.config.product_name
    }

    /// Number of outstanding frame tasks (0 or 1).
    pub fn pending_frame_tasks(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Whether a render context currently exists.
    pub fn has_render_context(&self) -> bool {
        self.context.is_some()
    }

    /// Whether a live capture session currently exists.
    pub fn has_session(&self) -> bool {
        self.session.as_ref().is_some_and(|s| s.is_live())
    }

    /// Solid transform as of the last applied change (None while inactive).
    pub fn solid_transform(&self) -> Option<crate::render::Transform> {
        self.context.as_ref().and_then(|c| c.solid_transform())
    }
}

impl Drop for CaptureOverlay {
    fn drop(&mut self) {
        // Component teardown releases session + context together
        self.stop();
    }
}

#[cfg(test)]
#[path = "overlay_tests.rs"]
mod tests;
