//! Minimal capture demo: opens the default camera, spins the placeholder
//! model over the live feed for a while, then writes one composited
//! snapshot to the current directory.
//!
//! Usage: `ar_capture_demo [product_name] [frame_count]`

use std::env;
use std::thread;
use std::time::Duration;

use ar_capture_overlay::aroverlay::render::{PlacementUpdate, SoftwareRenderer, SurfaceSize};
use ar_capture_overlay::aroverlay::{CaptureOverlay, OverlayConfig};
use ar_capture_overlay_camera_nokhwa::NokhwaVideoSource;

const SURFACE: SurfaceSize = SurfaceSize {
    width: 640,
    height: 480,
};

fn main() {
    let mut args = env::args().skip(1);
    let product_name = args.next().unwrap_or_else(|| "Demo".to_string());
    let frame_count: u32 = args
        .next()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(120);

    let config = OverlayConfig {
        product_name,
        output_dir: ".".into(),
    };
    let mut overlay = CaptureOverlay::new(config, Box::new(NokhwaVideoSource::new()));
    overlay.set_on_close(|| println!("overlay closed"));

    overlay.request_capture(Box::new(SoftwareRenderer::new(SURFACE)));
    if let Some(message) = overlay.error_message() {
        eprintln!("{}", message);
        return;
    }

    // Pull the model a little closer than the default so it fills the frame
    overlay.set_placement(PlacementUpdate {
        z: Some(-1.5),
        ..PlacementUpdate::default()
    });

    for _ in 0..frame_count {
        overlay.run_frame();
        thread::sleep(Duration::from_millis(16));
    }

    match overlay.capture() {
        Some(bytes) => println!("snapshot written ({} bytes)", bytes.len()),
        None => eprintln!("snapshot failed, see log output"),
    }

    overlay.close();
}
