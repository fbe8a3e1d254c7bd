//! Snapshot compositing, PNG encoding, and the export filename.
//!
//! The video frame is scaled to the render surface, then the rendered 3D
//! frame is drawn on top with normal source-over composition. The filename
//! is `AR_<product>_<timestamp>.png` with colons/periods replaced for
//! filesystem safety.

use chrono::{DateTime, Local};
use image::codecs::png::PngEncoder;
use image::imageops::{self, FilterType};
use image::{ColorType, ImageEncoder, Rgba, RgbaImage, RgbImage};
use crate::error::{Error, Result};

/// Product name used when the host supplies an empty one.
pub const DEFAULT_PRODUCT_NAME: &str = "Product";

/// Flatten the current video frame and the rendered overlay frame.
///
/// The video is scaled to the overlay's surface size; the overlay is then
/// source-over composited on top, so the solid's alpha decides how much
/// video shows through.
pub fn composite(video: &RgbImage, overlay: &RgbaImage) -> RgbaImage {
    let (width, height) = overlay.dimensions();

    let scaled = if video.dimensions() == (width, height) {
        video.clone()
    } else {
        imageops::resize(video, width, height, FilterType::Triangle)
    };

    let mut combined = RgbaImage::from_fn(width, height, |x, y| {
        let p = scaled.get_pixel(x, y);
        Rgba([p.0[0], p.0[1], p.0[2], 255])
    });
    imageops::overlay(&mut combined, overlay, 0, 0);
    combined
}

/// Encode an RGBA image as PNG bytes.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ColorType::Rgba8,
        )
        .map_err(|err| Error::Unknown(format!("PNG encoding failed: {}", err)))?;
    Ok(bytes)
}

/// Export filename: `AR_<product>_<timestamp>.png`.
///
/// The timestamp is the local datetime down to seconds (19 characters) with
/// `:` and `.` replaced by `-`, e.g. `AR_Panel_2026-08-30T12-34-56.png`.
pub fn snapshot_filename(product: &str, at: DateTime<Local>) -> String {
    let product = if product.is_empty() {
        DEFAULT_PRODUCT_NAME
    } else {
        product
    };
    let stamp = at
        .format("%Y-%m-%dT%H:%M:%S")
        .to_string()
        .replace([':', '.'], "-");
    format!("AR_{}_{}.png", product, stamp)
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
