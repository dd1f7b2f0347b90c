//! Output normalization.
//!
//! Accepted panel crops are scaled to fit within a fixed bounding box while
//! preserving their aspect ratio. Panels already smaller than the box are
//! passed through at their original size; normalization never upscales and
//! never crops.

use image::{RgbImage, imageops};

/// Scales a panel crop to fit within `output_size`, preserving aspect ratio.
///
/// One scale factor `min(out_w / w, out_h / h, 1.0)` is applied to both axes,
/// so the output aspect ratio matches the crop up to integer rounding. The
/// returned buffer is freshly allocated; the source crop is not mutated.
///
/// # Arguments
///
/// * `crop` - The accepted panel crop.
/// * `output_size` - The `(width, height)` bounding box to fit within.
///
/// # Returns
///
/// The normalized image.
pub fn normalize_panel(crop: &RgbImage, output_size: (u32, u32)) -> RgbImage {
    let (out_w, out_h) = output_size;
    let (w, h) = crop.dimensions();

    let scale = (f64::from(out_w) / f64::from(w))
        .min(f64::from(out_h) / f64::from(h))
        .min(1.0);

    if scale >= 1.0 {
        return crop.clone();
    }

    let target_w = ((f64::from(w) * scale).round() as u32).max(1);
    let target_h = ((f64::from(h) * scale).round() as u32).max(1);
    imageops::resize(crop, target_w, target_h, imageops::FilterType::Lanczos3)
}
