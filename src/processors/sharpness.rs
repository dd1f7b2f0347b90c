//! Sharpness scoring for extracted panel crops.
//!
//! The score is the population variance of the discrete Laplacian response
//! over the grayscale crop. Edge-rich, legible panels score high; blurry,
//! near-blank, or garbled extractions score near zero and are rejected by the
//! quality gate in the pipeline.

use image::GrayImage;
use imageproc::filter::laplacian_filter;

/// Computes the Laplacian-response variance of a grayscale image.
///
/// # Arguments
///
/// * `gray` - The grayscale crop to score.
///
/// # Returns
///
/// The variance of the Laplacian response, or 0.0 for an empty image.
pub fn laplacian_variance(gray: &GrayImage) -> f32 {
    let pixel_count = (gray.width() as u64 * gray.height() as u64) as f64;
    if pixel_count == 0.0 {
        return 0.0;
    }

    let response = laplacian_filter(gray);

    let mut sum = 0.0f64;
    for pixel in response.pixels() {
        sum += f64::from(pixel.0[0]);
    }
    let mean = sum / pixel_count;

    let mut sum_sq = 0.0f64;
    for pixel in response.pixels() {
        let delta = f64::from(pixel.0[0]) - mean;
        sum_sq += delta * delta;
    }

    (sum_sq / pixel_count) as f32
}
