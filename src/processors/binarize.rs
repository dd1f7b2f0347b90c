//! Page binarization.
//!
//! Comic pages separate panels with a light gutter field; panel ink and
//! interior content are darker. Binarization maps the grayscale page to a
//! mask in which panel content is foreground (255) and the gutter field is
//! background (0), which is the orientation the component labeling stage
//! expects.

use image::{GrayImage, Luma};
use imageproc::contrast::otsu_level;

use crate::core::ThresholdPolicy;

/// Foreground value in binarized masks.
pub const FOREGROUND: u8 = 255;

/// Background value in binarized masks.
pub const BACKGROUND: u8 = 0;

/// Binarizes a grayscale page into a foreground mask.
///
/// Pixels strictly darker than the threshold level become foreground. With
/// [`ThresholdPolicy::Otsu`] the level is computed from the image histogram
/// instead of using the fixed configured level.
///
/// # Arguments
///
/// * `gray` - The grayscale page image.
/// * `policy` - The binarization policy from the pipeline configuration.
///
/// # Returns
///
/// A mask image of the same dimensions with pixels set to [`FOREGROUND`] or
/// [`BACKGROUND`].
pub fn binarize(gray: &GrayImage, policy: ThresholdPolicy) -> GrayImage {
    let level = match policy {
        ThresholdPolicy::Fixed { level } => level,
        ThresholdPolicy::Otsu => otsu_level(gray),
    };

    let mut mask = GrayImage::new(gray.width(), gray.height());
    for (mask_pixel, gray_pixel) in mask.pixels_mut().zip(gray.pixels()) {
        let value = if gray_pixel.0[0] < level {
            FOREGROUND
        } else {
            BACKGROUND
        };
        *mask_pixel = Luma([value]);
    }
    mask
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_threshold_splits_at_level() {
        let mut gray = GrayImage::new(3, 1);
        gray.put_pixel(0, 0, Luma([0]));
        gray.put_pixel(1, 0, Luma([126]));
        gray.put_pixel(2, 0, Luma([127]));

        let mask = binarize(&gray, ThresholdPolicy::Fixed { level: 127 });

        assert_eq!(mask.get_pixel(0, 0).0[0], FOREGROUND);
        assert_eq!(mask.get_pixel(1, 0).0[0], FOREGROUND);
        // At the level itself the pixel counts as background.
        assert_eq!(mask.get_pixel(2, 0).0[0], BACKGROUND);
    }

    #[test]
    fn test_uniform_bright_image_has_no_foreground() {
        let gray = GrayImage::from_pixel(16, 16, Luma([255]));
        let mask = binarize(&gray, ThresholdPolicy::default());
        assert!(mask.pixels().all(|p| p.0[0] == BACKGROUND));
    }

    #[test]
    fn test_otsu_separates_bimodal_image() {
        // Left half dark, right half bright; Otsu should land between.
        let gray = GrayImage::from_fn(64, 64, |x, _| {
            if x < 32 { Luma([40]) } else { Luma([220]) }
        });
        let mask = binarize(&gray, ThresholdPolicy::Otsu);

        assert_eq!(mask.get_pixel(0, 0).0[0], FOREGROUND);
        assert_eq!(mask.get_pixel(63, 0).0[0], BACKGROUND);
    }
}
