//! Image loading and conversion helpers.
//!
//! The pipeline itself takes decoded [`RgbImage`] buffers; these helpers
//! cover the common caller chores of decoding files and wrapping raw pixel
//! data. Decoding stays outside the pipeline so callers control all I/O.

use image::{DynamicImage, ImageBuffer, RgbImage};

use crate::core::PanelResult;

/// Batches of paths at or above this size are decoded in parallel.
const PARALLEL_LOAD_THRESHOLD: usize = 8;

/// Converts a DynamicImage to an RgbImage.
pub fn dynamic_to_rgb(img: DynamicImage) -> RgbImage {
    img.to_rgb8()
}

/// Loads an image from a file path and converts it to RgbImage.
///
/// # Arguments
///
/// * `path` - The path of the image file to load.
///
/// # Returns
///
/// The loaded RGB image, or a [`PanelError::ImageLoad`] if the file cannot
/// be decoded.
///
/// [`PanelError::ImageLoad`]: crate::core::PanelError::ImageLoad
pub fn load_image(path: &std::path::Path) -> PanelResult<RgbImage> {
    let img = image::open(path)?;
    Ok(dynamic_to_rgb(img))
}

/// Creates an RgbImage from raw pixel data.
///
/// The data must be packed RGB (3 bytes per pixel) and its length must match
/// the declared dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image in pixels.
/// * `height` - The height of the image in pixels.
/// * `data` - The raw pixel data.
///
/// # Returns
///
/// The image, or `None` if the buffer length does not match the dimensions.
pub fn create_rgb_image(width: u32, height: u32, data: Vec<u8>) -> Option<RgbImage> {
    if data.len() != (width as usize) * (height as usize) * 3 {
        return None;
    }
    ImageBuffer::from_raw(width, height, data)
}

/// Loads a batch of images from file paths.
///
/// Decoding is parallelized with rayon when the batch is large enough to be
/// worth it.
///
/// # Arguments
///
/// * `paths` - The paths of the image files to load.
///
/// # Returns
///
/// The loaded images in input order, or the first load error.
pub fn load_images_batch<P: AsRef<std::path::Path> + Send + Sync>(
    paths: &[P],
) -> PanelResult<Vec<RgbImage>> {
    if paths.len() >= PARALLEL_LOAD_THRESHOLD {
        use rayon::prelude::*;
        paths.par_iter().map(|p| load_image(p.as_ref())).collect()
    } else {
        paths.iter().map(|p| load_image(p.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_rgb_image_checks_buffer_length() {
        assert!(create_rgb_image(2, 2, vec![0; 12]).is_some());
        assert!(create_rgb_image(2, 2, vec![0; 11]).is_none());
        assert!(create_rgb_image(2, 2, vec![0; 16]).is_none());
    }

    #[test]
    fn test_create_rgb_image_preserves_pixels() {
        let data = vec![
            255, 0, 0, /* */ 0, 255, 0, //
            0, 0, 255, /* */ 10, 20, 30,
        ];
        let img = create_rgb_image(2, 2, data).unwrap();
        assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(img.get_pixel(1, 1).0, [10, 20, 30]);
    }

    #[test]
    fn test_load_image_missing_file_is_an_error() {
        let result = load_image(std::path::Path::new("definitely/not/here.png"));
        assert!(result.is_err());
    }
}
