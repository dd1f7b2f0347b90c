//! Utility functions for callers of the pipeline.

pub mod image;

pub use image::{create_rgb_image, load_image, load_images_batch};
