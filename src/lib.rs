//! # comic-panels
//!
//! A Rust library that locates, orders, and extracts the rectangular panels of
//! a multi-panel comic page image. Given one decoded raster image it returns
//! the panels as normalized sub-images in reading order.
//!
//! ## Pipeline
//!
//! Processing runs as five strictly forward stages; no stage mutates the
//! output of an earlier one:
//!
//! 1. **Region extraction**: binarize the page and enumerate connected
//!    foreground components as candidate rectangles.
//! 2. **Candidate filtering**: drop noise by size/shape rules and resolve
//!    nested or heavily overlapping candidates.
//! 3. **Reading-order sort**: band panels into rows and order them
//!    left-to-right, top-to-bottom.
//! 4. **Quality validation**: score each crop by Laplacian-response variance
//!    and reject blurry or near-blank extractions.
//! 5. **Normalization**: scale each accepted crop to fit a canonical output
//!    size, preserving aspect ratio and never upscaling.
//!
//! The pipeline is synchronous, stateless, and deterministic: the same image
//! and configuration always produce byte-identical output. Multiple images
//! can be processed in parallel with [`PanelExtractor::extract_batch`].
//!
//! ## Modules
//!
//! * [`core`] - Configuration and error handling
//! * [`processors`] - The individual pipeline stages
//! * [`pipeline`] - The [`PanelExtractor`] entry point and result types
//! * [`utils`] - Image loading helpers for callers
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use comic_panels::prelude::*;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let page = load_image(Path::new("comic_page.png"))?;
//!
//! let extractor = PanelExtractor::new(PanelConfig::default())?;
//! let result = extractor.extract(&page)?;
//!
//! for panel in &result.panels {
//!     println!(
//!         "panel {} at ({}, {}) {}x{} sharpness {:.1}",
//!         panel.reading_index,
//!         panel.region.x,
//!         panel.region.y,
//!         panel.region.width,
//!         panel.region.height,
//!         panel.sharpness,
//!     );
//! }
//!
//! for warning in &result.warnings {
//!     eprintln!("warning: {warning}");
//! }
//! # Ok(())
//! # }
//! ```
//!
//! [`PanelExtractor`]: pipeline::PanelExtractor
//! [`PanelExtractor::extract_batch`]: pipeline::PanelExtractor::extract_batch

pub mod core;
pub mod pipeline;
pub mod processors;
pub mod utils;

/// Prelude module for convenient imports.
///
/// Bring the essentials into scope with a single use statement:
///
/// ```rust
/// use comic_panels::prelude::*;
/// ```
pub mod prelude {
    pub use crate::core::{PanelConfig, PanelError, PanelResult, ThresholdPolicy};
    pub use crate::pipeline::{
        OrderedPanel, PanelExtractor, PanelSet, PanelWarning, extract_panels,
    };
    pub use crate::processors::PanelRegion;
    pub use crate::utils::{load_image, load_images_batch};
}
