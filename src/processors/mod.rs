//! The individual stages of the panel extraction pipeline.
//!
//! Each stage is a free function over plain data so it can be exercised and
//! tuned in isolation; the [`pipeline`](crate::pipeline) module wires them
//! together in order.
//!
//! # Modules
//!
//! * `types` - The [`PanelRegion`] geometry primitive
//! * `binarize` - Grayscale binarization of the page
//! * `regions` - Connected-component candidate extraction
//! * `filter` - Admissibility filtering and overlap resolution
//! * `reading_order` - Row-banded reading-order sort
//! * `sharpness` - Laplacian-variance sharpness scoring
//! * `normalize` - Aspect-preserving output resize

pub mod binarize;
pub mod filter;
pub mod normalize;
pub mod reading_order;
pub mod regions;
pub mod sharpness;
pub mod types;

pub use binarize::binarize;
pub use filter::filter_candidates;
pub use normalize::normalize_panel;
pub use reading_order::sort_reading_order;
pub use regions::extract_regions;
pub use sharpness::laplacian_variance;
pub use types::PanelRegion;
