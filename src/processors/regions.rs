//! Candidate region extraction.
//!
//! Labels connected foreground components in the binarized page mask and
//! reduces each component to its axis-aligned bounding box. The one component
//! that is recognizably the page background (touching every image border and
//! covering most of the page) is dropped here and never becomes a candidate.

use image::GrayImage;
use imageproc::region_labelling::connected_components;
use std::collections::BTreeMap;
use tracing::debug;

use crate::core::{PixelConnectivity, ThresholdPolicy};
use crate::processors::binarize::{BACKGROUND, binarize};
use crate::processors::types::PanelRegion;

/// Fraction of the page a border-touching component must cover to be treated
/// as the page background rather than a panel.
const BACKGROUND_COVERAGE: f64 = 0.9;

/// Per-label accumulator for bounding box and pixel count.
struct ComponentBounds {
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
    pixels: u32,
}

impl ComponentBounds {
    fn start(x: u32, y: u32) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x,
            max_y: y,
            pixels: 1,
        }
    }

    fn extend(&mut self, x: u32, y: u32) {
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
        self.pixels += 1;
    }
}

/// Extracts candidate panel regions from a grayscale page image.
///
/// The page is binarized according to `policy`, connected foreground
/// components are labeled with the requested connectivity, and each component
/// becomes one [`PanelRegion`] carrying its bounding box and foreground pixel
/// count.
///
/// A fully uniform page produces no foreground and returns an empty vector;
/// this is the "no panels detected" signal, not an error.
///
/// # Arguments
///
/// * `gray` - The grayscale page image. Must have non-zero dimensions.
/// * `policy` - Binarization policy.
/// * `connectivity` - Connectivity used for component labeling.
///
/// # Returns
///
/// Candidate regions sorted by `(y, x)` of their top-left corner.
pub fn extract_regions(
    gray: &GrayImage,
    policy: ThresholdPolicy,
    connectivity: PixelConnectivity,
) -> Vec<PanelRegion> {
    let mask = binarize(gray, policy);
    let labels = connected_components(&mask, connectivity.into(), image::Luma([BACKGROUND]));

    // BTreeMap keeps label traversal order independent of hash state.
    let mut components: BTreeMap<u32, ComponentBounds> = BTreeMap::new();
    for (x, y, label) in labels.enumerate_pixels() {
        let id = label.0[0];
        if id == 0 {
            continue;
        }
        components
            .entry(id)
            .and_modify(|bounds| bounds.extend(x, y))
            .or_insert_with(|| ComponentBounds::start(x, y));
    }

    let page_area = u64::from(gray.width()) * u64::from(gray.height());
    let mut regions: Vec<PanelRegion> = components
        .into_values()
        .filter(|bounds| !is_page_background(bounds, gray.width(), gray.height(), page_area))
        .map(|bounds| {
            PanelRegion::new(
                bounds.min_x,
                bounds.min_y,
                bounds.max_x - bounds.min_x + 1,
                bounds.max_y - bounds.min_y + 1,
                bounds.pixels,
            )
        })
        .collect();

    regions.sort_by_key(|region| (region.scan_key(), region.width, region.height));

    debug!(
        candidates = regions.len(),
        width = gray.width(),
        height = gray.height(),
        "region extraction complete"
    );
    regions
}

/// A component touching all four image borders and covering most of the page
/// is the page background, not a panel.
fn is_page_background(
    bounds: &ComponentBounds,
    width: u32,
    height: u32,
    page_area: u64,
) -> bool {
    let touches_all_borders = bounds.min_x == 0
        && bounds.min_y == 0
        && bounds.max_x == width - 1
        && bounds.max_y == height - 1;
    touches_all_borders && f64::from(bounds.pixels) > page_area as f64 * BACKGROUND_COVERAGE
}
