//! Geometric primitives for panel extraction.

use serde::{Deserialize, Serialize};

/// An axis-aligned candidate panel region in image pixel coordinates.
///
/// Invariant: `width > 0`, `height > 0`, and the box lies fully inside the
/// source image (`x + width <= image.width`, `y + height <= image.height`).
/// Regions produced by the extractor satisfy this by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelRegion {
    /// X coordinate of the top-left corner.
    pub x: u32,
    /// Y coordinate of the top-left corner.
    pub y: u32,
    /// Width of the region in pixels.
    pub width: u32,
    /// Height of the region in pixels.
    pub height: u32,
    /// Foreground pixel count of the connected component this region was
    /// derived from. Distinct from the bounding-box area for sparse or
    /// irregular components; used for the page-background coverage test,
    /// while admissibility filtering measures the box.
    pub area: u32,
}

impl PanelRegion {
    /// Creates a new region.
    pub fn new(x: u32, y: u32, width: u32, height: u32, area: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            area,
        }
    }

    /// Exclusive right edge (`x + width`).
    #[inline]
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Exclusive bottom edge (`y + height`).
    #[inline]
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Area of the bounding box (`width * height`).
    #[inline]
    pub fn box_area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Aspect ratio as `max(w, h) / min(w, h)`, always >= 1 for a non-empty
    /// box.
    pub fn aspect_ratio(&self) -> f32 {
        let long = self.width.max(self.height) as f32;
        let short = self.width.min(self.height) as f32;
        long / short
    }

    /// Returns true if `other`'s box lies fully within this region's box.
    ///
    /// A region contains itself.
    pub fn contains(&self, other: &PanelRegion) -> bool {
        self.x <= other.x
            && self.y <= other.y
            && self.right() >= other.right()
            && self.bottom() >= other.bottom()
    }

    /// Area of the box intersection with `other`, zero when disjoint.
    pub fn intersection_area(&self, other: &PanelRegion) -> u64 {
        let x_min = self.x.max(other.x);
        let y_min = self.y.max(other.y);
        let x_max = self.right().min(other.right());
        let y_max = self.bottom().min(other.bottom());

        if x_max <= x_min || y_max <= y_min {
            return 0;
        }
        u64::from(x_max - x_min) * u64::from(y_max - y_min)
    }

    /// Length of the vertical interval shared with `other`, zero when the
    /// boxes do not overlap vertically.
    pub fn vertical_overlap(&self, other: &PanelRegion) -> u32 {
        let top = self.y.max(other.y);
        let bottom = self.bottom().min(other.bottom());
        bottom.saturating_sub(top)
    }

    /// Stable tie-break key: top-to-bottom, then left-to-right.
    #[inline]
    pub fn scan_key(&self) -> (u32, u32) {
        (self.y, self.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_areas() {
        let r = PanelRegion::new(10, 20, 30, 40, 1000);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.box_area(), 1200);
    }

    #[test]
    fn test_aspect_ratio_is_symmetric() {
        let wide = PanelRegion::new(0, 0, 300, 100, 0);
        let tall = PanelRegion::new(0, 0, 100, 300, 0);
        assert_eq!(wide.aspect_ratio(), 3.0);
        assert_eq!(tall.aspect_ratio(), 3.0);
    }

    #[test]
    fn test_containment() {
        let outer = PanelRegion::new(0, 0, 100, 100, 0);
        let inner = PanelRegion::new(10, 10, 50, 50, 0);
        let crossing = PanelRegion::new(90, 90, 50, 50, 0);

        assert!(outer.contains(&inner));
        assert!(!inner.contains(&outer));
        assert!(!outer.contains(&crossing));
        assert!(outer.contains(&outer));
    }

    #[test]
    fn test_intersection_area() {
        let a = PanelRegion::new(0, 0, 100, 100, 0);
        let b = PanelRegion::new(50, 50, 100, 100, 0);
        let c = PanelRegion::new(200, 200, 10, 10, 0);

        assert_eq!(a.intersection_area(&b), 2500);
        assert_eq!(b.intersection_area(&a), 2500);
        assert_eq!(a.intersection_area(&c), 0);
    }

    #[test]
    fn test_vertical_overlap() {
        let a = PanelRegion::new(0, 0, 10, 100, 0);
        let b = PanelRegion::new(50, 60, 10, 100, 0);
        let c = PanelRegion::new(0, 200, 10, 10, 0);

        assert_eq!(a.vertical_overlap(&b), 40);
        assert_eq!(b.vertical_overlap(&a), 40);
        assert_eq!(a.vertical_overlap(&c), 0);
    }
}
