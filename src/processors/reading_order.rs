//! Reading-order sorting.
//!
//! Comics are read left-to-right, top-to-bottom, but panel tops are rarely
//! pixel-aligned across a row. A naive single-key sort by `y` misorders
//! vertically staggered rows, so ordering happens in two levels: panels are
//! first banded into rows, rows are ordered by their topmost member, and
//! panels within a row are ordered by `x`.

use tracing::debug;

use crate::processors::types::PanelRegion;

/// Sorts filtered panel regions into reading order.
///
/// Two panels share a row if the vertical overlap of their boxes exceeds half
/// of the shorter panel's height, or if their top edges differ by less than
/// `row_tolerance` times the median panel height. A full-width splash panel
/// overlaps nothing else and forms its own row without special-casing.
///
/// # Arguments
///
/// * `regions` - The filtered candidate regions, in any order.
/// * `row_tolerance` - Banding tolerance as a fraction of the median panel
///   height.
///
/// # Returns
///
/// The same regions reordered: earlier rows first, left to right within each
/// row.
pub fn sort_reading_order(regions: Vec<PanelRegion>, row_tolerance: f32) -> Vec<PanelRegion> {
    if regions.len() <= 1 {
        return regions;
    }

    let tolerance = row_tolerance * median_height(&regions);

    let mut scan_ordered = regions;
    scan_ordered.sort_by_key(|region| (region.scan_key(), region.width, region.height));

    let mut rows: Vec<Vec<PanelRegion>> = Vec::new();
    for region in scan_ordered {
        match rows
            .iter_mut()
            .find(|row| row.iter().any(|member| same_row(member, &region, tolerance)))
        {
            Some(row) => row.push(region),
            None => rows.push(vec![region]),
        }
    }

    for row in &mut rows {
        row.sort_by_key(|region| (region.x, region.y));
    }
    rows.sort_by_key(|row| {
        let top = row.iter().map(|r| r.y).min().unwrap_or(0);
        let left = row.iter().map(|r| r.x).min().unwrap_or(0);
        (top, left)
    });

    debug!(rows = rows.len(), "reading-order banding complete");
    rows.into_iter().flatten().collect()
}

/// Row membership test: vertical overlap beyond half the shorter panel, or
/// top edges within the banding tolerance.
fn same_row(a: &PanelRegion, b: &PanelRegion, tolerance: f32) -> bool {
    let overlap = a.vertical_overlap(b);
    let shorter = a.height.min(b.height);
    if f64::from(overlap) * 2.0 > f64::from(shorter) {
        return true;
    }
    (f64::from(a.y) - f64::from(b.y)).abs() < f64::from(tolerance)
}

/// Median of the region heights, used to scale the banding tolerance.
fn median_height(regions: &[PanelRegion]) -> f32 {
    let mut heights: Vec<u32> = regions.iter().map(|r| r.height).collect();
    heights.sort_unstable();
    let mid = heights.len() / 2;
    if heights.len() % 2 == 0 {
        (heights[mid - 1] + heights[mid]) as f32 / 2.0
    } else {
        heights[mid] as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn region(x: u32, y: u32, w: u32, h: u32) -> PanelRegion {
        PanelRegion::new(x, y, w, h, w * h)
    }

    fn order_of(regions: Vec<PanelRegion>) -> Vec<(u32, u32)> {
        sort_reading_order(regions, 0.10)
            .iter()
            .map(|r| (r.x, r.y))
            .collect()
    }

    #[test]
    fn test_grid_is_row_major() {
        let regions = vec![
            region(400, 300, 380, 280),
            region(0, 0, 380, 280),
            region(400, 0, 380, 280),
            region(0, 300, 380, 280),
        ];
        assert_eq!(
            order_of(regions),
            vec![(0, 0), (400, 0), (0, 300), (400, 300)]
        );
    }

    #[test]
    fn test_staggered_row_is_not_misordered() {
        // The right panel starts 30px lower than the left one but they
        // overlap vertically by far more than half, so they share a row. A
        // plain sort by y would interleave them with the second row.
        let regions = vec![
            region(0, 330, 200, 200),
            region(220, 30, 200, 200),
            region(0, 0, 200, 200),
            region(220, 360, 200, 200),
        ];
        assert_eq!(
            order_of(regions),
            vec![(0, 0), (220, 30), (0, 330), (220, 360)]
        );
    }

    #[test]
    fn test_mixed_heights_with_aligned_tops_share_a_row() {
        // A short panel next to a tall one still reads left-to-right before
        // the next row starts.
        let regions = vec![
            region(0, 450, 200, 150),
            region(220, 0, 200, 400),
            region(0, 0, 200, 150),
        ];
        assert_eq!(order_of(regions), vec![(0, 0), (220, 0), (0, 450)]);
    }

    #[test]
    fn test_splash_panel_forms_own_row() {
        let regions = vec![
            region(0, 0, 800, 250),
            region(0, 300, 380, 250),
            region(420, 300, 380, 250),
        ];
        assert_eq!(order_of(regions), vec![(0, 0), (0, 300), (420, 300)]);
    }

    #[test]
    fn test_single_column() {
        let regions = vec![
            region(0, 500, 300, 200),
            region(0, 0, 300, 200),
            region(0, 250, 300, 200),
        ];
        assert_eq!(order_of(regions), vec![(0, 0), (0, 250), (0, 500)]);
    }

    #[test]
    fn test_empty_and_single_inputs_pass_through() {
        assert!(sort_reading_order(Vec::new(), 0.10).is_empty());

        let single = vec![region(5, 7, 100, 100)];
        assert_eq!(sort_reading_order(single.clone(), 0.10), single);
    }
}
