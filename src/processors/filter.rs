//! Candidate admissibility filtering and overlap resolution.
//!
//! Two passes over the extracted candidates. The first applies the per-region
//! admissibility rules (minimum area, minimum dimensions, maximum aspect
//! ratio). The second resolves nested and heavily overlapping candidates to a
//! fixpoint: a box fully contained in another is noise inside a panel, and of
//! two boxes overlapping by more than half of the smaller one only the larger
//! survives. Every removal restarts the pair scan, since dropping one region
//! can change which remaining pair conflicts.

use tracing::debug;

use crate::core::PanelConfig;
use crate::processors::types::PanelRegion;

/// Filters candidates down to the admissible, non-conflicting subset.
///
/// The result is deterministic for a fixed candidate set and configuration
/// regardless of input order: candidates are scan-ordered before conflict
/// resolution and ties keep the region with the smaller `(y, x)`.
///
/// # Arguments
///
/// * `candidates` - Candidate regions from the extraction stage.
/// * `config` - Pipeline configuration carrying the admissibility thresholds.
///
/// # Returns
///
/// The surviving regions, sorted by `(y, x)`.
pub fn filter_candidates(candidates: &[PanelRegion], config: &PanelConfig) -> Vec<PanelRegion> {
    let mut kept: Vec<PanelRegion> = candidates
        .iter()
        .copied()
        .filter(|region| is_admissible(region, config))
        .collect();
    kept.sort_by_key(|region| (region.scan_key(), region.width, region.height));

    let admissible = kept.len();
    resolve_conflicts(&mut kept);

    debug!(
        candidates = candidates.len(),
        admissible,
        kept = kept.len(),
        "candidate filtering complete"
    );
    kept
}

/// Checks the per-region admissibility rules.
///
/// The area rule is evaluated on the bounding box, not the component's
/// foreground pixel count, so an outline-only panel (thin border, light
/// interior) is judged by the page area it occupies.
fn is_admissible(region: &PanelRegion, config: &PanelConfig) -> bool {
    region.box_area() >= u64::from(config.min_panel_area)
        && region.width >= config.min_panel_width
        && region.height >= config.min_panel_height
        && region.aspect_ratio() <= config.max_aspect_ratio
}

/// Removes contained and heavily overlapping regions until no pair conflicts.
fn resolve_conflicts(regions: &mut Vec<PanelRegion>) {
    'scan: loop {
        for i in 0..regions.len() {
            for j in (i + 1)..regions.len() {
                if let Some(drop) = conflicting_index(&regions[i], &regions[j], i, j) {
                    regions.remove(drop);
                    continue 'scan;
                }
            }
        }
        break;
    }
}

/// Decides which of a conflicting pair to drop, if any.
///
/// `a` precedes `b` in scan order. Containment drops the inner box; overlap
/// beyond half of the smaller box drops the smaller box, with equal sizes
/// resolved in favor of the earlier region.
fn conflicting_index(a: &PanelRegion, b: &PanelRegion, i: usize, j: usize) -> Option<usize> {
    if a.contains(b) {
        return Some(j);
    }
    if b.contains(a) {
        return Some(i);
    }

    let intersection = a.intersection_area(b);
    if intersection == 0 {
        return None;
    }
    let smaller = a.box_area().min(b.box_area());
    if intersection * 2 > smaller {
        if a.box_area() >= b.box_area() {
            Some(j)
        } else {
            Some(i)
        }
    } else {
        None
    }
}
