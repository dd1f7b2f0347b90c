//! The panel extraction pipeline.
//!
//! [`PanelExtractor`] wires the processing stages together in their fixed
//! order: region extraction, candidate filtering, reading-order sorting,
//! quality validation, and normalization. Data flows strictly forward; each
//! stage fully consumes its input before the next begins, and a single
//! invocation shares no state with any other, so independent extractors (or
//! one extractor from multiple threads) may run concurrently without locking.

use image::{RgbImage, imageops};
use rayon::prelude::*;
use std::fmt;
use tracing::{debug, warn};

use crate::core::{PanelConfig, PanelError, PanelResult};
use crate::processors::{
    PanelRegion, extract_regions, filter_candidates, laplacian_variance, normalize_panel,
    sort_reading_order,
};

/// Batches at or above this size are processed in parallel by
/// [`PanelExtractor::extract_batch`].
const BATCH_PARALLEL_THRESHOLD: usize = 4;

/// A panel that passed quality validation: its region, the owned crop, and
/// the sharpness score the crop earned. Immutable once created.
#[derive(Debug, Clone, PartialEq)]
pub struct AcceptedPanel {
    /// The region the crop was taken from.
    pub region: PanelRegion,
    /// The cropped sub-image at original resolution.
    pub image: RgbImage,
    /// Laplacian-response variance of the crop.
    pub sharpness: f32,
}

/// One extracted panel in the final result set.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedPanel {
    /// Position in reading order: 0-based, dense, unique per result set.
    pub reading_index: usize,
    /// The panel's region in source image coordinates.
    pub region: PanelRegion,
    /// Laplacian-response variance of the original crop.
    pub sharpness: f32,
    /// The normalized output image.
    pub image: RgbImage,
}

/// Non-fatal signals surfaced alongside a result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelWarning {
    /// More than the configured fraction of filtered candidates was rejected
    /// by quality validation. The result set may be unusually small; the
    /// caller may want to retry with a lower sharpness threshold.
    HighRejectionRate {
        /// Number of panels rejected by quality validation.
        rejected: usize,
        /// Number of panels that entered quality validation.
        total: usize,
    },
}

impl fmt::Display for PanelWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelWarning::HighRejectionRate { rejected, total } => {
                write!(
                    f,
                    "quality validation rejected {} of {} panels",
                    rejected, total
                )
            }
        }
    }
}

/// Per-run counters for each pipeline stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Connected components that became candidates.
    pub candidates: usize,
    /// Candidates surviving admissibility and overlap resolution.
    pub filtered: usize,
    /// Panels rejected by quality validation.
    pub quality_rejected: usize,
    /// Panels in the final result set.
    pub accepted: usize,
}

impl fmt::Display for ExtractionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Extraction statistics:")?;
        writeln!(f, "  Candidates: {}", self.candidates)?;
        writeln!(f, "  After filtering: {}", self.filtered)?;
        writeln!(f, "  Quality rejected: {}", self.quality_rejected)?;
        writeln!(f, "  Accepted: {}", self.accepted)
    }
}

/// The result of one pipeline invocation.
///
/// An empty `panels` vector is the "no panels detected" signal and is not an
/// error; the caller decides whether to fall back to treating the whole image
/// as one panel or to report failure upstream.
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSet {
    /// Accepted panels sorted by `reading_index`.
    pub panels: Vec<OrderedPanel>,
    /// Non-fatal warnings raised during extraction.
    pub warnings: Vec<PanelWarning>,
    /// Stage counters for this run.
    pub stats: ExtractionStats,
}

/// The panel extraction pipeline entry point.
///
/// Holds one validated configuration and is otherwise stateless; `extract`
/// may be called any number of times, from any thread, and always produces
/// identical output for identical input.
#[derive(Debug, Clone)]
pub struct PanelExtractor {
    config: PanelConfig,
}

impl PanelExtractor {
    /// Creates an extractor, validating the configuration once up front.
    ///
    /// # Arguments
    ///
    /// * `config` - The pipeline configuration.
    ///
    /// # Returns
    ///
    /// The extractor, or a [`PanelError::ConfigError`] if any field is out of
    /// its documented range.
    pub fn new(config: PanelConfig) -> PanelResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Returns the configuration this extractor runs with.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Runs the full pipeline on one page image.
    ///
    /// # Arguments
    ///
    /// * `image` - The decoded page image. The pipeline never mutates it.
    ///
    /// # Returns
    ///
    /// The ordered, quality-validated, normalized panel set, or a
    /// [`PanelError::InvalidInput`] if the image has a zero dimension.
    pub fn extract(&self, image: &RgbImage) -> PanelResult<PanelSet> {
        if image.width() == 0 || image.height() == 0 {
            return Err(PanelError::invalid_input(format!(
                "image has zero dimension: {}x{}",
                image.width(),
                image.height()
            )));
        }

        let gray = imageops::grayscale(image);

        let candidates = extract_regions(&gray, self.config.threshold, self.config.connectivity);
        let filtered = filter_candidates(&candidates, &self.config);
        let filtered_count = filtered.len();

        let ordered = sort_reading_order(filtered, self.config.row_tolerance);

        let mut accepted = Vec::with_capacity(ordered.len());
        for region in &ordered {
            let crop =
                imageops::crop_imm(image, region.x, region.y, region.width, region.height)
                    .to_image();
            let sharpness = laplacian_variance(&imageops::grayscale(&crop));
            if sharpness < self.config.min_sharpness {
                debug!(
                    x = region.x,
                    y = region.y,
                    sharpness,
                    threshold = self.config.min_sharpness,
                    "panel rejected by quality validation"
                );
                continue;
            }
            accepted.push(AcceptedPanel {
                region: *region,
                image: crop,
                sharpness,
            });
        }

        let quality_rejected = filtered_count - accepted.len();
        let mut warnings = Vec::new();
        if filtered_count > 0
            && quality_rejected as f32 / filtered_count as f32 > self.config.max_rejected_fraction
        {
            warn!(
                rejected = quality_rejected,
                total = filtered_count,
                "quality validation rejected most panels"
            );
            warnings.push(PanelWarning::HighRejectionRate {
                rejected: quality_rejected,
                total: filtered_count,
            });
        }

        let panels: Vec<OrderedPanel> = accepted
            .into_iter()
            .enumerate()
            .map(|(reading_index, panel)| OrderedPanel {
                reading_index,
                region: panel.region,
                sharpness: panel.sharpness,
                image: normalize_panel(&panel.image, self.config.output_size),
            })
            .collect();

        let stats = ExtractionStats {
            candidates: candidates.len(),
            filtered: filtered_count,
            quality_rejected,
            accepted: panels.len(),
        };
        debug!(accepted = stats.accepted, "panel extraction complete");

        Ok(PanelSet {
            panels,
            warnings,
            stats,
        })
    }

    /// Runs the pipeline over several independent images.
    ///
    /// Images are embarrassingly parallel at this granularity; batches of
    /// four or more are processed with rayon.
    ///
    /// # Arguments
    ///
    /// * `images` - The decoded page images.
    ///
    /// # Returns
    ///
    /// One [`PanelSet`] per input image, in input order, or the first error
    /// encountered.
    pub fn extract_batch(&self, images: &[RgbImage]) -> PanelResult<Vec<PanelSet>> {
        if images.len() >= BATCH_PARALLEL_THRESHOLD {
            images.par_iter().map(|image| self.extract(image)).collect()
        } else {
            images.iter().map(|image| self.extract(image)).collect()
        }
    }
}

/// Convenience wrapper: builds a [`PanelExtractor`] and runs it once.
///
/// # Arguments
///
/// * `image` - The decoded page image.
/// * `config` - The pipeline configuration.
///
/// # Returns
///
/// The extracted panel set.
pub fn extract_panels(image: &RgbImage, config: PanelConfig) -> PanelResult<PanelSet> {
    PanelExtractor::new(config)?.extract(image)
}
