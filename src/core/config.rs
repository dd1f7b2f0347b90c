//! Configuration for the panel extraction pipeline.
//!
//! This module provides the [`PanelConfig`] record that carries every tunable
//! threshold of the pipeline. A single validated instance is passed by value
//! into the pipeline entry point; there is no global or per-stage mutable
//! configuration state.

use serde::{Deserialize, Serialize};

use crate::core::errors::{PanelError, PanelResult};

/// Policy used to binarize the grayscale page image.
///
/// Binarization separates the light gutter field from panel ink and interior
/// content. Pixels strictly darker than the chosen level become foreground.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ThresholdPolicy {
    /// Fixed global threshold level. The documented default contract is the
    /// midpoint of the 8-bit intensity range.
    Fixed {
        /// Intensity level; pixels with intensity below this value are
        /// treated as foreground.
        level: u8,
    },
    /// Adaptive global threshold computed with Otsu's method. More robust to
    /// non-uniform lighting and tinted gutters than a fixed level.
    Otsu,
}

impl Default for ThresholdPolicy {
    fn default() -> Self {
        Self::Fixed { level: 127 }
    }
}

/// Pixel connectivity used during connected-component labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PixelConnectivity {
    /// Components connect through edge-adjacent neighbors only.
    Four,
    /// Components connect through edge- and corner-adjacent neighbors.
    Eight,
}

impl From<PixelConnectivity> for imageproc::region_labelling::Connectivity {
    fn from(value: PixelConnectivity) -> Self {
        match value {
            PixelConnectivity::Four => imageproc::region_labelling::Connectivity::Four,
            PixelConnectivity::Eight => imageproc::region_labelling::Connectivity::Eight,
        }
    }
}

/// Configuration record for one pipeline run.
///
/// All fields are optional when deserialized; missing fields take the
/// documented defaults. Construct with [`PanelConfig::default`] and adjust
/// individual fields, then pass to
/// [`PanelExtractor::new`](crate::pipeline::PanelExtractor::new), which
/// validates the record once up front.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Minimum bounding-box area (`width * height`) for a candidate to count
    /// as a panel.
    ///
    /// Default: 2000, roughly 0.3% of an 800x800 page. Smaller boxes are
    /// rejected as noise. The box is what is measured, not the component's
    /// foreground pixel count, so outline-only panels with light interiors
    /// are not penalized for their sparse ink coverage.
    pub min_panel_area: u32,

    /// Minimum candidate width in pixels. Default: 50.
    pub min_panel_width: u32,

    /// Minimum candidate height in pixels. Default: 50.
    pub min_panel_height: u32,

    /// Maximum allowed `max(w, h) / min(w, h)` for a candidate. Rejects
    /// degenerate slivers from scan-line noise. Default: 3.0. Must be >= 1.
    pub max_aspect_ratio: f32,

    /// Row banding tolerance as a fraction of the median panel height: two
    /// panels whose top edges differ by less than this fraction of the median
    /// height share a row. Default: 0.10. Must be in (0, 1].
    pub row_tolerance: f32,

    /// Minimum Laplacian-response variance for a crop to pass quality
    /// validation. An empirically tuned default, not a contract; lower it if
    /// legitimate low-detail panels are being rejected. Default: 100.0.
    pub min_sharpness: f32,

    /// Bounding box `(width, height)` the normalized output panels are scaled
    /// to fit within. Default: (400, 400).
    pub output_size: (u32, u32),

    /// Fraction of filtered candidates that may be rejected by quality
    /// validation before a [`HighRejectionRate`] warning is attached to the
    /// result. Default: 0.5. Must be in [0, 1].
    ///
    /// [`HighRejectionRate`]: crate::pipeline::PanelWarning::HighRejectionRate
    pub max_rejected_fraction: f32,

    /// Binarization policy. Default: fixed threshold at level 127.
    pub threshold: ThresholdPolicy,

    /// Connectivity used for component labeling. Default: eight-way.
    pub connectivity: PixelConnectivity,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            min_panel_area: 2000,
            min_panel_width: 50,
            min_panel_height: 50,
            max_aspect_ratio: 3.0,
            row_tolerance: 0.10,
            min_sharpness: 100.0,
            output_size: (400, 400),
            max_rejected_fraction: 0.5,
            threshold: ThresholdPolicy::default(),
            connectivity: PixelConnectivity::Eight,
        }
    }
}

impl PanelConfig {
    /// Validates the configuration.
    ///
    /// # Returns
    ///
    /// `Ok(())` if every field is within its documented range, or a
    /// [`PanelError::ConfigError`] naming the first offending field.
    pub fn validate(&self) -> PanelResult<()> {
        if self.min_panel_width == 0 {
            return Err(PanelError::config_error_with_context(
                "min_panel_width",
                "0",
                "must be greater than 0",
            ));
        }
        if self.min_panel_height == 0 {
            return Err(PanelError::config_error_with_context(
                "min_panel_height",
                "0",
                "must be greater than 0",
            ));
        }
        if !self.max_aspect_ratio.is_finite() || self.max_aspect_ratio < 1.0 {
            return Err(PanelError::config_error_with_context(
                "max_aspect_ratio",
                &self.max_aspect_ratio.to_string(),
                "must be a finite value >= 1",
            ));
        }
        if !self.row_tolerance.is_finite()
            || self.row_tolerance <= 0.0
            || self.row_tolerance > 1.0
        {
            return Err(PanelError::config_error_with_context(
                "row_tolerance",
                &self.row_tolerance.to_string(),
                "must be in (0, 1]",
            ));
        }
        if !self.min_sharpness.is_finite() || self.min_sharpness < 0.0 {
            return Err(PanelError::config_error_with_context(
                "min_sharpness",
                &self.min_sharpness.to_string(),
                "must be a finite value >= 0",
            ));
        }
        if self.output_size.0 == 0 || self.output_size.1 == 0 {
            return Err(PanelError::config_error_with_context(
                "output_size",
                &format!("{:?}", self.output_size),
                "both dimensions must be greater than 0",
            ));
        }
        if !self.max_rejected_fraction.is_finite()
            || !(0.0..=1.0).contains(&self.max_rejected_fraction)
        {
            return Err(PanelError::config_error_with_context(
                "max_rejected_fraction",
                &self.max_rejected_fraction.to_string(),
                "must be in [0, 1]",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = PanelConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.min_panel_width, 50);
        assert_eq!(config.min_panel_height, 50);
        assert_eq!(config.max_aspect_ratio, 3.0);
        assert_eq!(config.output_size, (400, 400));
        assert_eq!(config.threshold, ThresholdPolicy::Fixed { level: 127 });
        assert_eq!(config.connectivity, PixelConnectivity::Eight);
    }

    #[test]
    fn test_rejects_zero_minimum_dimensions() {
        let config = PanelConfig {
            min_panel_width: 0,
            ..PanelConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(PanelError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_rejects_aspect_ratio_below_one() {
        let config = PanelConfig {
            max_aspect_ratio: 0.5,
            ..PanelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_fractions() {
        let config = PanelConfig {
            row_tolerance: 0.0,
            ..PanelConfig::default()
        };
        assert!(config.validate().is_err());

        let config = PanelConfig {
            max_rejected_fraction: 1.5,
            ..PanelConfig::default()
        };
        assert!(config.validate().is_err());

        let config = PanelConfig {
            min_sharpness: f32::NAN,
            ..PanelConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_deserializes_partial_config_with_defaults() {
        let config: PanelConfig = serde_json::from_str(
            r#"{
                "min_panel_area": 500,
                "threshold": { "type": "otsu" }
            }"#,
        )
        .unwrap();

        assert_eq!(config.min_panel_area, 500);
        assert_eq!(config.threshold, ThresholdPolicy::Otsu);
        assert_eq!(config.min_panel_width, 50);
        assert_eq!(config.output_size, (400, 400));
    }

    #[test]
    fn test_serde_round_trip() {
        let config = PanelConfig {
            min_sharpness: 42.5,
            threshold: ThresholdPolicy::Fixed { level: 200 },
            connectivity: PixelConnectivity::Four,
            ..PanelConfig::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: PanelConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, back);
    }
}
