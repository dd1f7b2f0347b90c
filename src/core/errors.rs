//! Error types for the panel extraction pipeline.
//!
//! This module defines the error types that can occur while extracting panels,
//! including invalid input errors, configuration errors, and stage-tagged
//! processing errors, along with utility constructors for creating them with
//! appropriate context.

use thiserror::Error;

/// Enum representing different stages of the panel extraction pipeline.
///
/// This enum is used to identify which stage of the pipeline an error
/// occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStage {
    /// Error occurred during binarization of the page image.
    Binarization,
    /// Error occurred during connected-component region extraction.
    RegionExtraction,
    /// Error occurred during candidate filtering.
    Filtering,
    /// Error occurred during reading-order sorting.
    Ordering,
    /// Error occurred during sharpness scoring.
    QualityValidation,
    /// Error occurred during output normalization.
    Normalization,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PipelineStage::Binarization => write!(f, "binarization"),
            PipelineStage::RegionExtraction => write!(f, "region extraction"),
            PipelineStage::Filtering => write!(f, "candidate filtering"),
            PipelineStage::Ordering => write!(f, "reading-order sorting"),
            PipelineStage::QualityValidation => write!(f, "quality validation"),
            PipelineStage::Normalization => write!(f, "normalization"),
        }
    }
}

/// Enum representing the errors that can occur during panel extraction.
#[derive(Error, Debug)]
pub enum PanelError {
    /// Error occurred while loading an image from disk.
    #[error("image load")]
    ImageLoad(#[source] image::ImageError),

    /// Error indicating invalid input, such as a zero-dimension image or a
    /// raw buffer whose length does not match its declared dimensions.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// Error indicating an out-of-range or inconsistent configuration value.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// Error occurred inside a pipeline stage.
    #[error("{stage} failed: {context}")]
    Processing {
        /// The stage of the pipeline where the error occurred.
        stage: PipelineStage,
        /// Additional context about the error.
        context: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),
}

/// Convenient result alias for panel extraction operations.
pub type PanelResult<T> = Result<T, PanelError>;

impl PanelError {
    /// Creates a PanelError for invalid input.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the invalid input.
    ///
    /// # Returns
    ///
    /// A PanelError instance.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    /// Creates a PanelError for configuration errors.
    ///
    /// # Arguments
    ///
    /// * `message` - A message describing the configuration error.
    ///
    /// # Returns
    ///
    /// A PanelError instance.
    pub fn config_error(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Creates a PanelError for configuration errors with field context.
    ///
    /// # Arguments
    ///
    /// * `field` - The configuration field that failed validation.
    /// * `value` - The offending value, formatted for display.
    /// * `reason` - The reason the value is invalid.
    ///
    /// # Returns
    ///
    /// A PanelError instance.
    pub fn config_error_with_context(field: &str, value: &str, reason: &str) -> Self {
        Self::ConfigError {
            message: format!(
                "Configuration error in field '{}' with value '{}': {}",
                field, value, reason
            ),
        }
    }

    /// Creates a PanelError for a failure inside a pipeline stage.
    ///
    /// # Arguments
    ///
    /// * `stage` - The stage of the pipeline where the error occurred.
    /// * `context` - Additional context about the error.
    ///
    /// # Returns
    ///
    /// A PanelError instance.
    pub fn processing(stage: PipelineStage, context: impl Into<String>) -> Self {
        Self::Processing {
            stage,
            context: context.into(),
        }
    }
}

/// Implementation of From<image::ImageError> for PanelError.
///
/// This allows image::ImageError to be automatically converted to PanelError.
impl From<image::ImageError> for PanelError {
    fn from(error: image::ImageError) -> Self {
        Self::ImageLoad(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_display() {
        assert_eq!(PipelineStage::Binarization.to_string(), "binarization");
        assert_eq!(
            PipelineStage::QualityValidation.to_string(),
            "quality validation"
        );
    }

    #[test]
    fn test_error_messages() {
        let err = PanelError::invalid_input("image has zero width");
        assert_eq!(err.to_string(), "invalid input: image has zero width");

        let err = PanelError::config_error_with_context("max_aspect_ratio", "0.5", "must be >= 1");
        assert!(err.to_string().contains("max_aspect_ratio"));
        assert!(err.to_string().contains("0.5"));

        let err = PanelError::processing(PipelineStage::Normalization, "zero-sized crop");
        assert_eq!(err.to_string(), "normalization failed: zero-sized crop");
    }
}
