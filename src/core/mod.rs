//! Core configuration and error handling for the panel extraction pipeline.

pub mod config;
pub mod errors;

pub use config::{PanelConfig, PixelConnectivity, ThresholdPolicy};
pub use errors::{PanelError, PanelResult, PipelineStage};
