//! Error types for lumifuse-synth

use thiserror::Error;

/// Errors that can occur during exposure synthesis
#[derive(Debug, Error)]
pub enum SynthError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lumifuse_core::Error),

    /// Filter library error
    #[error("filter error: {0}")]
    Filter(#[from] lumifuse_filter::FilterError),

    /// Fusion library error
    #[error("fusion error: {0}")]
    Fusion(#[from] lumifuse_fusion::FusionError),

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for synthesis operations
pub type SynthResult<T> = Result<T, SynthError>;
