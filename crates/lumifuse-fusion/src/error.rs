//! Error types for lumifuse-fusion

use thiserror::Error;

/// Errors that can occur during exposure fusion
#[derive(Debug, Error)]
pub enum FusionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] lumifuse_core::Error),

    /// Filter library error
    #[error("filter error: {0}")]
    Filter(#[from] lumifuse_filter::FilterError),

    /// The stack holds no exposures
    #[error("exposure stack is empty")]
    EmptyStack,

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for fusion operations
pub type FusionResult<T> = Result<T, FusionError>;
