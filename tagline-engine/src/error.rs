//! Engine error types

use tagline_core::OutputError;
use thiserror::Error;

/// Errors raised while driving a segmentation run
#[derive(Error, Debug)]
pub enum EngineError {
    /// The output handler failed
    #[error("output error: {0}")]
    Output(#[from] OutputError),

    /// The segmenter failed on a piece of input
    #[error("segmentation failed: {0}")]
    Segmentation(String),

    /// Invalid pipeline configuration
    #[error("invalid configuration: {0}")]
    Config(String),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_error_converts() {
        let error: EngineError = OutputError::Closed.into();
        assert!(matches!(error, EngineError::Output(OutputError::Closed)));
        assert_eq!(error.to_string(), "output error: output sink is closed");
    }
}
