use thiserror::Error;

/// Errors raised by the tracker and its integration helpers.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("invalid tracker configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: String,
    },

    #[error("invalid pipeline configuration: {field} {reason}")]
    InvalidPipelineConfig {
        field: &'static str,
        reason: String,
    },

    #[error("detector failed: {0}")]
    Detector(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
