//! Error types for playback control

use crate::control::ControlOp;
use thiserror::Error;

/// Result type for control operations
pub type Result<T> = std::result::Result<T, ControlError>;

/// Control pipeline errors
///
/// Every layer of the pipeline returns these values exactly as it received
/// them from the layer below. Nothing recovers from a failure locally.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControlError {
    /// A wrapped backend operation failed
    #[error("{backend} backend failed to {operation}: {reason}")]
    BackendFailure {
        /// Backend label (e.g. "local-file")
        backend: String,
        /// Operation that was attempted
        operation: ControlOp,
        /// Backend-provided reason
        reason: String,
    },

    /// Decorator settings rejected while building a chain node
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),
}

impl ControlError {
    /// Create a backend failure
    pub fn backend(backend: impl Into<String>, operation: ControlOp, reason: impl Into<String>) -> Self {
        Self::BackendFailure {
            backend: backend.into(),
            operation,
            reason: reason.into(),
        }
    }

    /// Create an invalid settings error
    pub fn invalid_settings(msg: impl Into<String>) -> Self {
        Self::InvalidSettings(msg.into())
    }

    /// Whether this error originated in a backend
    pub fn is_backend_failure(&self) -> bool {
        matches!(self, Self::BackendFailure { .. })
    }
}
