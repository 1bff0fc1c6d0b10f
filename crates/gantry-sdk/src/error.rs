//! Error types for host-side hooks

/// Result type for host invocation hooks
pub type HostResult<T> = Result<T, HostError>;

/// Errors raised by host-side invocation hooks
#[derive(Debug, Clone, thiserror::Error)]
pub enum HostError {
    /// Value could not be converted across the boundary
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        /// Expected type name
        expected: String,
        /// Actual type name
        got: String,
    },

    /// Host-side invocation failed
    #[error("{0}")]
    Invocation(String),
}

impl From<String> for HostError {
    fn from(s: String) -> Self {
        HostError::Invocation(s)
    }
}

impl From<&str> for HostError {
    fn from(s: &str) -> Self {
        HostError::Invocation(s.to_string())
    }
}
