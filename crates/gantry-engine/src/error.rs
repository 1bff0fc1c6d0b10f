//! Projection error taxonomy
//!
//! Every failure surfaced to the guest is one of these typed errors; the
//! message texts are the ones guest code observes at the call site.

use gantry_sdk::{DispatchStatus, HostError};

/// Result type for projection operations
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors surfaced to the guest runtime by projection operations
#[derive(Debug, Clone, thiserror::Error)]
pub enum ProjectionError {
    /// Interface constructor called with more than one argument, or with
    /// none when the type declares no companion constructor
    #[error("interface takes exactly one argument")]
    Arity,

    /// Wrapped object does not satisfy the target interface
    #[error("object does not implement {0}")]
    TypeMismatch(String),

    /// Companion class construction produced no usable instance
    #[error("companion class default constructor failed")]
    Construction,

    /// Array subscript argument was not a single resolvable type
    #[error("type expected")]
    TypeExpected,

    /// Generic subscript argument list contained a non-type
    #[error("type(s) expected")]
    TypesExpected,

    /// No generic definition matches the subscripted name and arity
    #[error("unsubscriptable object")]
    Unsubscriptable,

    /// Type declares no readable indexer
    #[error("unindexable object")]
    Unindexable,

    /// Type declares no writable indexer
    #[error("object doesn't support item assignment")]
    ItemAssignment,

    /// Late-binding call failed with a status other than unknown-name
    #[error("dispatch failed with status {0}")]
    Dispatch(DispatchStatus),

    /// Host-side hook failed
    #[error("host invocation failed: {0}")]
    Invocation(String),
}

impl From<HostError> for ProjectionError {
    fn from(err: HostError) -> Self {
        ProjectionError::Invocation(err.to_string())
    }
}
