//! Post workflow error types.

use aldine_core::PostStatus;

/// Kinds of post workflow errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum WorkflowErrorKind {
    /// No post exists with the given id
    #[display("Post not found: {}", _0)]
    PostNotFound(i64),
    /// The requested status change is not an allowed edge
    #[display("Invalid status transition from {} to {}", from, to)]
    InvalidTransition {
        /// Status the post currently holds
        from: PostStatus,
        /// Status the caller requested
        to: PostStatus,
    },
}

/// Workflow error with location tracking.
///
/// # Examples
///
/// ```
/// use aldine_error::{WorkflowError, WorkflowErrorKind};
///
/// let err = WorkflowError::new(WorkflowErrorKind::PostNotFound(7));
/// assert!(format!("{}", err).contains("not found"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Workflow Error: {} at line {} in {}", kind, line, file)]
pub struct WorkflowError {
    /// The kind of error that occurred
    pub kind: WorkflowErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl WorkflowError {
    /// Create a new workflow error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: WorkflowErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
