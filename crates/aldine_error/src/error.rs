//! Top-level error wrapper types.

use crate::{ConfigError, MediaError, StorageError, WorkflowError};

/// Union of the error families raised across the workspace.
///
/// # Examples
///
/// ```
/// use aldine_error::{AldineError, WorkflowError, WorkflowErrorKind};
///
/// let wf = WorkflowError::new(WorkflowErrorKind::PostNotFound(42));
/// let err: AldineError = wf.into();
/// assert!(format!("{}", err).contains("Workflow Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum AldineErrorKind {
    /// Post workflow error
    #[from(WorkflowError)]
    Workflow(WorkflowError),
    /// Media pipeline error
    #[from(MediaError)]
    Media(MediaError),
    /// Blob storage error
    #[from(StorageError)]
    Storage(StorageError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

/// Aldine error with kind discrimination.
///
/// # Examples
///
/// ```
/// use aldine_error::{AldineResult, MediaError, MediaErrorKind};
///
/// fn might_fail() -> AldineResult<()> {
///     Err(MediaError::new(MediaErrorKind::EmptyFile))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Aldine Error: {}", _0)]
pub struct AldineError(Box<AldineErrorKind>);

impl AldineError {
    /// Create a new error from a kind.
    pub fn new(kind: AldineErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &AldineErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to AldineErrorKind
impl<T> From<T> for AldineError
where
    T: Into<AldineErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Aldine operations.
pub type AldineResult<T> = std::result::Result<T, AldineError>;
