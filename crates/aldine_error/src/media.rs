//! Media pipeline error types.

/// Kinds of media pipeline errors.
///
/// Thumbnail and dimension derivation failures are deliberately absent:
/// the pipeline records those as media status `Failed` instead of
/// surfacing an error to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum MediaErrorKind {
    /// No media record exists with the given id
    #[display("Media not found: {}", _0)]
    NotFound(i64),
    /// The upload payload had zero bytes
    #[display("File is empty")]
    EmptyFile,
    /// The declared size exceeds the configured maximum
    #[display("File size {} exceeds maximum allowed size {}", size, max)]
    FileTooLarge {
        /// Declared upload size in bytes
        size: i64,
        /// Configured maximum in bytes
        max: i64,
    },
    /// The MIME type is not in the allowed image/video/document sets
    #[display("File type not allowed: {}", _0)]
    UnsupportedType(String),
}

/// Media error with location tracking.
///
/// # Examples
///
/// ```
/// use aldine_error::{MediaError, MediaErrorKind};
///
/// let err = MediaError::new(MediaErrorKind::UnsupportedType("text/plain".to_string()));
/// assert!(format!("{}", err).contains("not allowed"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Media Error: {} at line {} in {}", kind, line, file)]
pub struct MediaError {
    /// The kind of error that occurred
    pub kind: MediaErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl MediaError {
    /// Create a new media error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: MediaErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
