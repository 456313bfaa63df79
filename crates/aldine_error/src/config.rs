//! Configuration error type.

/// Configuration load or validation error.
///
/// # Examples
///
/// ```
/// use aldine_error::ConfigError;
///
/// let err = ConfigError::new("missing field `upload_dir`");
/// assert!(format!("{}", err).contains("upload_dir"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Config Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// Description of the failure
    pub message: String,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new config error with automatic location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
