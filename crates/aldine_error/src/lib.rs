//! Error types for the Aldine publishing workflow.
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use aldine_error::{AldineResult, MediaError, MediaErrorKind};
//!
//! fn validate(bytes: &[u8]) -> AldineResult<()> {
//!     if bytes.is_empty() {
//!         Err(MediaError::new(MediaErrorKind::EmptyFile))?;
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate(&[]).is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod media;
mod storage;
mod workflow;

pub use config::ConfigError;
pub use error::{AldineError, AldineErrorKind, AldineResult};
pub use media::{MediaError, MediaErrorKind};
pub use storage::{StorageError, StorageErrorKind};
pub use workflow::{WorkflowError, WorkflowErrorKind};
