//! Key-addressable blob storage for uploaded media.
//!
//! This crate provides the storage collaborator used by the media pipeline:
//! a flat put/read/delete/exists contract over caller-supplied keys. Keys
//! are generated filenames (the pipeline guarantees uniqueness), optionally
//! namespaced with `/` separators such as `thumbnails/thumb_{name}`.
//!
//! # Example
//!
//! ```rust
//! use aldine_storage::{BlobStore, FileSystemStorage};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let storage = FileSystemStorage::new("/tmp/aldine-media")?;
//!
//! storage.put("abc123.png", &[0x89, 0x50, 0x4E, 0x47]).await?;
//! assert!(storage.exists("abc123.png").await?);
//!
//! let bytes = storage.read("abc123.png").await?;
//! storage.delete("abc123.png").await?;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use aldine_error::AldineResult;

mod filesystem;

pub use aldine_error::{StorageError, StorageErrorKind};
pub use filesystem::FileSystemStorage;

/// Trait for pluggable blob storage backends.
///
/// Implementations store raw bytes under caller-supplied keys. Metadata
/// about the blobs lives in the media store, not here.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Store bytes under the given key, overwriting any previous content.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the key is invalid or the write fails.
    async fn put(&self, key: &str, bytes: &[u8]) -> AldineResult<()>;

    /// Read the bytes stored under the given key.
    ///
    /// # Errors
    ///
    /// Returns `StorageErrorKind::NotFound` when no blob exists for the key.
    async fn read(&self, key: &str) -> AldineResult<Vec<u8>>;

    /// Delete the blob stored under the given key.
    ///
    /// Idempotent: deleting an absent key succeeds.
    async fn delete(&self, key: &str) -> AldineResult<()>;

    /// Check whether a blob exists for the given key.
    async fn exists(&self, key: &str) -> AldineResult<bool>;
}
