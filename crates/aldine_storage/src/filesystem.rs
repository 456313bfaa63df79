//! Filesystem-based blob storage implementation.

use crate::BlobStore;
use aldine_error::{AldineResult, StorageError, StorageErrorKind};
use std::path::{Path, PathBuf};

/// Filesystem storage backend.
///
/// Stores blobs directly under a base directory, with `/`-separated key
/// segments mapping to subdirectories:
///
/// ```text
/// /var/aldine/uploads/
/// ├── 1f2e3d4c....png
/// ├── 9a8b7c6d....mp4
/// └── thumbnails/
///     └── thumb_1f2e3d4c....png
/// ```
///
/// Writes go to a temp file first and are renamed into place, so a reader
/// never observes a partially written blob.
pub struct FileSystemStorage {
    base_path: PathBuf,
}

impl FileSystemStorage {
    /// Create a new filesystem storage backend.
    ///
    /// Creates the base directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or accessed.
    #[tracing::instrument(skip(base_path))]
    pub fn new(base_path: impl Into<PathBuf>) -> AldineResult<Self> {
        let base_path = base_path.into();

        std::fs::create_dir_all(&base_path).map_err(|e| {
            StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                "{}: {}",
                base_path.display(),
                e
            )))
        })?;

        tracing::info!(path = %base_path.display(), "Created filesystem storage");
        Ok(Self { base_path })
    }

    /// Resolve a key to a path under the base directory.
    ///
    /// Keys must stay inside the storage root: absolute keys and `..`
    /// segments are rejected.
    fn resolve(&self, key: &str) -> AldineResult<PathBuf> {
        let relative = Path::new(key);
        let escapes = relative.is_absolute()
            || relative
                .components()
                .any(|c| matches!(c, std::path::Component::ParentDir));
        if key.is_empty() || escapes {
            return Err(
                StorageError::new(StorageErrorKind::InvalidKey(key.to_string())).into(),
            );
        }
        Ok(self.base_path.join(relative))
    }
}

#[async_trait::async_trait]
impl BlobStore for FileSystemStorage {
    #[tracing::instrument(skip(self, bytes), fields(key, size = bytes.len()))]
    async fn put(&self, key: &str, bytes: &[u8]) -> AldineResult<()> {
        let path = self.resolve(key)?;

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        // Write to temp file first, then rename for atomicity
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, bytes).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        tokio::fs::rename(&temp_path, &path).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                path.display(),
                e
            )))
        })?;

        tracing::info!(
            key = %key,
            path = %path.display(),
            size = bytes.len(),
            "Stored blob"
        );

        Ok(())
    }

    #[tracing::instrument(skip(self), fields(key))]
    async fn read(&self, key: &str) -> AldineResult<Vec<u8>> {
        let path = self.resolve(key)?;

        let bytes = tokio::fs::read(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::new(StorageErrorKind::NotFound(key.to_string()))
            } else {
                StorageError::new(StorageErrorKind::FileRead(format!(
                    "{}: {}",
                    path.display(),
                    e
                )))
            }
        })?;

        tracing::debug!(key = %key, size = bytes.len(), "Read blob");

        Ok(bytes)
    }

    #[tracing::instrument(skip(self), fields(key))]
    async fn delete(&self, key: &str) -> AldineResult<()> {
        let path = self.resolve(key)?;

        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(key = %key, path = %path.display(), "Deleted blob");
                Ok(())
            }
            // Absent keys are fine: delete is idempotent
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileWrite(format!(
                "delete {}: {}",
                path.display(),
                e
            )))
            .into()),
        }
    }

    #[tracing::instrument(skip(self), fields(key))]
    async fn exists(&self, key: &str) -> AldineResult<bool> {
        let path = self.resolve(key)?;
        Ok(tokio::fs::try_exists(&path).await.unwrap_or(false))
    }
}
