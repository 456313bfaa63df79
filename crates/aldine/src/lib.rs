//! Blog publishing workflow with attached media management.
//!
//! This facade re-exports the public surface of the Aldine workspace:
//!
//! - [`PostWorkflow`] moves posts through Draft → Review → Approved →
//!   Published (with the Review → Draft and Approved → Review back-edges)
//!   over a [`PostStore`].
//! - [`MediaPipeline`] validates uploads, stores the bytes in a
//!   [`BlobStore`], derives thumbnails for images, and indexes the records
//!   in a [`MediaStore`].
//!
//! Persistence and blob storage are collaborator traits: bring your own
//! database-backed stores, or use the in-memory stores and
//! [`FileSystemStorage`] shipped here.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use aldine::{
//!     InMemoryMediaStore, InMemoryPostStore, MediaConfig, MediaPipeline,
//!     PostDraftBuilder, PostStatus, PostWorkflow,
//! };
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let workflow = PostWorkflow::new(Arc::new(InMemoryPostStore::new()));
//!
//! let post = workflow
//!     .create_draft(
//!         PostDraftBuilder::default()
//!             .title("Release notes".to_string())
//!             .content("It works.".to_string())
//!             .build()?,
//!     )
//!     .await?;
//!
//! let post = workflow.change_status(post.id, PostStatus::Review).await?;
//! let post = workflow.change_status(post.id, PostStatus::Approved).await?;
//! let post = workflow.change_status(post.id, PostStatus::Published).await?;
//! assert_eq!(post.status, PostStatus::Published);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use aldine_core::{
    Media, MediaStatus, MediaType, MediaUpload, NewMedia, NewPost, Post, PostDraft,
    PostDraftBuilder, PostPatch, PostStatus, init_telemetry,
};
pub use aldine_error::{
    AldineError, AldineErrorKind, AldineResult, ConfigError, MediaError, MediaErrorKind,
    StorageError, StorageErrorKind, WorkflowError, WorkflowErrorKind,
};
pub use aldine_media::{
    ALLOWED_DOCUMENT_TYPES, ALLOWED_IMAGE_TYPES, ALLOWED_VIDEO_TYPES, MediaConfig,
    MediaConfigBuilder, MediaPipeline,
};
pub use aldine_repository::{InMemoryMediaStore, InMemoryPostStore, MediaStore, PostStore};
pub use aldine_storage::{BlobStore, FileSystemStorage};
pub use aldine_workflow::PostWorkflow;
