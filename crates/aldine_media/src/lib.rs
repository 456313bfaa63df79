//! Media upload pipeline for blog posts.
//!
//! Uploads flow through a single linear sequence: validate the payload,
//! classify it from its MIME type, store the raw bytes under a generated
//! unique key, derive a thumbnail for images, and persist the media
//! record. Processing failures on the image branch degrade the record to
//! status `Failed` rather than failing the upload.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use aldine_core::{MediaStatus, MediaUpload, PostDraftBuilder};
//! use aldine_media::{MediaConfig, MediaPipeline};
//! use aldine_repository::{InMemoryMediaStore, InMemoryPostStore};
//! use aldine_storage::FileSystemStorage;
//! use aldine_workflow::PostWorkflow;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let workflow = PostWorkflow::new(Arc::new(InMemoryPostStore::new()));
//! let post = workflow
//!     .create_draft(PostDraftBuilder::default().title("Post".to_string()).build()?)
//!     .await?;
//!
//! let pipeline = MediaPipeline::new(
//!     Arc::new(InMemoryMediaStore::new()),
//!     Arc::new(FileSystemStorage::new("/tmp/aldine-uploads")?),
//!     MediaConfig::default(),
//! );
//!
//! let upload = MediaUpload {
//!     bytes: std::fs::read("report.pdf")?,
//!     mime_type: "application/pdf".to_string(),
//!     declared_size: 1024,
//!     original_file_name: Some("report.pdf".to_string()),
//! };
//! let media = pipeline.upload_media(upload, &post, None, None).await?;
//! assert_eq!(media.status, MediaStatus::Ready);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod mime;
mod pipeline;
mod process;

pub use config::{MediaConfig, MediaConfigBuilder};
pub use mime::{
    ALLOWED_DOCUMENT_TYPES, ALLOWED_IMAGE_TYPES, ALLOWED_VIDEO_TYPES, classify, validate,
};
pub use pipeline::MediaPipeline;
