//! Core data types for the Aldine publishing workflow.
//!
//! This crate provides the foundation data types shared across the Aldine
//! workspace: blog posts with their status lifecycle, media records, and
//! the upload value passed into the media pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod media;
mod post;
mod telemetry;
mod upload;

pub use media::{Media, MediaStatus, MediaType, NewMedia};
pub use post::{NewPost, Post, PostDraft, PostDraftBuilder, PostPatch, PostStatus};
pub use telemetry::init_telemetry;
pub use upload::MediaUpload;
