//! Persistence contracts for posts and media.
//!
//! The workflow and pipeline services talk to persistence through the
//! [`PostStore`] and [`MediaStore`] traits. Embedding services bring their
//! own database-backed implementations; the in-memory stores in this crate
//! are the reference collaborators used by tests and by embedders that do
//! not need durable persistence.
//!
//! Concurrent updates to the same row are last-write-wins: the stores do
//! no row locking or version checking.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use aldine_core::{Media, MediaStatus, MediaType, NewMedia, NewPost, Post};
use aldine_error::AldineResult;

mod memory;

pub use memory::{InMemoryMediaStore, InMemoryPostStore};

/// Persistence contract for blog posts.
#[async_trait::async_trait]
pub trait PostStore: Send + Sync {
    /// Insert a new post, assigning its id.
    async fn insert(&self, post: NewPost) -> AldineResult<Post>;

    /// Overwrite an existing post.
    ///
    /// # Errors
    ///
    /// Fails with `PostNotFound` when no row exists for `post.id`.
    async fn update(&self, post: Post) -> AldineResult<Post>;

    /// Look up a post by id.
    async fn find_by_id(&self, id: i64) -> AldineResult<Option<Post>>;

    /// All posts, in unspecified order.
    async fn find_all(&self) -> AldineResult<Vec<Post>>;

    /// Delete a post by id. Idempotent: absent ids succeed.
    async fn delete_by_id(&self, id: i64) -> AldineResult<()>;
}

/// Persistence contract for media records.
#[async_trait::async_trait]
pub trait MediaStore: Send + Sync {
    /// Insert a new media record, assigning its id.
    async fn insert(&self, media: NewMedia) -> AldineResult<Media>;

    /// Overwrite an existing media record.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` when no row exists for `media.id`.
    async fn update(&self, media: Media) -> AldineResult<Media>;

    /// Look up a media record by id.
    async fn find_by_id(&self, id: i64) -> AldineResult<Option<Media>>;

    /// All media owned by the given post.
    async fn find_by_post_id(&self, post_id: i64) -> AldineResult<Vec<Media>>;

    /// All media of the given type.
    async fn find_by_file_type(&self, file_type: MediaType) -> AldineResult<Vec<Media>>;

    /// All media in the given status.
    async fn find_by_status(&self, status: MediaStatus) -> AldineResult<Vec<Media>>;

    /// Look up a media record by its generated storage key.
    async fn find_by_file_name(&self, file_name: &str) -> AldineResult<Option<Media>>;

    /// Media of the given type owned by the given post.
    async fn find_by_post_and_type(
        &self,
        post_id: i64,
        file_type: MediaType,
    ) -> AldineResult<Vec<Media>>;

    /// Media matching both type and status, most recently uploaded first.
    async fn find_recent_by_type_and_status(
        &self,
        file_type: MediaType,
        status: MediaStatus,
    ) -> AldineResult<Vec<Media>>;

    /// Delete a media record by id. Idempotent: absent ids succeed.
    async fn delete(&self, id: i64) -> AldineResult<()>;
}
