//! Post lifecycle workflow.
//!
//! [`PostWorkflow`] owns the post CRUD semantics and enforces the status
//! transition graph. Persistence goes through the [`PostStore`] contract;
//! the service itself holds no state beyond the store handle.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use aldine_core::{PostDraftBuilder, PostStatus};
//! use aldine_repository::InMemoryPostStore;
//! use aldine_workflow::PostWorkflow;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let workflow = PostWorkflow::new(Arc::new(InMemoryPostStore::new()));
//!
//! let draft = PostDraftBuilder::default()
//!     .title("Launch notes".to_string())
//!     .content("We shipped.".to_string())
//!     .build()?;
//! let post = workflow.create_draft(draft).await?;
//! assert_eq!(post.status, PostStatus::Draft);
//!
//! let post = workflow.change_status(post.id, PostStatus::Review).await?;
//! assert_eq!(post.status, PostStatus::Review);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use aldine_core::{NewPost, Post, PostDraft, PostPatch, PostStatus};
use aldine_error::{AldineResult, WorkflowError, WorkflowErrorKind};
use aldine_repository::PostStore;
use chrono::Utc;
use std::sync::Arc;

/// Fallback author name for drafts created without one.
const ANONYMOUS_AUTHOR: &str = "Anonymous";

/// Post workflow service.
///
/// Enforces the transition whitelist on status changes and the author-name
/// defaulting rules on create/update.
#[derive(Clone)]
pub struct PostWorkflow {
    posts: Arc<dyn PostStore>,
}

impl PostWorkflow {
    /// Create a workflow over the given post store.
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self { posts }
    }

    /// Create a new draft post.
    ///
    /// The stored post gets status `Draft` and fresh timestamps. A missing
    /// or blank author name falls back to "Anonymous".
    #[tracing::instrument(skip(self, draft), fields(title = %draft.title))]
    pub async fn create_draft(&self, draft: PostDraft) -> AldineResult<Post> {
        let now = Utc::now();
        let author_name = match draft.author_name {
            Some(name) if !name.trim().is_empty() => name,
            _ => ANONYMOUS_AUTHOR.to_string(),
        };

        let post = self
            .posts
            .insert(NewPost {
                title: draft.title,
                content: draft.content,
                rich_content: draft.rich_content,
                status: PostStatus::Draft,
                created_at: now,
                updated_at: now,
                author_id: draft.author_id,
                author_name,
            })
            .await?;

        tracing::info!(id = post.id, "Created draft post");
        Ok(post)
    }

    /// Move a post to a new status.
    ///
    /// # Errors
    ///
    /// Fails with `PostNotFound` when the id is absent, and with
    /// `InvalidTransition` when the (current, requested) pair is not an
    /// edge of the transition graph.
    #[tracing::instrument(skip(self), fields(post_id, %new_status))]
    pub async fn change_status(&self, post_id: i64, new_status: PostStatus) -> AldineResult<Post> {
        let mut post = self.get_post(post_id).await?;

        if !post.status.can_transition_to(new_status) {
            tracing::warn!(
                post_id,
                from = %post.status,
                to = %new_status,
                "Rejected status transition"
            );
            return Err(WorkflowError::new(WorkflowErrorKind::InvalidTransition {
                from: post.status,
                to: new_status,
            })
            .into());
        }

        post.status = new_status;
        post.updated_at = Utc::now();
        let post = self.posts.update(post).await?;

        tracing::info!(post_id, status = %post.status, "Changed post status");
        Ok(post)
    }

    /// Look up a post by id.
    ///
    /// # Errors
    ///
    /// Fails with `PostNotFound` when the id is absent.
    pub async fn get_post(&self, post_id: i64) -> AldineResult<Post> {
        self.posts
            .find_by_id(post_id)
            .await?
            .ok_or_else(|| WorkflowError::new(WorkflowErrorKind::PostNotFound(post_id)).into())
    }

    /// All posts, in unspecified order.
    pub async fn get_all_posts(&self) -> AldineResult<Vec<Post>> {
        self.posts.find_all().await
    }

    /// Delete a post by id. Idempotent: absent ids succeed.
    #[tracing::instrument(skip(self), fields(post_id))]
    pub async fn delete_post(&self, post_id: i64) -> AldineResult<()> {
        self.posts.delete_by_id(post_id).await
    }

    /// Apply a patch to a post.
    ///
    /// Title and content always overwrite. The author name only applies
    /// when non-blank after trimming; rich content only when `Some`.
    /// Status and media associations are untouched.
    ///
    /// # Errors
    ///
    /// Fails with `PostNotFound` when the id is absent.
    #[tracing::instrument(skip(self, patch), fields(post_id))]
    pub async fn update_post(&self, post_id: i64, patch: PostPatch) -> AldineResult<Post> {
        let mut post = self.get_post(post_id).await?;

        post.title = patch.title;
        post.content = patch.content;
        if let Some(rich) = patch.rich_content {
            post.rich_content = Some(rich);
        }
        if let Some(name) = patch.author_name
            && !name.trim().is_empty()
        {
            post.author_name = name;
        }
        post.updated_at = Utc::now();

        let post = self.posts.update(post).await?;
        tracing::info!(post_id, "Updated post");
        Ok(post)
    }
}
