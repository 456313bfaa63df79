//! In-memory reference implementations of the store contracts.

use crate::{MediaStore, PostStore};
use aldine_core::{Media, MediaStatus, MediaType, NewMedia, NewPost, Post};
use aldine_error::{AldineResult, MediaError, MediaErrorKind, WorkflowError, WorkflowErrorKind};
use std::collections::HashMap;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

/// In-memory post store backed by a `HashMap` behind an async lock.
///
/// Ids are assigned from a monotonically increasing counter starting at 1.
#[derive(Default)]
pub struct InMemoryPostStore {
    posts: RwLock<HashMap<i64, Post>>,
    next_id: AtomicI64,
}

impl InMemoryPostStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(0),
        }
    }
}

#[async_trait::async_trait]
impl PostStore for InMemoryPostStore {
    async fn insert(&self, post: NewPost) -> AldineResult<Post> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let post = post.with_id(id);
        self.posts.write().await.insert(id, post.clone());
        tracing::debug!(id, "Inserted post");
        Ok(post)
    }

    async fn update(&self, post: Post) -> AldineResult<Post> {
        let mut posts = self.posts.write().await;
        if !posts.contains_key(&post.id) {
            return Err(WorkflowError::new(WorkflowErrorKind::PostNotFound(post.id)).into());
        }
        posts.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_by_id(&self, id: i64) -> AldineResult<Option<Post>> {
        Ok(self.posts.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> AldineResult<Vec<Post>> {
        Ok(self.posts.read().await.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: i64) -> AldineResult<()> {
        self.posts.write().await.remove(&id);
        Ok(())
    }
}

/// In-memory media store backed by a `HashMap` behind an async lock.
#[derive(Default)]
pub struct InMemoryMediaStore {
    media: RwLock<HashMap<i64, Media>>,
    next_id: AtomicI64,
}

impl InMemoryMediaStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            media: RwLock::new(HashMap::new()),
            next_id: AtomicI64::new(0),
        }
    }

    async fn filtered(&self, pred: impl Fn(&Media) -> bool) -> Vec<Media> {
        self.media
            .read()
            .await
            .values()
            .filter(|m| pred(m))
            .cloned()
            .collect()
    }
}

#[async_trait::async_trait]
impl MediaStore for InMemoryMediaStore {
    async fn insert(&self, media: NewMedia) -> AldineResult<Media> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        let media = media.with_id(id);
        self.media.write().await.insert(id, media.clone());
        tracing::debug!(id, file_name = %media.file_name, "Inserted media");
        Ok(media)
    }

    async fn update(&self, media: Media) -> AldineResult<Media> {
        let mut rows = self.media.write().await;
        if !rows.contains_key(&media.id) {
            return Err(MediaError::new(MediaErrorKind::NotFound(media.id)).into());
        }
        rows.insert(media.id, media.clone());
        Ok(media)
    }

    async fn find_by_id(&self, id: i64) -> AldineResult<Option<Media>> {
        Ok(self.media.read().await.get(&id).cloned())
    }

    async fn find_by_post_id(&self, post_id: i64) -> AldineResult<Vec<Media>> {
        Ok(self.filtered(|m| m.post_id == post_id).await)
    }

    async fn find_by_file_type(&self, file_type: MediaType) -> AldineResult<Vec<Media>> {
        Ok(self.filtered(|m| m.file_type == file_type).await)
    }

    async fn find_by_status(&self, status: MediaStatus) -> AldineResult<Vec<Media>> {
        Ok(self.filtered(|m| m.status == status).await)
    }

    async fn find_by_file_name(&self, file_name: &str) -> AldineResult<Option<Media>> {
        Ok(self
            .media
            .read()
            .await
            .values()
            .find(|m| m.file_name == file_name)
            .cloned())
    }

    async fn find_by_post_and_type(
        &self,
        post_id: i64,
        file_type: MediaType,
    ) -> AldineResult<Vec<Media>> {
        Ok(self
            .filtered(|m| m.post_id == post_id && m.file_type == file_type)
            .await)
    }

    async fn find_recent_by_type_and_status(
        &self,
        file_type: MediaType,
        status: MediaStatus,
    ) -> AldineResult<Vec<Media>> {
        let mut rows = self
            .filtered(|m| m.file_type == file_type && m.status == status)
            .await;
        rows.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at));
        Ok(rows)
    }

    async fn delete(&self, id: i64) -> AldineResult<()> {
        self.media.write().await.remove(&id);
        Ok(())
    }
}
