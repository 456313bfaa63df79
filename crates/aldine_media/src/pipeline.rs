//! The media upload pipeline service.

use crate::config::MediaConfig;
use crate::process;
use crate::{classify, validate};
use aldine_core::{Media, MediaStatus, MediaType, MediaUpload, NewMedia, Post};
use aldine_error::{AldineResult, MediaError, MediaErrorKind};
use aldine_repository::MediaStore;
use aldine_storage::BlobStore;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

/// Media pipeline service.
///
/// A single linear validate → store → process → persist sequence per
/// upload; no coordination happens across concurrent calls. Image
/// processing failures degrade the record to status `Failed` instead of
/// aborting the upload.
#[derive(Clone)]
pub struct MediaPipeline {
    media: Arc<dyn MediaStore>,
    blobs: Arc<dyn BlobStore>,
    config: MediaConfig,
}

impl MediaPipeline {
    /// Create a pipeline over the given stores.
    pub fn new(media: Arc<dyn MediaStore>, blobs: Arc<dyn BlobStore>, config: MediaConfig) -> Self {
        Self {
            media,
            blobs,
            config,
        }
    }

    /// The configuration this pipeline runs with.
    pub fn config(&self) -> &MediaConfig {
        &self.config
    }

    /// Accept an upload for the given post.
    ///
    /// Validates the payload, stores the bytes under a generated unique
    /// key, derives a thumbnail for images, and persists the media record.
    /// The returned record is `Ready`, or `Failed` when the image branch
    /// hit a processing error (the upload itself still succeeds).
    ///
    /// # Errors
    ///
    /// Validation failures (`EmptyFile`, `FileTooLarge`, `UnsupportedType`)
    /// and blob-store write failures abort the upload.
    #[tracing::instrument(
        skip(self, upload, alt_text, caption),
        fields(post_id = post.id, mime = %upload.mime_type, size = upload.declared_size)
    )]
    pub async fn upload_media(
        &self,
        upload: MediaUpload,
        post: &Post,
        alt_text: Option<String>,
        caption: Option<String>,
    ) -> AldineResult<Media> {
        validate(&upload, *self.config.max_file_size())?;

        let file_type = classify(&upload.mime_type);
        let file_name = format!("{}{}", Uuid::new_v4(), upload.extension());

        self.blobs.put(&file_name, &upload.bytes).await?;

        let now = Utc::now();
        let mut status = MediaStatus::Uploading;
        let mut width = None;
        let mut height = None;
        let mut thumbnail_path = None;

        match file_type {
            MediaType::Image => {
                match process::process_image(
                    self.blobs.as_ref(),
                    &upload.bytes,
                    &upload.mime_type,
                    &file_name,
                    *self.config.thumbnail_bound(),
                )
                .await
                {
                    Ok(processed) => {
                        width = Some(processed.width);
                        height = Some(processed.height);
                        thumbnail_path = Some(format!(
                            "{}{}",
                            self.config.public_prefix(),
                            processed.thumbnail_key
                        ));
                    }
                    // Degrade rather than abort: the record is persisted as Failed
                    Err(e) => {
                        tracing::error!(key = %file_name, error = %e, "Error processing image");
                        status = MediaStatus::Failed;
                    }
                }
            }
            // Video thumbnail generation and duration extraction are not
            // implemented; the record goes straight to Ready.
            MediaType::Video => {}
            MediaType::Document => {}
        }

        if status == MediaStatus::Uploading {
            status = MediaStatus::Ready;
        }

        let media = self
            .media
            .insert(NewMedia {
                file_path: format!("{}/{}", self.config.upload_dir(), file_name),
                file_url: format!("{}{}", self.config.public_prefix(), file_name),
                file_name,
                original_file_name: upload.original_file_name,
                file_type,
                mime_type: upload.mime_type,
                file_size: upload.declared_size,
                alt_text,
                caption,
                status,
                post_id: post.id,
                uploaded_at: now,
                updated_at: now,
                width,
                height,
                thumbnail_path,
                duration_seconds: None,
                video_thumbnail_path: None,
            })
            .await?;

        tracing::info!(
            id = media.id,
            key = %media.file_name,
            file_type = %media.file_type,
            status = %media.status,
            "Uploaded media"
        );
        Ok(media)
    }

    /// All media owned by the given post.
    pub async fn get_media_by_post(&self, post_id: i64) -> AldineResult<Vec<Media>> {
        self.media.find_by_post_id(post_id).await
    }

    /// Ready images, most recently uploaded first.
    pub async fn get_recent_images(&self) -> AldineResult<Vec<Media>> {
        self.media
            .find_recent_by_type_and_status(MediaType::Image, MediaStatus::Ready)
            .await
    }

    /// Ready videos, most recently uploaded first.
    pub async fn get_recent_videos(&self) -> AldineResult<Vec<Media>> {
        self.media
            .find_recent_by_type_and_status(MediaType::Video, MediaStatus::Ready)
            .await
    }

    /// Overwrite the descriptive metadata of a media record.
    ///
    /// Both fields overwrite unconditionally: `None` or an empty string
    /// clears the stored value. There is no blank-guard here, unlike the
    /// post author name.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` when the id is absent.
    #[tracing::instrument(skip(self, alt_text, caption), fields(media_id))]
    pub async fn update_media_metadata(
        &self,
        media_id: i64,
        alt_text: Option<String>,
        caption: Option<String>,
    ) -> AldineResult<Media> {
        let mut media = self.get_media(media_id).await?;

        media.alt_text = alt_text;
        media.caption = caption;
        media.updated_at = Utc::now();

        let media = self.media.update(media).await?;
        tracing::info!(media_id, "Updated media metadata");
        Ok(media)
    }

    /// Delete a media record and its stored blobs.
    ///
    /// Storage cleanup runs before the record delete, so a crash
    /// mid-operation can leave an orphaned record but never an unowned
    /// blob. The primary blob delete is idempotent; the thumbnail delete
    /// is best-effort and logged on failure.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` when the id is absent, and with a storage
    /// error when the primary blob delete hits an I/O failure.
    #[tracing::instrument(skip(self), fields(media_id))]
    pub async fn delete_media(&self, media_id: i64) -> AldineResult<()> {
        let media = self.get_media(media_id).await?;

        self.blobs.delete(&media.file_name).await?;

        if media.thumbnail_path.is_some() {
            let thumb_key = process::thumbnail_key(&media.file_name);
            if let Err(e) = self.blobs.delete(&thumb_key).await {
                tracing::warn!(key = %thumb_key, error = %e, "Failed to delete thumbnail");
            }
        }

        self.media.delete(media.id).await?;
        tracing::info!(media_id, key = %media.file_name, "Deleted media");
        Ok(())
    }

    /// Look up a media record by id.
    ///
    /// # Errors
    ///
    /// Fails with `NotFound` when the id is absent.
    pub async fn get_media(&self, media_id: i64) -> AldineResult<Media> {
        self.media
            .find_by_id(media_id)
            .await?
            .ok_or_else(|| MediaError::new(MediaErrorKind::NotFound(media_id)).into())
    }
}
