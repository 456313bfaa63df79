//! Image thumbnail derivation and dimension extraction.

use aldine_error::AldineError;
use aldine_storage::BlobStore;
use image::ImageFormat;
use std::io::Cursor;

/// Storage sub-area holding derived thumbnails.
pub(crate) const THUMBNAIL_DIR: &str = "thumbnails";

/// Filename prefix for derived thumbnails.
pub(crate) const THUMBNAIL_PREFIX: &str = "thumb_";

/// Blob key of the thumbnail derived for a primary key.
pub(crate) fn thumbnail_key(file_name: &str) -> String {
    format!("{THUMBNAIL_DIR}/{THUMBNAIL_PREFIX}{file_name}")
}

/// Result of successful image processing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ProcessedImage {
    pub width: u32,
    pub height: u32,
    /// Blob key the thumbnail was written under
    pub thumbnail_key: String,
}

/// Failure inside the image branch.
///
/// Never surfaces to pipeline callers: the pipeline logs it and marks the
/// media record `Failed` instead.
#[derive(Debug, derive_more::Display, derive_more::From, derive_more::Error)]
pub(crate) enum ProcessError {
    /// Decode or encode failure
    #[display("image processing failed: {}", _0)]
    Image(image::ImageError),
    /// Thumbnail blob write failure
    #[display("thumbnail write failed: {}", _0)]
    Storage(AldineError),
}

/// Decode the image, extract its dimensions, and derive a thumbnail.
///
/// The thumbnail is bounded to `bound`×`bound` preserving aspect ratio,
/// re-encoded in the source format (falling back to PNG for formats the
/// encoder does not cover), and written under [`THUMBNAIL_DIR`].
pub(crate) async fn process_image(
    blobs: &dyn BlobStore,
    bytes: &[u8],
    mime_type: &str,
    file_name: &str,
    bound: u32,
) -> Result<ProcessedImage, ProcessError> {
    let img = image::load_from_memory(bytes)?;
    let width = img.width();
    let height = img.height();

    let thumb = img.thumbnail(bound, bound);
    let format = ImageFormat::from_mime_type(mime_type).unwrap_or(ImageFormat::Png);
    let mut encoded = Vec::new();
    thumb.write_to(&mut Cursor::new(&mut encoded), format)?;

    let key = thumbnail_key(file_name);
    blobs.put(&key, &encoded).await?;

    tracing::debug!(
        key = %key,
        width,
        height,
        thumb_width = thumb.width(),
        thumb_height = thumb.height(),
        "Derived thumbnail"
    );

    Ok(ProcessedImage {
        width,
        height,
        thumbnail_key: key,
    })
}
