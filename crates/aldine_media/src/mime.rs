//! MIME allow-lists and media classification.

use aldine_core::{MediaType, MediaUpload};
use aldine_error::{AldineResult, MediaError, MediaErrorKind};

/// MIME types accepted as images.
pub const ALLOWED_IMAGE_TYPES: &[&str] =
    &["image/jpeg", "image/png", "image/gif", "image/webp"];

/// MIME types accepted as videos.
pub const ALLOWED_VIDEO_TYPES: &[&str] = &[
    "video/mp4",
    "video/avi",
    "video/mov",
    "video/quicktime",
    "video/wmv",
    "video/flv",
];

/// MIME types accepted as documents.
pub const ALLOWED_DOCUMENT_TYPES: &[&str] = &[
    "application/pdf",
    "application/msword",
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
];

/// Validate an upload against size and type constraints.
///
/// # Errors
///
/// - `EmptyFile` for a zero-byte payload, checked first
/// - `FileTooLarge` when the declared size exceeds `max_file_size`
///   (the boundary itself is accepted)
/// - `UnsupportedType` when the MIME type is in none of the allow-lists
pub fn validate(upload: &MediaUpload, max_file_size: i64) -> AldineResult<()> {
    if upload.bytes.is_empty() {
        return Err(MediaError::new(MediaErrorKind::EmptyFile).into());
    }

    if upload.declared_size > max_file_size {
        return Err(MediaError::new(MediaErrorKind::FileTooLarge {
            size: upload.declared_size,
            max: max_file_size,
        })
        .into());
    }

    let mime = upload.mime_type.as_str();
    let allowed = ALLOWED_IMAGE_TYPES.contains(&mime)
        || ALLOWED_VIDEO_TYPES.contains(&mime)
        || ALLOWED_DOCUMENT_TYPES.contains(&mime);
    if !allowed {
        return Err(MediaError::new(MediaErrorKind::UnsupportedType(mime.to_string())).into());
    }

    Ok(())
}

/// Classify a MIME type into a media type.
///
/// Image and video lists are checked in that order; everything else falls
/// back to `Document`. Callers run [`validate`] first, so the fallback only
/// ever sees the document allow-list in practice.
pub fn classify(mime_type: &str) -> MediaType {
    if ALLOWED_IMAGE_TYPES.contains(&mime_type) {
        MediaType::Image
    } else if ALLOWED_VIDEO_TYPES.contains(&mime_type) {
        MediaType::Video
    } else {
        MediaType::Document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(mime: &str, bytes: Vec<u8>, declared: i64) -> MediaUpload {
        MediaUpload {
            bytes,
            mime_type: mime.to_string(),
            declared_size: declared,
            original_file_name: Some("file.bin".to_string()),
        }
    }

    #[test]
    fn empty_payload_fails_before_type_check() {
        // Even an unsupported MIME type reports EmptyFile for a zero-byte payload
        let err = validate(&upload("text/plain", vec![], 0), 100).unwrap_err();
        assert!(err.to_string().contains("empty"));
    }

    #[test]
    fn size_boundary_is_inclusive() {
        assert!(validate(&upload("image/png", vec![1], 100), 100).is_ok());
        assert!(validate(&upload("image/png", vec![1], 101), 100).is_err());
    }

    #[test]
    fn unsupported_mime_is_rejected() {
        let err = validate(&upload("text/plain", vec![1], 1), 100).unwrap_err();
        assert!(err.to_string().contains("not allowed"));
    }

    #[test]
    fn classify_checks_image_then_video_then_document() {
        assert_eq!(classify("image/png"), MediaType::Image);
        assert_eq!(classify("video/quicktime"), MediaType::Video);
        assert_eq!(classify("application/pdf"), MediaType::Document);
        // Fallback applies to anything outside the image/video lists;
        // validation keeps this unreachable for genuinely unsupported types
        assert_eq!(classify("text/plain"), MediaType::Document);
    }
}
