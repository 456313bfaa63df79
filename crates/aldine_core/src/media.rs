//! Media records and their classification/status enums.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Classification of uploaded media, derived from the MIME type.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum MediaType {
    /// Image content (JPEG, PNG, GIF, WebP)
    #[display("image")]
    Image,
    /// Video content (MP4, AVI, MOV, WMV, FLV)
    #[display("video")]
    Video,
    /// Document content (PDF, DOC, DOCX)
    #[display("document")]
    Document,
}

impl MediaType {
    /// String representation for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
            MediaType::Document => "document",
        }
    }
}

impl std::str::FromStr for MediaType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "image" => Ok(MediaType::Image),
            "video" => Ok(MediaType::Video),
            "document" => Ok(MediaType::Document),
            _ => Err(format!("Unknown media type: {}", s)),
        }
    }
}

/// Processing status of a media record.
///
/// Records are created as `Uploading` and finalized as `Ready` or `Failed`.
/// `Failed` is terminal for that processing attempt; the record persists
/// until explicitly deleted.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    derive_more::Display,
)]
pub enum MediaStatus {
    /// Bytes stored, processing not yet finished
    #[display("UPLOADING")]
    Uploading,
    /// Processing complete, record servable
    #[display("READY")]
    Ready,
    /// Processing failed; record kept for inspection
    #[display("FAILED")]
    Failed,
}

impl MediaStatus {
    /// String representation for persistence.
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaStatus::Uploading => "UPLOADING",
            MediaStatus::Ready => "READY",
            MediaStatus::Failed => "FAILED",
        }
    }
}

impl std::str::FromStr for MediaStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UPLOADING" => Ok(MediaStatus::Uploading),
            "READY" => Ok(MediaStatus::Ready),
            "FAILED" => Ok(MediaStatus::Failed),
            _ => Err(format!("Unknown media status: {}", s)),
        }
    }
}

/// A stored media record.
///
/// `file_name` is the generated storage key: globally unique, never reused,
/// and not user-controlled. The owning post is referenced by `post_id`
/// only; resolution goes through the post store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Media {
    /// Store-assigned identifier
    pub id: i64,
    /// Generated storage key (unique filename)
    pub file_name: String,
    /// User-supplied name, kept for display only
    pub original_file_name: Option<String>,
    /// Location descriptor relative to the upload root
    pub file_path: String,
    /// Public URL for serving the file
    pub file_url: String,
    /// Classification derived from the MIME type
    pub file_type: MediaType,
    /// MIME type as provided by the upload
    pub mime_type: String,
    /// Size in bytes as declared by the upload
    pub file_size: i64,
    /// Accessibility text, mutable independently of content
    pub alt_text: Option<String>,
    /// Display caption, mutable independently of content
    pub caption: Option<String>,
    /// Processing status
    pub status: MediaStatus,
    /// Weak back-reference to the owning post
    pub post_id: i64,
    /// Set once when the upload is accepted
    pub uploaded_at: DateTime<Utc>,
    /// Refreshed on metadata edits
    pub updated_at: DateTime<Utc>,
    /// Image width in pixels (image type only)
    pub width: Option<u32>,
    /// Image height in pixels (image type only)
    pub height: Option<u32>,
    /// Public path of the derived thumbnail (image type only)
    pub thumbnail_path: Option<String>,
    /// Duration in seconds; reserved for video, currently never set
    pub duration_seconds: Option<u32>,
    /// Video thumbnail path; reserved, currently never set
    pub video_thumbnail_path: Option<String>,
}

/// Insert-side value for a media record, before the store assigns an id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMedia {
    /// Generated storage key (unique filename)
    pub file_name: String,
    /// User-supplied name, kept for display only
    pub original_file_name: Option<String>,
    /// Location descriptor relative to the upload root
    pub file_path: String,
    /// Public URL for serving the file
    pub file_url: String,
    /// Classification derived from the MIME type
    pub file_type: MediaType,
    /// MIME type as provided by the upload
    pub mime_type: String,
    /// Size in bytes as declared by the upload
    pub file_size: i64,
    /// Accessibility text
    pub alt_text: Option<String>,
    /// Display caption
    pub caption: Option<String>,
    /// Processing status
    pub status: MediaStatus,
    /// Weak back-reference to the owning post
    pub post_id: i64,
    /// Set once when the upload is accepted
    pub uploaded_at: DateTime<Utc>,
    /// Refreshed on metadata edits
    pub updated_at: DateTime<Utc>,
    /// Image width in pixels (image type only)
    pub width: Option<u32>,
    /// Image height in pixels (image type only)
    pub height: Option<u32>,
    /// Public path of the derived thumbnail (image type only)
    pub thumbnail_path: Option<String>,
    /// Duration in seconds; reserved for video, currently never set
    pub duration_seconds: Option<u32>,
    /// Video thumbnail path; reserved, currently never set
    pub video_thumbnail_path: Option<String>,
}

impl NewMedia {
    /// Attach a store-assigned id, producing the stored record.
    pub fn with_id(self, id: i64) -> Media {
        Media {
            id,
            file_name: self.file_name,
            original_file_name: self.original_file_name,
            file_path: self.file_path,
            file_url: self.file_url,
            file_type: self.file_type,
            mime_type: self.mime_type,
            file_size: self.file_size,
            alt_text: self.alt_text,
            caption: self.caption,
            status: self.status,
            post_id: self.post_id,
            uploaded_at: self.uploaded_at,
            updated_at: self.updated_at,
            width: self.width,
            height: self.height,
            thumbnail_path: self.thumbnail_path,
            duration_seconds: self.duration_seconds,
            video_thumbnail_path: self.video_thumbnail_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_type_round_trips_through_str() {
        use strum::IntoEnumIterator;
        for t in MediaType::iter() {
            assert_eq!(t.as_str().parse::<MediaType>().unwrap(), t);
        }
    }

    #[test]
    fn media_status_displays_persisted_form() {
        assert_eq!(MediaStatus::Ready.to_string(), "READY");
        assert_eq!(MediaStatus::Failed.to_string(), "FAILED");
        assert_eq!(MediaStatus::Uploading.to_string(), "UPLOADING");
    }
}
