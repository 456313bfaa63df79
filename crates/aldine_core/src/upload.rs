//! The upload value passed into the media pipeline.

use serde::{Deserialize, Serialize};

/// A file upload as a plain value: raw bytes plus the metadata the
/// surrounding service extracted from the request.
///
/// `declared_size` is what the caller claims; size validation checks it
/// rather than `bytes.len()` so a streaming front-end can report the
/// transfer size it observed.
///
/// # Examples
///
/// ```
/// use aldine_core::MediaUpload;
///
/// let upload = MediaUpload {
///     bytes: vec![0x89, 0x50, 0x4E, 0x47],
///     mime_type: "image/png".to_string(),
///     declared_size: 4,
///     original_file_name: Some("photo.png".to_string()),
/// };
/// assert_eq!(upload.extension(), ".png");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaUpload {
    /// Raw file content
    pub bytes: Vec<u8>,
    /// MIME type reported by the client
    pub mime_type: String,
    /// Size in bytes as reported by the transport
    pub declared_size: i64,
    /// Client-side filename, if any
    pub original_file_name: Option<String>,
}

impl MediaUpload {
    /// Extension of the original filename, including the leading dot.
    ///
    /// Returns the substring from the last `.` onward, or the empty string
    /// when the name is absent or has no dot.
    pub fn extension(&self) -> &str {
        match &self.original_file_name {
            Some(name) => match name.rfind('.') {
                Some(idx) => &name[idx..],
                None => "",
            },
            None => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload_named(name: Option<&str>) -> MediaUpload {
        MediaUpload {
            bytes: vec![1],
            mime_type: "image/png".to_string(),
            declared_size: 1,
            original_file_name: name.map(String::from),
        }
    }

    #[test]
    fn extension_from_last_dot() {
        assert_eq!(upload_named(Some("a.png")).extension(), ".png");
        assert_eq!(upload_named(Some("archive.tar.gz")).extension(), ".gz");
    }

    #[test]
    fn extension_empty_without_dot_or_name() {
        assert_eq!(upload_named(Some("README")).extension(), "");
        assert_eq!(upload_named(None).extension(), "");
    }

    #[test]
    fn extension_of_trailing_dot_is_dot() {
        assert_eq!(upload_named(Some("weird.")).extension(), ".");
    }
}
