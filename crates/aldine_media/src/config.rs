//! Media pipeline configuration.

use aldine_error::{AldineResult, ConfigError};
use config::{Config, File, FileFormat};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Configuration for the media pipeline.
///
/// All fields have defaults, so a partial TOML file (or none at all) works:
///
/// ```toml
/// upload_dir = "uploads"
/// max_file_size = 10_485_760
/// public_prefix = "/media/"
/// thumbnail_bound = 300
/// ```
///
/// # Examples
///
/// ```
/// use aldine_media::{MediaConfig, MediaConfigBuilder};
///
/// let config = MediaConfig::default();
/// assert_eq!(*config.max_file_size(), 10_485_760);
///
/// let small = MediaConfigBuilder::default()
///     .max_file_size(1024)
///     .build()
///     .unwrap();
/// assert_eq!(*small.max_file_size(), 1024);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
pub struct MediaConfig {
    /// Logical upload root used for key namespacing in `file_path`
    #[serde(default = "default_upload_dir")]
    #[builder(default = "default_upload_dir()")]
    upload_dir: String,

    /// Maximum accepted upload size in bytes (boundary inclusive)
    #[serde(default = "default_max_file_size")]
    #[builder(default = "default_max_file_size()")]
    max_file_size: i64,

    /// Public URL prefix under which media is served
    #[serde(default = "default_public_prefix")]
    #[builder(default = "default_public_prefix()")]
    public_prefix: String,

    /// Bounding box edge for derived thumbnails, in pixels
    #[serde(default = "default_thumbnail_bound")]
    #[builder(default = "default_thumbnail_bound()")]
    thumbnail_bound: u32,
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_max_file_size() -> i64 {
    10_485_760 // 10 MiB
}

fn default_public_prefix() -> String {
    "/media/".to_string()
}

fn default_thumbnail_bound() -> u32 {
    300
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            max_file_size: default_max_file_size(),
            public_prefix: default_public_prefix(),
            thumbnail_bound: default_thumbnail_bound(),
        }
    }
}

impl MediaConfig {
    /// Load configuration from a TOML file, applying field defaults for
    /// anything the file omits.
    ///
    /// # Errors
    ///
    /// Returns a config error when the file cannot be read or parsed.
    pub fn from_file(path: &str) -> AldineResult<Self> {
        let settings = Config::builder()
            .add_source(File::new(path, FileFormat::Toml))
            .build()
            .map_err(|e| ConfigError::new(e.to_string()))?;

        settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(e.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = MediaConfig::default();
        assert_eq!(config.upload_dir(), "uploads");
        assert_eq!(*config.max_file_size(), 10_485_760);
        assert_eq!(config.public_prefix(), "/media/");
        assert_eq!(*config.thumbnail_bound(), 300);
    }

    #[test]
    fn from_file_applies_defaults_for_omitted_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("media.toml");
        std::fs::write(&path, "max_file_size = 2048\n").unwrap();

        let config = MediaConfig::from_file(path.to_str().unwrap()).unwrap();
        assert_eq!(*config.max_file_size(), 2048);
        assert_eq!(config.public_prefix(), "/media/");
        assert_eq!(config.upload_dir(), "uploads");
    }

    #[test]
    fn from_file_missing_file_is_config_error() {
        assert!(MediaConfig::from_file("/nonexistent/media.toml").is_err());
    }

    #[test]
    fn builder_overrides_single_field() {
        let config = MediaConfigBuilder::default()
            .public_prefix("/assets/".to_string())
            .build()
            .unwrap();
        assert_eq!(config.public_prefix(), "/assets/");
        assert_eq!(*config.max_file_size(), 10_485_760);
    }
}
