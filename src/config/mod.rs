//! Configuration management for Tilawah.
//!
//! Configuration is read from `~/.config/tilawah/config.toml` at startup,
//! or from the path given with `--config`.
//! If the file doesn't exist, a default configuration with comments is created.

pub mod audio;
pub mod http;
pub mod prayer;
pub mod sources;

pub use audio::AudioConfig;
pub use http::HttpConfig;
pub use prayer::PrayerConfig;
pub use sources::SourceConfig;

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sources: SourceConfig,
    pub audio: AudioConfig,
    pub prayer: PrayerConfig,
    pub http: HttpConfig,
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, creates a default one with comments.
    /// If the config file exists but is invalid, returns an error.
    /// Missing fields in the config file will use default values.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::default_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path, creating it if missing.
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
            return Ok(Self::default());
        }

        let content = fs::read_to_string(config_path).map_err(|e| ConfigError::Io {
            path: config_path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path.to_path_buf(),
            source: e,
        })
    }

    /// Get the default config file path: `~/.config/tilawah/config.toml`
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("tilawah").join("config.toml"))
    }

    fn create_default_config(path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(())
    }

    /// Generate the default config file content with comments.
    fn default_config_content() -> String {
        r##"# Tilawah Configuration
#
# Chapters are resolved from the primary API first, then the secondary API,
# then a small embedded dataset.

[sources]
primary_base_url = "https://api.quran.com/api/v4"
secondary_base_url = "https://api.alquran.cloud/v1"

# Translation resource on the primary API (134 = Indonesian)
translation_id = 134
translation_language = "id"

# Editions requested from the secondary API
arabic_edition = "quran-uthmani"
translation_edition = "id.indonesian"
transliteration_edition = "en.transliteration"

# Must exceed the longest chapter (286 verses)
verses_per_page = 300

[audio]
# Verse audio is addressed as <host>/<reciter>/<chapter:03><verse:03>.mp3
host = "https://everyayah.com/data"
reciter = "Alafasy_128kbps"

[prayer]
base_url = "https://api.aladhan.com/v1"
city = "Jakarta"
country = "Indonesia"
method = 2

[http]
# Per-request timeout in seconds
timeout_secs = 10
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}
