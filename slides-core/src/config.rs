//! 配置
//!
//! TOML file, every field optional. The transition duration lives here and
//! nowhere else: the navigator's reset alarm and the shell's slide animation
//! both read [`SlidesConfig::transition`].

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default transition duration in milliseconds.
pub const TRANSITION_DURATION_MS: u64 = 500;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const OVERALL_TIMEOUT_SECS: u64 = 15;
const MAX_REDIRECTS: usize = 5;

/// 配置错误
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// 主题
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// 应用配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlidesConfig {
    pub transition_ms: u64,
    pub request_timeout_secs: u64,
    pub overall_timeout_secs: u64,
    pub max_redirects: usize,
    pub theme: Theme,
    pub user_agent: String,
}

impl Default for SlidesConfig {
    fn default() -> Self {
        Self {
            transition_ms: TRANSITION_DURATION_MS,
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            overall_timeout_secs: OVERALL_TIMEOUT_SECS,
            max_redirects: MAX_REDIRECTS,
            theme: Theme::default(),
            user_agent: concat!("section-slides/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl SlidesConfig {
    /// Parse TOML text. Missing keys take their defaults.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from `explicit`, else the per-user config file, else defaults.
    ///
    /// An explicit path must exist; the per-user file may be absent.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(path) => (path.to_path_buf(), true),
            None => match Self::default_path() {
                Some(path) => (path, false),
                None => return Ok(Self::default()),
            },
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => {
                log::debug!("[Config] Loading {}", path.display());
                Self::from_toml(&text, &path)
            }
            Err(e) if !required && e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("[Config] {} not found, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Read { path, source }),
        }
    }

    /// `<config_dir>/section-slides/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("section-slides").join("config.toml"))
    }

    /// Shared transition duration; never zero.
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms.max(1))
    }

    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub const fn overall_timeout(&self) -> Duration {
        Duration::from_secs(self.overall_timeout_secs)
    }
}
