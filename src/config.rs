//! Optional TOML configuration.
//!
//! Read from `<config_dir>/feedbox/config.toml`. A missing file or missing keys
//! fall back to the built-in endpoint and review page.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use url::Url;

/// Where feedback is posted unless configured otherwise.
pub const DEFAULT_ENDPOINT: &str = "https://your-api-domain.com/feedback";

/// The review page opened for positive feedback unless configured otherwise.
pub const DEFAULT_REVIEW_URL: &str = "https://g.page/r/CVQEIsA6WpqCEBM/review";

/// Errors that can occur while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML or has unknown keys.
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A URL setting could not be parsed.
    #[error("invalid {field}: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// A URL setting uses something other than http or https.
    #[error("{field} must be an http or https URL, got scheme {scheme:?}")]
    UnsupportedScheme { field: &'static str, scheme: String },
}

/// Application settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Collection endpoint that receives the feedback POST.
    pub endpoint: String,
    /// Review page opened on positive feedback.
    pub review_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            review_url: DEFAULT_REVIEW_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads the config from the platform config directory, or defaults when
    /// there is no config directory or no file.
    pub fn load() -> Result<Self, ConfigError> {
        match default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Loads the config from `path`, or defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text)
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.endpoint_url()?;
        config.review_url()?;
        Ok(config)
    }

    /// Returns the endpoint as a validated URL.
    pub fn endpoint_url(&self) -> Result<Url, ConfigError> {
        parse_http_url("endpoint", &self.endpoint)
    }

    /// Returns the review page as a validated URL.
    pub fn review_url(&self) -> Result<Url, ConfigError> {
        parse_http_url("review_url", &self.review_url)
    }
}

/// Returns `<config_dir>/feedbox/config.toml`, if the platform has a config directory.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("feedbox").join("config.toml"))
}

fn parse_http_url(field: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidUrl { field, source })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigError::UnsupportedScheme {
            field,
            scheme: scheme.to_string(),
        }),
    }
}
