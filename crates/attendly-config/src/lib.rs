//! Configuration and session persistence shared by Attendly tools.
//!
//! Two concerns live here:
//!
//! - **Config file**: `config.toml` under the platform config dir,
//!   merged with `ATTENDLY_*` environment overrides via figment. The
//!   base API URL is the one required value; it is read once at startup
//!   and never revalidated.
//! - **Session file**: the saved session-cookie header. The backend
//!   authenticates with a browser-style session cookie, so a one-shot
//!   CLI needs somewhere durable to keep it between invocations: the
//!   file plays the role a browser's cookie jar plays for the web UI.

use std::fs;
use std::path::PathBuf;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use thiserror::Error;

const QUALIFIER: &str = "io";
const ORG: &str = "attendly";
const APP: &str = "attendly";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no base URL configured: set `base_url` in {path} or ATTENDLY_BASE_URL")]
    MissingBaseUrl { path: String },

    #[error("invalid base URL '{value}': {source}")]
    InvalidBaseUrl {
        value: String,
        source: url::ParseError,
    },

    #[error("could not load config: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("could not write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
}

/// The CLI's own configuration (not backend state).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Backend base URL, e.g. `http://attendance.local:8000`.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Accept self-signed TLS certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Path to a custom CA certificate (PEM).
    #[serde(default)]
    pub ca_cert: Option<PathBuf>,
}

fn default_timeout() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: default_timeout(),
            insecure: false,
            ca_cert: None,
        }
    }
}

impl Config {
    /// Parse and validate the configured base URL.
    pub fn base_url(&self) -> Result<url::Url, ConfigError> {
        let raw = self
            .base_url
            .as_deref()
            .ok_or_else(|| ConfigError::MissingBaseUrl {
                path: config_path().display().to_string(),
            })?;
        raw.parse().map_err(|source| ConfigError::InvalidBaseUrl {
            value: raw.to_owned(),
            source,
        })
    }
}

/// Path of the config file (`~/.config/attendly/config.toml` on Linux).
pub fn config_path() -> PathBuf {
    project_dirs()
        .map(|d| d.config_dir().join("config.toml"))
        .unwrap_or_else(|| PathBuf::from("attendly.toml"))
}

/// Path of the saved session cookie.
pub fn session_path() -> PathBuf {
    project_dirs()
        .map(|d| d.data_local_dir().join("session"))
        .unwrap_or_else(|| PathBuf::from(".attendly-session"))
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from(QUALIFIER, ORG, APP)
}

/// Load the config, merging file and environment. A missing file is not
/// an error: env vars alone (or CLI flags layered on top by the
/// caller) can carry a complete configuration.
pub fn load_config() -> Result<Config, ConfigError> {
    let figment = Figment::from(Serialized::defaults(Config::default()))
        .merge(Toml::file(config_path()))
        .merge(Env::prefixed("ATTENDLY_"));
    figment.extract().map_err(|e| ConfigError::Load(Box::new(e)))
}

/// Write the config file, creating parent directories as needed.
pub fn save_config(config: &Config) -> Result<(), ConfigError> {
    let path = config_path();
    write_file(&path, &toml_string(config))
}

fn toml_string(config: &Config) -> String {
    // Config is a plain struct of scalars; serialization cannot fail.
    toml::to_string_pretty(config).unwrap_or_default()
}

// ── Session cookie persistence ──────────────────────────────────────

/// Save the session cookie header after a successful login.
pub fn save_session(cookie_header: &str) -> Result<(), ConfigError> {
    write_file(&session_path(), cookie_header)
}

/// Load the saved session cookie, if any. Errors are treated as "no
/// session": the startup probe will report unauthenticated.
pub fn load_session() -> Option<String> {
    let raw = fs::read_to_string(session_path()).ok()?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Remove the saved session cookie (logout).
pub fn clear_session() {
    let _ = fs::remove_file(session_path());
}

fn write_file(path: &std::path::Path, contents: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
            path: parent.display().to_string(),
            source,
        })?;
    }
    fs::write(path, contents).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_config_has_no_base_url() {
        let config = Config::default();
        assert!(matches!(
            config.base_url(),
            Err(ConfigError::MissingBaseUrl { .. })
        ));
    }

    #[test]
    fn base_url_parses() {
        let config = Config {
            base_url: Some("http://attendance.local:8000".into()),
            ..Config::default()
        };
        let url = config.base_url().expect("valid URL");
        assert_eq!(url.port(), Some(8000));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let config = Config {
            base_url: Some("not a url".into()),
            ..Config::default()
        };
        assert!(matches!(
            config.base_url(),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let config = Config {
            base_url: Some("http://attendance.local:8000".into()),
            timeout_secs: 10,
            insecure: true,
            ca_cert: None,
        };
        let parsed: Config = toml::from_str(&toml_string(&config)).expect("valid toml");
        assert_eq!(parsed.base_url, config.base_url);
        assert_eq!(parsed.timeout_secs, 10);
        assert!(parsed.insecure);
    }
}
