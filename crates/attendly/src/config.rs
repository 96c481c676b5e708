//! Bridges the config file, environment, and CLI flags into a ready
//! [`Console`], and persists the session cookie between invocations.

use std::time::Duration;

use attendly_config::{self as config_file, Config};
use attendly_core::{ApiClient, Console, TlsMode, TransportConfig};
use url::Url;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Load the config file, tolerating a missing one (flags may carry
/// everything needed). A malformed file is still an error.
pub fn load_config(global: &GlobalOpts) -> Result<Config, CliError> {
    if global.base_url.is_some() && !config_file::config_path().exists() {
        return Ok(Config::default());
    }
    config_file::load_config().map_err(CliError::from)
}

/// Resolve the backend base URL: flag/env wins over the config file.
pub fn resolve_base_url(global: &GlobalOpts, cfg: &Config) -> Result<Url, CliError> {
    if let Some(ref raw) = global.base_url {
        return raw.parse().map_err(|e: url::ParseError| CliError::Validation {
            field: "base-url".into(),
            reason: e.to_string(),
        });
    }
    cfg.base_url().map_err(CliError::from)
}

/// Build transport settings from config-file defaults plus flag overrides.
pub fn resolve_transport(global: &GlobalOpts, cfg: &Config) -> TransportConfig {
    let tls = if global.insecure || cfg.insecure {
        TlsMode::DangerAcceptInvalid
    } else if let Some(ca) = global.ca_cert.clone().or_else(|| cfg.ca_cert.clone()) {
        TlsMode::CustomCa(ca)
    } else {
        TlsMode::System
    };

    TransportConfig {
        tls,
        timeout: Duration::from_secs(global.timeout.unwrap_or(cfg.timeout_secs)),
        cookie_jar: None,
    }
}

/// Build a console for this invocation, re-seeding the cookie jar from
/// the saved session file so the startup probe can find an existing
/// session.
pub fn build_console(global: &GlobalOpts) -> Result<Console, CliError> {
    let cfg = load_config(global)?;
    let base_url = resolve_base_url(global, &cfg)?;
    let transport = resolve_transport(global, &cfg);

    let api = ApiClient::new(base_url, &transport).map_err(attendly_core::CoreError::from)?;
    if let Some(cookie) = config_file::load_session() {
        api.restore_cookie(&cookie);
    }
    Ok(Console::new(api))
}

/// Persist the current session cookie (after login) or clear the saved
/// one (after logout / when the jar is empty).
pub fn persist_session(console: &Console) {
    match console.api().cookie_header() {
        Some(header) => {
            if let Err(err) = config_file::save_session(&header) {
                tracing::warn!(error = %err, "failed to save session cookie");
            }
        }
        None => config_file::clear_session(),
    }
}
