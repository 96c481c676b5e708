//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` / `ConfigError` variants into user-facing errors
//! with actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use attendly_core::CoreError;

/// Exit codes per the CLI contract.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const PERMISSION: i32 = 5;
    pub const CONNECTION: i32 = 7;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not reach the attendance backend")]
    #[diagnostic(
        code(attendly::connection_failed),
        help(
            "Check that the backend is running and the base URL is correct.\n\
             Set it with --base-url, ATTENDLY_BASE_URL, or `attendly config init`."
        )
    )]
    ConnectionFailed {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS setup failed: {reason}")]
    #[diagnostic(
        code(attendly::tls_error),
        help(
            "The backend may be using a self-signed certificate.\n\
             Use --insecure (-k) to accept it, or point --ca-cert at the signing certificate."
        )
    )]
    Tls { reason: String },

    // ── Authentication ───────────────────────────────────────────────
    #[error("Not logged in")]
    #[diagnostic(
        code(attendly::auth_required),
        help("Run: attendly login (or attendly login --employee <empid>)")
    )]
    AuthRequired,

    #[error("Authentication failed: {message}")]
    #[diagnostic(
        code(attendly::auth_failed),
        help("Verify the account and password, then run: attendly login")
    )]
    AuthFailed { message: String },

    #[error("Could not verify the saved session: {message}")]
    #[diagnostic(
        code(attendly::probe_failed),
        help("The backend rejected the session probe for a reason other than an expired login.")
    )]
    ProbeFailed { message: String },

    #[error("Your role ({role}) does not grant access to the {section} section")]
    #[diagnostic(
        code(attendly::role_denied),
        help("Log in with an account that has the required role.")
    )]
    RoleDenied { role: String, section: String },

    // ── Resources ────────────────────────────────────────────────────
    #[error("{resource_type} '{identifier}' not found")]
    #[diagnostic(
        code(attendly::not_found),
        help("Run: attendly {list_command} to see available entries")
    )]
    NotFound {
        resource_type: String,
        identifier: String,
        list_command: String,
    },

    // ── API ──────────────────────────────────────────────────────────
    #[error("Backend rejected the request ({status}): {message}")]
    #[diagnostic(code(attendly::api_error))]
    Api { status: u16, message: String },

    #[error("Unexpected response from the backend: {message}")]
    #[diagnostic(
        code(attendly::bad_response),
        help("The backend may be a different version than this CLI expects.")
    )]
    BadResponse { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(attendly::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("No backend base URL configured")]
    #[diagnostic(
        code(attendly::no_config),
        help(
            "Create a config with: attendly config init\n\
             Expected at: {path}"
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(attendly::config))]
    Config(Box<figment::Error>),

    // ── Interactive ──────────────────────────────────────────────────
    #[error("Destructive operation '{action}' requires confirmation")]
    #[diagnostic(
        code(attendly::confirmation_required),
        help("Use --yes (-y) to skip confirmation in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::Tls { .. } => exit_code::CONNECTION,
            Self::AuthRequired | Self::AuthFailed { .. } => exit_code::AUTH,
            Self::RoleDenied { .. } => exit_code::PERMISSION,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::NotAuthenticated => CliError::AuthRequired,

            CoreError::Validation { message } => CliError::Validation {
                field: "input".into(),
                reason: message,
            },

            CoreError::Api(api) => from_api_error(api),
        }
    }
}

fn from_api_error(err: attendly_core::ApiError) -> CliError {
    use attendly_core::ApiError;

    match err {
        ApiError::Authentication { message } => CliError::AuthFailed { message },

        ApiError::Api { status, message } => CliError::Api { status, message },

        ApiError::Transport(source) => CliError::ConnectionFailed {
            source: Box::new(source),
        },

        ApiError::InvalidUrl(source) => CliError::Validation {
            field: "base-url".into(),
            reason: source.to_string(),
        },

        ApiError::Tls(reason) => CliError::Tls { reason },

        ApiError::Deserialization { message, body: _ } => CliError::BadResponse { message },
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<attendly_config::ConfigError> for CliError {
    fn from(err: attendly_config::ConfigError) -> Self {
        use attendly_config::ConfigError;

        match err {
            ConfigError::MissingBaseUrl { path } => CliError::NoConfig { path },
            ConfigError::InvalidBaseUrl { value, source } => CliError::Validation {
                field: "base_url".into(),
                reason: format!("{value}: {source}"),
            },
            ConfigError::Load(e) => CliError::Config(e),
            ConfigError::Io { source, .. } => CliError::Io(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_follow_the_contract() {
        assert_eq!(CliError::AuthRequired.exit_code(), exit_code::AUTH);
        assert_eq!(
            CliError::RoleDenied {
                role: "admin".into(),
                section: "Configure".into(),
            }
            .exit_code(),
            exit_code::PERMISSION
        );
        assert_eq!(
            CliError::NotFound {
                resource_type: "employee".into(),
                identifier: "E1".into(),
                list_command: "employees list".into(),
            }
            .exit_code(),
            exit_code::NOT_FOUND
        );
        assert_eq!(
            CliError::Api {
                status: 500,
                message: "boom".into(),
            }
            .exit_code(),
            exit_code::GENERAL
        );
    }

    #[test]
    fn not_authenticated_maps_to_auth_required() {
        let cli: CliError = attendly_core::CoreError::NotAuthenticated.into();
        assert!(matches!(cli, CliError::AuthRequired));
    }
}
