use thiserror::Error;

/// Backend sentinel detail for "no valid session cookie". The session
/// probe treats exactly these as expected, not as a failure to
/// surface. Any other message, a 401 with an unexpected detail
/// included, is shown to the user verbatim.
const UNAUTHENTICATED_SENTINELS: [&str; 2] = ["Authentication failed", "Not authenticated"];

/// Top-level error type for the `attendly-api` crate.
///
/// Covers every failure mode of the backend surface: authentication,
/// transport, API-level rejections, and response decoding.
/// `attendly-core` maps these into store error fields and the CLI maps
/// them into user-facing diagnostics.
#[derive(Debug, Error)]
pub enum Error {
    /// Login rejected or session missing/expired (HTTP 401).
    /// Carries the backend's `detail` message verbatim.
    #[error("{message}")]
    Authentication { message: String },

    /// Non-401 rejection from the backend, with the `detail` message
    /// parsed from the response body (or a generic `HTTP <status>`
    /// fallback when the body carries none).
    #[error("{message}")]
    Api { status: u16, message: String },

    /// HTTP transport error (connection refused, DNS failure, timeout).
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or certificate error.
    #[error("TLS error: {0}")]
    Tls(String),

    /// JSON deserialization failed, with the raw body for debugging.
    #[error("Unexpected response shape: {message}")]
    Deserialization { message: String, body: String },
}

impl Error {
    /// Returns `true` for the "no authenticated session" outcome the
    /// startup probe deliberately suppresses: a backend detail equal to
    /// one of the known sentinels, whatever the status. A 401 carrying
    /// any other detail (an expired token, say) is a real failure.
    pub fn is_unauthenticated(&self) -> bool {
        match self {
            Self::Authentication { message } | Self::Api { message, .. } => {
                UNAUTHENTICATED_SENTINELS.iter().any(|s| s == message)
            }
            _ => false,
        }
    }

    /// The message to store in a slice's `error` field: the backend
    /// `detail` verbatim where one exists, otherwise the Display form.
    pub fn detail(&self) -> String {
        match self {
            Self::Authentication { message } | Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_detail_is_unauthenticated() {
        let err = Error::Api {
            status: 403,
            message: "Authentication failed".into(),
        };
        assert!(err.is_unauthenticated());
    }

    #[test]
    fn sentinel_401_is_unauthenticated() {
        let err = Error::Authentication {
            message: "Not authenticated".into(),
        };
        assert!(err.is_unauthenticated());
    }

    #[test]
    fn non_sentinel_401_is_a_real_failure() {
        let err = Error::Authentication {
            message: "Token expired".into(),
        };
        assert!(!err.is_unauthenticated());
        assert_eq!(err.detail(), "Token expired");
    }

    #[test]
    fn other_api_errors_are_not() {
        let err = Error::Api {
            status: 500,
            message: "database unavailable".into(),
        };
        assert!(!err.is_unauthenticated());
        assert_eq!(err.detail(), "database unavailable");
    }
}
