use thiserror::Error;

/// Error type for console operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Backend or transport failure, passed through from the API layer.
    #[error(transparent)]
    Api(#[from] attendly_api::Error),

    /// Client-side validation failure. Never reaches the network.
    #[error("{message}")]
    Validation { message: String },

    /// Operation requires an authenticated session.
    #[error("not logged in: run `attendly login` first")]
    NotAuthenticated,
}

impl CoreError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}
