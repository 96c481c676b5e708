//! Shared helpers for command handlers.

use std::path::Path;

use attendly_core::{Console, PhotoUpload, Role, RouteId, Session, ShellState};
use secrecy::SecretString;

use crate::error::CliError;

/// Run the startup session probe and require an authenticated session.
///
/// Returns the established session (with derived role) or the
/// actionable `AuthRequired` error when no saved session is valid.
pub async fn establish_session(console: &Console) -> Result<Session, CliError> {
    if console.boot().await != ShellState::Authenticated {
        // An unexpected probe failure (backend down, TLS) is more
        // useful than a bare "not logged in".
        if let Some(message) = console.session().error {
            return Err(CliError::ProbeFailed { message });
        }
        return Err(CliError::AuthRequired);
    }
    Ok(console.session())
}

/// Advisory role gate mirroring the console navigation: the backend
/// still authorizes every call, this just fails fast with a clearer
/// message.
pub fn require_route(session: &Session, route: RouteId) -> Result<(), CliError> {
    let role = session.role.ok_or(CliError::AuthRequired)?;
    if role.allows(route) {
        return Ok(());
    }
    Err(CliError::RoleDenied {
        role: role.to_string(),
        section: route.to_string(),
    })
}

/// The role of the current session, for handlers that branch on it.
pub fn session_role(session: &Session) -> Result<Role, CliError> {
    session.role.ok_or(CliError::AuthRequired)
}

/// Prompt for confirmation, auto-approving if `--yes` was passed.
pub fn confirm(message: &str, yes_flag: bool) -> Result<bool, CliError> {
    if yes_flag {
        return Ok(true);
    }
    let confirmed = dialoguer::Confirm::new()
        .with_prompt(message)
        .default(false)
        .interact()
        .map_err(|e| CliError::Io(std::io::Error::other(e)))?;
    Ok(confirmed)
}

/// Map a dialoguer / interactive I/O failure into CliError.
pub fn prompt_err(e: impl std::fmt::Display) -> CliError {
    CliError::Validation {
        field: "interactive".into(),
        reason: format!("prompt failed: {e}"),
    }
}

/// Prompt for a password without echo.
pub fn prompt_password(prompt: &str) -> Result<SecretString, CliError> {
    let pass = rpassword::prompt_password(prompt).map_err(prompt_err)?;
    if pass.is_empty() {
        return Err(CliError::Validation {
            field: "password".into(),
            reason: "password cannot be empty".into(),
        });
    }
    Ok(SecretString::from(pass))
}

/// Read an image file into a photo upload part.
pub fn read_photo(path: &Path) -> Result<PhotoUpload, CliError> {
    let bytes = std::fs::read(path)?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| CliError::Validation {
            field: "photo".into(),
            reason: format!("{} has no file name", path.display()),
        })?;
    Ok(PhotoUpload { file_name, bytes })
}
