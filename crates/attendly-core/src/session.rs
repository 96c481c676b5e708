//! Authentication state and role derivation.
//!
//! The backend does not put a role in the session payload; the role is
//! inferred client-side from the shape of the user object. The
//! heuristic is fragile by admission (see `Role::derive`) but it is
//! the contract the backend currently offers, so it lives here in one
//! place with the derivation order spelled out.

use attendly_api::{Error as ApiError, UserRecord};
use serde::{Deserialize, Serialize};
use strum::Display;

/// The reserved admin username that unlocks the Configure and Admins
/// views. Distinguished solely by string equality.
pub const SUPERUSER_NAME: &str = "superuser";

/// Minimum accepted password length for client-side validation.
const MIN_PASSWORD_LEN: usize = 8;

/// The role a session acts under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Employee,
    Admin,
    Superuser,
}

impl Role {
    /// Derive the role from a user payload. Order matters:
    ///
    /// 1. an `empid` field means an employee session, regardless of
    ///    anything else on the object;
    /// 2. otherwise the reserved username means superuser;
    /// 3. otherwise it is a regular admin.
    pub fn derive(user: &UserRecord) -> Self {
        if user.empid.is_some() {
            Self::Employee
        } else if user.username.as_deref() == Some(SUPERUSER_NAME) {
            Self::Superuser
        } else {
            Self::Admin
        }
    }
}

/// Authentication state. Replaced wholesale on probe/login/logout.
///
/// Invariant: `role` is `Some` iff `user` is `Some`; the two are only
/// ever written together.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub authenticated: bool,
    pub user: Option<UserRecord>,
    pub role: Option<Role>,
    pub loading: bool,
    pub error: Option<String>,
}

impl Session {
    /// A probe/login request went out.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Probe or login succeeded: install the user and derive the role.
    pub fn establish(&mut self, user: UserRecord) {
        self.loading = false;
        self.authenticated = true;
        self.role = Some(Role::derive(&user));
        self.user = Some(user);
    }

    /// The session probe failed.
    ///
    /// The expected-unauthenticated outcome (no valid cookie) is
    /// silent: the user simply isn't logged in, which is not a
    /// user-facing failure. Every other reason: network down, server
    /// error: is surfaced. This asymmetry is deliberate.
    pub fn reject_probe(&mut self, err: &ApiError) {
        self.clear();
        if !err.is_unauthenticated() {
            self.error = Some(err.detail());
        }
    }

    /// A login attempt failed: clear the session, surface the message.
    pub fn reject_login(&mut self, err: &ApiError) {
        self.clear();
        self.error = Some(err.detail());
    }

    /// Logout completed. The session is cleared on both paths; a failed
    /// logout call only differs in keeping the error message around.
    pub fn finish_logout(&mut self, result: Result<(), &ApiError>) {
        self.clear();
        if let Err(err) = result {
            self.error = Some(err.detail());
        }
    }

    fn clear(&mut self) {
        self.loading = false;
        self.authenticated = false;
        self.user = None;
        self.role = None;
        self.error = None;
    }
}

/// Password-reset status, independent of the main session flags -
/// resetting a password does not itself change the session.
#[derive(Debug, Clone, Default)]
pub struct PasswordReset {
    pub loading: bool,
    pub success: bool,
    pub error: Option<String>,
}

impl PasswordReset {
    pub fn begin(&mut self) {
        self.loading = true;
        self.success = false;
        self.error = None;
    }

    pub fn succeed(&mut self) {
        self.loading = false;
        self.success = true;
    }

    pub fn fail(&mut self, err: &ApiError) {
        self.loading = false;
        self.success = false;
        self.error = Some(err.detail());
    }
}

/// Client-side validation for a password change. Runs before any
/// request is dispatched; a failure here never reaches the network.
pub fn validate_new_password(new: &str, confirm: &str) -> Result<(), String> {
    if new.is_empty() {
        return Err("new password is required".into());
    }
    if new.len() < MIN_PASSWORD_LEN {
        return Err(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        ));
    }
    if new != confirm {
        return Err("passwords do not match".into());
    }
    Ok(())
}
