// Session endpoints
//
// Cookie-based login/logout/probe. The login endpoints are
// form-encoded (OAuth2 password form on the backend) and set a session
// cookie in the client's jar; subsequent requests use it automatically.

use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::UserRecord;

impl ApiClient {
    /// Probe the current session: `GET /getme`.
    ///
    /// Succeeds with the session's user object when a valid cookie is
    /// present. The backend's `"Authentication failed"` or
    /// `"Not authenticated"` detail means "no session": callers decide
    /// whether that is an error worth surfacing; see
    /// [`Error::is_unauthenticated`].
    pub async fn get_me(&self) -> Result<UserRecord, Error> {
        let url = self.api_url("getme")?;
        debug!("probing session");
        self.get(url).await
    }

    /// Admin login: `POST /login` with form-encoded `username`/`password`.
    ///
    /// On success the session cookie lands in the jar and the backend
    /// returns the admin's user object.
    pub async fn login_admin(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<UserRecord, Error> {
        let url = self.api_url("login")?;
        debug!(username, "admin login");
        self.post_form(url, &[("username", username), ("password", password.expose_secret())])
            .await
    }

    /// Employee login: `POST /employee/login` with form-encoded
    /// `empid`/`password`.
    pub async fn login_employee(
        &self,
        empid: &str,
        password: &SecretString,
    ) -> Result<UserRecord, Error> {
        let url = self.api_url("employee/login")?;
        debug!(empid, "employee login");
        self.post_form(url, &[("empid", empid), ("password", password.expose_secret())])
            .await
    }

    /// End the current session: `POST /logout`.
    pub async fn logout(&self) -> Result<(), Error> {
        let url = self.api_url("logout")?;
        debug!("logging out");
        let _: serde_json::Value = self.post_empty(url).await?;
        Ok(())
    }

    /// Change an admin's password: `POST /admin/change-password`.
    pub async fn change_admin_password(
        &self,
        username: &str,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<(), Error> {
        let url = self.api_url("admin/change-password")?;
        debug!(username, "admin password change");
        let _: serde_json::Value = self
            .post_form(
                url,
                &[
                    ("username", username),
                    ("old_password", old_password.expose_secret()),
                    ("new_password", new_password.expose_secret()),
                ],
            )
            .await?;
        Ok(())
    }

    /// Change an employee's password: `POST /employee/change-password`.
    pub async fn change_employee_password(
        &self,
        empid: &str,
        old_password: &SecretString,
        new_password: &SecretString,
    ) -> Result<(), Error> {
        let url = self.api_url("employee/change-password")?;
        debug!(empid, "employee password change");
        let _: serde_json::Value = self
            .post_form(
                url,
                &[
                    ("empid", empid),
                    ("old_password", old_password.expose_secret()),
                    ("new_password", new_password.expose_secret()),
                ],
            )
            .await?;
        Ok(())
    }
}
