// Admin account endpoints
//
// The create response is an array whose first element is the created
// record; callers append it to their local list rather than refetching.

use secrecy::{ExposeSecret, SecretString};
use serde_json::json;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::Admin;

impl ApiClient {
    /// List admin accounts: `GET /admin`.
    pub async fn list_admins(&self) -> Result<Vec<Admin>, Error> {
        let url = self.api_url("admin")?;
        debug!("listing admins");
        self.get(url).await
    }

    /// Create an admin account: `POST /admin`.
    ///
    /// Returns the created record (first element of the response array).
    pub async fn add_admin(
        &self,
        username: &str,
        password: &SecretString,
    ) -> Result<Admin, Error> {
        let url = self.api_url("admin")?;
        debug!(username, "adding admin");
        let created: Vec<Admin> = self
            .post_json(
                url,
                &json!({
                    "username": username,
                    "password": password.expose_secret(),
                }),
            )
            .await?;
        created.into_iter().next().ok_or(Error::Deserialization {
            message: "create-admin response was an empty array".into(),
            body: String::new(),
        })
    }

    /// Delete an admin account: `DELETE /admin/{id}`.
    pub async fn delete_admin(&self, id: i64) -> Result<(), Error> {
        let url = self.api_url(&format!("admin/{id}"))?;
        debug!(id, "deleting admin");
        let _: serde_json::Value = self.delete(url).await?;
        Ok(())
    }
}
