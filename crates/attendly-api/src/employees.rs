// Employee CRUD endpoints
//
// List/get responses come wrapped in `{"employees": ...}` /
// `{"employee": ...}` envelopes; create and update are multipart forms
// because they can carry a photo file alongside the text fields.

use reqwest::multipart::{Form, Part};
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{
    CreatedEmployee, Employee, EmployeeEnvelope, EmployeeListEnvelope, UpdatedEmployeeEnvelope,
};

/// A photo to upload: filename plus raw bytes.
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl PhotoUpload {
    pub(crate) fn into_part(self) -> Part {
        Part::bytes(self.bytes).file_name(self.file_name)
    }
}

impl ApiClient {
    /// List all employees: `GET /employee`.
    pub async fn list_employees(&self) -> Result<Vec<Employee>, Error> {
        let url = self.api_url("employee")?;
        debug!("listing employees");
        let envelope: EmployeeListEnvelope = self.get(url).await?;
        Ok(envelope.employees)
    }

    /// Fetch a single employee by empid: `GET /employee/{id}`.
    pub async fn get_employee(&self, empid: &str) -> Result<Employee, Error> {
        let url = self.api_url(&format!("employee/{empid}"))?;
        debug!(empid, "fetching employee");
        let envelope: EmployeeEnvelope = self.get(url).await?;
        Ok(envelope.employee)
    }

    /// Create an employee: `POST /employee` (multipart).
    ///
    /// The response carries the backend-generated one-time password -
    /// the only moment it is ever visible.
    pub async fn create_employee(
        &self,
        empid: &str,
        name: &str,
        email: &str,
        photo: Option<PhotoUpload>,
    ) -> Result<CreatedEmployee, Error> {
        let url = self.api_url("employee")?;
        debug!(empid, "creating employee");
        let mut form = Form::new()
            .text("empid", empid.to_owned())
            .text("name", name.to_owned())
            .text("email", email.to_owned());
        if let Some(photo) = photo {
            form = form.part("file", photo.into_part());
        }
        self.post_multipart(url, form).await
    }

    /// Update an employee: `PUT /employee/{id}` (multipart).
    ///
    /// `empid` in the form may differ from the path id: that re-keys
    /// the employee, and the caller must switch to the new identifier
    /// afterwards (routes are keyed by empid).
    pub async fn update_employee(
        &self,
        id: &str,
        empid: &str,
        name: &str,
        email: &str,
        password: Option<&SecretString>,
    ) -> Result<Employee, Error> {
        let url = self.api_url(&format!("employee/{id}"))?;
        debug!(id, empid, "updating employee");
        let mut form = Form::new()
            .text("empid", empid.to_owned())
            .text("name", name.to_owned())
            .text("email", email.to_owned());
        if let Some(password) = password {
            form = form.text("password", password.expose_secret().to_owned());
        }
        let envelope: UpdatedEmployeeEnvelope = self.put_multipart(url, form).await?;
        Ok(envelope.emp)
    }

    /// Delete an employee: `DELETE /employee/{id}`.
    pub async fn delete_employee(&self, empid: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("employee/{empid}"))?;
        debug!(empid, "deleting employee");
        let _: serde_json::Value = self.delete(url).await?;
        Ok(())
    }
}
