// Employee photo endpoints
//
// Photo listing returns URLs; deletion is addressed by bare filename
// (a form field), not by URL: the backend resolves it inside the
// employee's photo directory.

use reqwest::multipart::Form;
use tracing::debug;

use crate::client::ApiClient;
use crate::employees::PhotoUpload;
use crate::error::Error;
use crate::models::{AddedPhotoEnvelope, PhotoListEnvelope};

impl ApiClient {
    /// List an employee's photo URLs: `GET /employee/photos/{id}`.
    pub async fn list_photos(&self, empid: &str) -> Result<Vec<String>, Error> {
        let url = self.api_url(&format!("employee/photos/{empid}"))?;
        debug!(empid, "listing photos");
        let envelope: PhotoListEnvelope = self.get(url).await?;
        Ok(envelope.urls)
    }

    /// Upload a photo: `POST /employee/addphoto/{id}` (multipart).
    /// Returns the URL of the stored photo.
    pub async fn add_photo(&self, empid: &str, photo: PhotoUpload) -> Result<String, Error> {
        let url = self.api_url(&format!("employee/addphoto/{empid}"))?;
        debug!(empid, file = %photo.file_name, "adding photo");
        let form = Form::new().part("file", photo.into_part());
        let envelope: AddedPhotoEnvelope = self.post_multipart(url, form).await?;
        Ok(envelope.photo_url)
    }

    /// Delete a photo by filename: `POST /employee/deletephoto/{id}`
    /// with a `file=<filename>` form field.
    pub async fn delete_photo(&self, empid: &str, file_name: &str) -> Result<(), Error> {
        let url = self.api_url(&format!("employee/deletephoto/{empid}"))?;
        debug!(empid, file_name, "deleting photo");
        let form = Form::new().text("file", file_name.to_owned());
        let _: serde_json::Value = self.post_multipart(url, form).await?;
        Ok(())
    }
}
