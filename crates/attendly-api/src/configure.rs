// Camera configuration endpoints
//
// Entrance/exit RTSP URLs, plus the `/stream` preview proxy the
// backend exposes for checking a camera feed before saving it.

use tracing::debug;
use url::Url;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::CameraConfig;

impl ApiClient {
    /// Fetch the camera configuration: `GET /configure`.
    pub async fn get_configuration(&self) -> Result<CameraConfig, Error> {
        let url = self.api_url("configure")?;
        debug!("fetching camera configuration");
        self.get(url).await
    }

    /// Save the camera configuration: `POST /configure` with
    /// `{camera_enter, camera_exit}`.
    pub async fn save_configuration(&self, config: &CameraConfig) -> Result<(), Error> {
        let url = self.api_url("configure")?;
        debug!("saving camera configuration");
        let _: serde_json::Value = self.post_json(url, config).await?;
        Ok(())
    }

    /// Build the preview URL for a camera feed: `GET /stream?url=<rtsp>`.
    ///
    /// The backend transcodes the RTSP source into an image stream; the
    /// returned URL is handed to whatever renders it (browser, `ffplay`,
    /// mpv). No request is issued here.
    pub fn stream_url(&self, rtsp_url: &str) -> Result<Url, Error> {
        let mut url = self.api_url("stream")?;
        url.query_pairs_mut().append_pair("url", rtsp_url);
        Ok(url)
    }
}
