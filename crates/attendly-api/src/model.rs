// Recognition model lifecycle endpoints
//
// Start/stop/status of the recognition pipeline and the
// embedding-generation job. Status is a point-in-time read; there is
// no push channel and no polling, so a long embedding run can leave
// the last-read status stale.

use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::models::{EmbeddingRun, ModelMessageEnvelope, ModelState, ModelStatusEnvelope};

impl ApiClient {
    /// Start the recognition pipeline: `POST /model/start`.
    /// Returns the backend's confirmation message.
    pub async fn start_model(&self) -> Result<String, Error> {
        let url = self.api_url("model/start")?;
        debug!("starting model");
        let envelope: ModelMessageEnvelope = self.post_empty(url).await?;
        Ok(envelope
            .message
            .unwrap_or_else(|| "Model started successfully".into()))
    }

    /// Stop the recognition pipeline: `POST /model/stop`.
    pub async fn stop_model(&self) -> Result<String, Error> {
        let url = self.api_url("model/stop")?;
        debug!("stopping model");
        let envelope: ModelMessageEnvelope = self.post_empty(url).await?;
        Ok(envelope
            .message
            .unwrap_or_else(|| "Model stopped successfully".into()))
    }

    /// Regenerate face embeddings for all employees:
    /// `POST /model/generate-embeddings`. Returns the job's log lines.
    pub async fn generate_embeddings(&self) -> Result<Vec<String>, Error> {
        let url = self.api_url("model/generate-embeddings")?;
        debug!("generating embeddings");
        let run: EmbeddingRun = self.post_empty(url).await?;
        if run.logs.is_empty() {
            Ok(vec!["Embeddings generated.".into()])
        } else {
            Ok(run.logs)
        }
    }

    /// Read the pipeline status: `GET /model/status`.
    pub async fn model_status(&self) -> Result<ModelState, Error> {
        let url = self.api_url("model/status")?;
        debug!("checking model status");
        let envelope: ModelStatusEnvelope = self.get(url).await?;
        Ok(envelope.status.unwrap_or(ModelState::Stopped))
    }
}
