use anyhow::anyhow;
use async_trait::async_trait;
use model::lead::LeadChange;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ForwarderError {
    #[error("{0:#}")]
    Unknown(#[source] anyhow::Error),
}

impl From<reqwest::Error> for ForwarderError {
    fn from(e: reqwest::Error) -> Self {
        Self::Unknown(anyhow!(e))
    }
}

/// Status and body read back from the downstream endpoint.
#[derive(Clone, Debug)]
pub struct ForwardResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Relays the extracted `changes` sequence to the downstream consumer.
#[async_trait]
pub trait LeadForwarder {
    async fn forward(&self, changes: &[LeadChange]) -> Result<ForwardResponse, ForwarderError>;
}

pub struct HttpLeadForwarder {
    destination_url: String,
}

impl HttpLeadForwarder {
    pub fn new(destination_url: String) -> Self {
        Self { destination_url }
    }
}

#[async_trait]
impl LeadForwarder for HttpLeadForwarder {
    /// Sends the changes over a fresh connection, one per invocation. The
    /// full response is read so the caller can log what the consumer said.
    async fn forward(&self, changes: &[LeadChange]) -> Result<ForwardResponse, ForwarderError> {
        let response = reqwest::Client::new()
            .post(&self.destination_url)
            .json(&changes)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        tracing::info!(status = %status, "Forwarding response: {status}");
        tracing::info!(body = %body, "Response body: {body}");

        Ok(ForwardResponse { status, body })
    }
}
