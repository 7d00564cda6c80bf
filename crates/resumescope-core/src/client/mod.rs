//! HTTP client for the remote analysis backend.
//!
//! The backend is opaque: uploads go out as multipart forms and whatever
//! JSON comes back is returned untouched for the normalizer to deal with.
//! No retry and no default timeout; a hung request waits until the
//! configured timeout, if any.

pub mod config;

use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub use config::ClientConfig;

use crate::upload::read::ResumeArtifact;

/// Multipart field carrying the resume.
const UPLOAD_FIELD: &str = "file";

/// Body of the contact form endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid backend URL {url:?}: must start with http:// or https://")]
    InvalidBaseUrl { url: String },

    #[error("failed to build HTTP client")]
    Build(#[source] reqwest::Error),

    #[error("request to {url} failed")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("invalid content type {content_type:?}")]
    InvalidContentType {
        content_type: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Backend error: {status}")]
    Status { status: u16, body: String },

    #[error("backend returned a body that is not JSON")]
    Decode(#[from] serde_json::Error),
}

pub struct BackendClient {
    client: reqwest::Client,
    config: ClientConfig,
}

impl BackendClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(ClientError::Build)?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Uploads a resume and returns the raw analysis payload.
    pub async fn analyze_resume(&self, resume: &ResumeArtifact) -> Result<Value, ClientError> {
        let url = self.config.endpoint(&self.config.upload_path);

        let part = Part::bytes(resume.bytes.clone())
            .file_name(resume.file_name.clone())
            .mime_str(&resume.content_type)
            .map_err(|source| ClientError::InvalidContentType {
                content_type: resume.content_type.clone(),
                source,
            })?;
        let form = Form::new().part(UPLOAD_FIELD, part);

        tracing::info!(
            url = %url,
            file = %resume.file_name,
            size_bytes = resume.size_bytes,
            "uploading resume for analysis"
        );

        let request = self.client.post(&url).multipart(form);
        self.send(&url, request).await
    }

    /// Posts the contact form and logs the reply.
    pub async fn send_contact(&self, message: &ContactMessage) -> Result<Value, ClientError> {
        let url = self.config.endpoint(&self.config.contact_path);
        tracing::info!(url = %url, "sending contact message");

        let request = self.client.post(&url).json(message);
        let response = self.send(&url, request).await?;

        tracing::info!(response = %response, "contact endpoint replied");
        Ok(response)
    }

    /// Probes the backend health endpoint.
    pub async fn health(&self) -> Result<Value, ClientError> {
        let url = self.config.endpoint(&self.config.health_path);
        tracing::debug!(url = %url, "checking backend health");

        let request = self.client.get(&url);
        self.send(&url, request).await
    }

    async fn send(
        &self,
        url: &str,
        request: reqwest::RequestBuilder,
    ) -> Result<Value, ClientError> {
        let transport = |source| ClientError::Transport {
            url: url.to_string(),
            source,
        };

        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        tracing::trace!(url, status = %status, "backend responded");

        let body = response.text().await.map_err(transport)?;

        if !status.is_success() {
            tracing::error!(url, status = %status, body = %body, "backend returned an error status");
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        tracing::debug!(url, body = %body, "raw backend response");
        Ok(serde_json::from_str(&body)?)
    }
}
