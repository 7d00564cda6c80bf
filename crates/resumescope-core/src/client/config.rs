use std::time::Duration;

use crate::DEFAULT_BACKEND_URL;
use crate::client::ClientError;

/// Where the backend lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    pub upload_path: String,
    pub contact_path: String,
    pub health_path: String,
    /// `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BACKEND_URL.to_string(),
            upload_path: "/upload".to_string(),
            contact_path: "/send_email".to_string(),
            health_path: "/health".to_string(),
            timeout: None,
        }
    }
}

impl ClientConfig {
    /// Default paths against a custom backend.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let trimmed = base_url.trim();
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(ClientError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }

        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
            ..Self::default()
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
