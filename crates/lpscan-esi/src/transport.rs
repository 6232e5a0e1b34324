use crate::errors::{EsiError, Result};
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// Default request timeout. ESI applies no timeout of its own, so the
/// client picks a sane bound.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A single-shot JSON GET against the ESI API.
///
/// The client is generic over this trait so tests can substitute a canned
/// transport and drive the whole pipeline without network access.
#[async_trait]
pub trait EsiTransport: Send + Sync {
    async fn get_json(&self, url: &str) -> Result<Value>;
}

/// reqwest-backed transport used in production. No retries, no redirect
/// handling beyond reqwest defaults.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl EsiTransport for HttpTransport {
    async fn get_json(&self, url: &str) -> Result<Value> {
        debug!("HTTP GET request to: {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            error!("GET request failed: {:?}", e);
            EsiError::Request(e)
        })?;

        let status = response.status();
        debug!("Response status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!("Request failed with status: {}", status);
            return Err(EsiError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                message,
            });
        }

        let body = response.json().await.map_err(EsiError::Request)?;
        Ok(body)
    }
}
