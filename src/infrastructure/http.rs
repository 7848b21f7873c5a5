use crate::domain::ports::Transport;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Identity};
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// HTTPS transport backed by a pooled `reqwest` client.
///
/// When a PEM bundle (certificate plus private key) is supplied it is presented
/// as the TLS client identity, which is how certificate-based API credentials
/// authenticate.
#[derive(Clone)]
pub struct HttpTransport {
    client: Client,
    timeout_secs: u64,
}

impl HttpTransport {
    pub fn new(pem: Option<&str>, timeout_secs: u64) -> Result<Self> {
        let mut builder = Client::builder().timeout(Duration::from_secs(timeout_secs));

        if let Some(pem) = pem.filter(|pem| !pem.trim().is_empty()) {
            builder = builder.identity(Identity::from_pem(pem.as_bytes())?);
        }

        Ok(Self {
            client: builder.build()?,
            timeout_secs,
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn post(&self, url: &str, body: String) -> Result<String> {
        debug!(url, bytes = body.len(), "Posting SOAP request");

        let response = self
            .client
            .post(url)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    GatewayError::Timeout(self.timeout_secs)
                } else {
                    GatewayError::Transport(e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            // Faults come back as 500 with a SOAP body, so the body is still parsed.
            warn!(%status, url, "Gateway answered with a non-success status");
        }

        let text = response.text().await.map_err(|e| {
            if e.is_timeout() {
                GatewayError::Timeout(self.timeout_secs)
            } else {
                GatewayError::Transport(e)
            }
        })?;
        debug!(%status, bytes = text.len(), "Received SOAP response");
        Ok(text)
    }
}
