use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Carries a serialized SOAP envelope to the vendor and returns the raw reply body.
///
/// Implementations must return the body even for non-2xx statuses: the vendor
/// reports SOAP faults with HTTP 500.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn post(&self, url: &str, body: String) -> Result<String>;
}

pub type TransportRef = Arc<dyn Transport>;
