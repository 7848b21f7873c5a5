use crate::domain::ports::Transport;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
pub enum StubReply {
    Body(String),
    Timeout,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: String,
}

/// An in-process transport that replays queued replies and records every request.
///
/// Clones share the same queues, so a test can keep a handle after handing the
/// transport to a gateway.
#[derive(Default, Clone)]
pub struct StubTransport {
    replies: Arc<RwLock<VecDeque<StubReply>>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl StubTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_replies<I, S>(bodies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let replies = bodies.into_iter().map(|b| StubReply::Body(b.into())).collect();
        Self {
            replies: Arc::new(RwLock::new(replies)),
            requests: Arc::default(),
        }
    }

    pub async fn push_reply(&self, reply: StubReply) {
        self.replies.write().await.push_back(reply);
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }

    pub async fn request_count(&self) -> usize {
        self.requests.read().await.len()
    }
}

#[async_trait]
impl Transport for StubTransport {
    async fn post(&self, url: &str, body: String) -> Result<String> {
        self.requests.write().await.push(RecordedRequest {
            url: url.to_string(),
            body,
        });

        match self.replies.write().await.pop_front() {
            Some(StubReply::Body(body)) => Ok(body),
            Some(StubReply::Timeout) => Err(GatewayError::Timeout(0)),
            None => Err(GatewayError::Protocol(
                "Stub transport has no reply queued".to_string(),
            )),
        }
    }
}
