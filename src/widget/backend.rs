// ── Backend Transport ──────────────────────────────────────────────────────
// The widget's only network dependency, behind a trait so tests can swap in
// a scripted double. The HTTP implementation speaks the gateway's wire
// contract: POST {message, history} in, {reply}/{error} out.

use crate::error::ChatResult;
use crate::types::{GatewayReply, TranscriptEntry};
use async_trait::async_trait;
use serde_json::json;

#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Send one chat turn: the current message plus the full transcript
    /// (which already contains that message as its last user turn).
    async fn send(&self, message: &str, history: &[TranscriptEntry]) -> ChatResult<GatewayReply>;
}

pub struct HttpBackend {
    client: reqwest::Client,
    url: String,
}

impl HttpBackend {
    pub fn new(url: impl Into<String>) -> Self {
        HttpBackend { client: reqwest::Client::new(), url: url.into() }
    }
}

#[async_trait]
impl ChatBackend for HttpBackend {
    async fn send(&self, message: &str, history: &[TranscriptEntry]) -> ChatResult<GatewayReply> {
        let response = self
            .client
            .post(&self.url)
            .json(&json!({"message": message, "history": history}))
            .send()
            .await?;

        // Non-2xx bodies still carry an {error} field the reply policy
        // inspects, so the status is deliberately not checked here.
        Ok(response.json().await?)
    }
}
