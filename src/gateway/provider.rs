// ── Gemini Provider Client ─────────────────────────────────────────────────
// Thin client for the Google generative-language `generateContent` call.
// Built once at startup, read-only afterwards; one request per chat turn,
// no retries and no streaming.

use crate::error::{ChatError, ChatResult};
use crate::types::HistoryEntry;
use log::{error, info};
use reqwest::Client;
use serde_json::{json, Value};

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Fixed sampling configuration for every call.
const TEMPERATURE: f64 = 0.6;
const TOP_P: f64 = 0.9;

/// Instruction prepended as the first turn of every composed conversation.
pub const SYSTEM_PROMPT: &str =
    "Você é um assistente do portfólio do Gabriel Menezes. Responda em português, \
     seja objetivo e cordial.";

/// Substitute when the provider answers with no extractable text.
pub const NO_REPLY: &str = "Sem resposta.";

pub struct GeminiClient {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        GeminiClient {
            client: Client::new(),
            base_url: GEMINI_BASE_URL.to_string(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Active model name (already allow-list validated by the config layer).
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Project one chat turn into the provider's `contents` shape:
    /// system instruction first, then the translated history, then the
    /// current message as the final user turn.
    ///
    /// History entries missing a role or content are dropped; `assistant`
    /// (or an already-native `model`) maps to `model`, anything else to
    /// `user`. Order is preserved. The input is never mutated — the
    /// projection is rebuilt per call.
    pub fn compose_contents(history: &[HistoryEntry], message: &str) -> Vec<Value> {
        let mut contents = vec![json!({
            "role": "user",
            "parts": [{"text": SYSTEM_PROMPT}],
        })];

        for entry in history {
            if entry.role.is_empty() || entry.content.is_empty() {
                continue;
            }
            let role = match entry.role.as_str() {
                "assistant" | "model" => "model",
                _ => "user",
            };
            contents.push(json!({
                "role": role,
                "parts": [{"text": entry.content}],
            }));
        }

        contents.push(json!({
            "role": "user",
            "parts": [{"text": message}],
        }));

        contents
    }

    /// One `generateContent` call. Returns the extracted reply text, or a
    /// provider error carrying the remote HTTP status when the API refuses.
    pub async fn generate(&self, contents: Vec<Value>) -> ChatResult<String> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url.trim_end_matches('/'),
            self.model,
            self.api_key
        );

        let body = json!({
            "contents": contents,
            "generationConfig": {
                "temperature": TEMPERATURE,
                "topP": TOP_P,
            },
        });

        info!("[provider] Gemini request model={}", self.model);

        let response = self.client.post(&url).json(&body).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body_text = response.text().await.unwrap_or_default();
            let detail: String = body_text.chars().take(500).collect();
            error!("[provider] Gemini error {}: {}", status, detail);
            return Err(ChatError::provider(status, format!("API error {}", status)));
        }

        let parsed: Value = response.json().await?;
        Ok(Self::extract_reply(&parsed))
    }

    /// First candidate's first text part, or the fixed "no response" string.
    fn extract_reply(response: &Value) -> String {
        response["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .filter(|t| !t.is_empty())
            .unwrap_or(NO_REPLY)
            .to_string()
    }
}
