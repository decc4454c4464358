// ── Pure Data Types ────────────────────────────────────────────────────────
// Plain struct/enum definitions with no logic: the transcript kept by the
// widget and the JSON wire shapes of POST /api/chat-gemini.

use serde::{Deserialize, Serialize};

/// Sender of one transcript turn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One turn of the widget's conversation. Chronological order is significant;
/// the first entry, when present, is the fixed system instruction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptEntry {
    pub role: Role,
    pub content: String,
}

impl TranscriptEntry {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self { role, content: content.into() }
    }
}

/// Request body of POST /api/chat-gemini.
///
/// History entries are deliberately loose (`String` role, defaulted fields):
/// the gateway filters out incomplete entries instead of rejecting the whole
/// request, so a sloppy client payload still produces a best-effort call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub content: String,
}

impl HistoryEntry {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self { role: role.into(), content: content.into() }
    }
}

/// Response body of POST /api/chat-gemini as seen by the widget.
/// Success carries `reply`; failure carries `error`. Both are kept because
/// the widget's reply policy inspects whichever is present.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GatewayReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
