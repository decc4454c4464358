// ── Error Types ────────────────────────────────────────────────────────────
// Single canonical error enum, built with `thiserror`.
//
// Design rules:
//   • Variants are coarse-grained by domain (I/O, Network, Provider, Config).
//   • `#[from]` wires std/external error conversions automatically.
//   • No variant carries secret material (API keys) in its message.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChatError {
    /// Filesystem or OS-level I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization / deserialization failure.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP / network failure (reqwest layer).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Gemini API returned a non-success HTTP status (non-secret detail only).
    #[error("Provider error {status}: {message}")]
    Provider { status: u16, message: String },

    /// Gateway or client configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ChatError {
    /// Create a provider error with status and message.
    pub fn provider(status: u16, message: impl Into<String>) -> Self {
        Self::Provider { status, message: message.into() }
    }
}

/// All fallible operations in this crate return this type.
pub type ChatResult<T> = Result<T, ChatError>;
