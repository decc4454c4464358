// ── Gateway Configuration ──────────────────────────────────────────────────
// Everything is read from the environment once at startup. A missing API key
// does not abort the process: the gateway starts in permanent-failure mode
// and answers 500 until an operator fixes the configuration.

use log::warn;

/// Model identifiers accepted from `GEMINI_MODEL`. Anything else silently
/// falls back to [`DEFAULT_MODEL`] — this guards against a typo selecting a
/// non-existent remote model.
pub const ALLOWED_MODELS: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.5-pro",
    "gemini-2.0-flash",
    "gemini-2.0-flash-001",
    "gemini-flash-latest",
    "gemini-flash-lite-latest",
    "gemini-pro-latest",
];

pub const DEFAULT_MODEL: &str = "gemini-flash-latest";

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// `GEMINI_API_KEY`. `None` leaves the provider uninitialized.
    pub api_key: Option<String>,
    /// Active model name, already validated against the allow-list.
    pub model: String,
    /// `PORT`, default 3000.
    pub port: u16,
}

impl GatewayConfig {
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        if api_key.is_none() {
            warn!("[gateway] GEMINI_API_KEY not set — /api/chat-gemini will answer 500 until it is configured");
        }

        let requested = std::env::var("GEMINI_MODEL").ok();
        let model = resolve_model(requested.as_deref());

        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        GatewayConfig { api_key, model, port }
    }
}

/// Validate a requested model name against the allow-list.
/// Unknown names are replaced by the default with a logged warning; an unset
/// name takes the default silently.
pub fn resolve_model(requested: Option<&str>) -> String {
    match requested {
        Some(name) if ALLOWED_MODELS.contains(&name) => name.to_string(),
        Some(name) => {
            warn!(
                "[gateway] GEMINI_MODEL=\"{}\" is not in the allow-list — falling back to {}",
                name, DEFAULT_MODEL
            );
            DEFAULT_MODEL.to_string()
        }
        None => DEFAULT_MODEL.to_string(),
    }
}
