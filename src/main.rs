// Portfolio Chat — gateway binary.
//
// Reads configuration from the environment, builds the provider client once,
// and serves POST /api/chat-gemini until killed. A missing API key does not
// abort startup — the endpoint answers 500 until the key is configured.

use anyhow::Result;
use log::{info, warn};
use portfolio_chat::config::GatewayConfig;
use portfolio_chat::gateway::provider::GeminiClient;
use portfolio_chat::gateway::{self, AppState};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = GatewayConfig::from_env();

    let provider = config
        .api_key
        .as_ref()
        .map(|key| Arc::new(GeminiClient::new(key.clone(), config.model.clone())));

    match &provider {
        Some(p) => info!("[gateway] Active model: {}", p.model()),
        None => warn!("[gateway] Starting without a provider — configuration is incomplete"),
    }

    let app = gateway::router(AppState { provider });

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("[gateway] Listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
