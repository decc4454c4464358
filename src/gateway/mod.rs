// ── Chat Gateway ───────────────────────────────────────────────────────────
// The single stateless HTTP endpoint: validate the incoming chat turn,
// translate the transcript, forward to Gemini and relay the text reply.
//
// Cross-origin requests are accepted from any origin — the static front-end
// is hosted separately from this API.

pub mod provider;

use crate::error::ChatError;
use crate::types::ChatRequest;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use log::error;
use provider::GeminiClient;
use serde_json::{json, Value};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

/// Shared across requests; the provider handle is read-only after startup,
/// so no locking is needed. `None` means the API key was missing at startup
/// and the endpoint is in permanent-failure mode.
#[derive(Clone)]
pub struct AppState {
    pub provider: Option<Arc<GeminiClient>>,
}

pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat-gemini", post(handle_chat))
        .layer(cors)
        .with_state(state)
}

/// POST /api/chat-gemini — one chat turn in, one reply out.
///
/// 400 for a missing message, 500 when the provider was never initialized,
/// and on provider failure the remote status when available else 500 with a
/// generic error body — raw provider errors are never forwarded.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> (StatusCode, Json<Value>) {
    if request.message.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "Mensagem obrigatória."})),
        );
    }

    let Some(provider) = state.provider.as_ref() else {
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "GEMINI_API_KEY não configurada ou modelo não inicializado."})),
        );
    };

    let contents = GeminiClient::compose_contents(&request.history, &request.message);

    match provider.generate(contents).await {
        Ok(reply) => (StatusCode::OK, Json(json!({"reply": reply}))),
        Err(e) => {
            error!("[gateway] Gemini call failed: {}", e);
            (error_status(&e), Json(json!({"error": "Falha ao gerar resposta."})))
        }
    }
}

/// Provider errors pass their remote HTTP status through; everything else
/// (transport, serialization) is a generic 500.
fn error_status(err: &ChatError) -> StatusCode {
    match err {
        ChatError::Provider { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    }
}
