// Integration tests — gateway handler paths and the full widget turn cycle
// against a scripted backend double.

use async_trait::async_trait;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use portfolio_chat::error::{ChatError, ChatResult};
use portfolio_chat::gateway::{handle_chat, AppState};
use portfolio_chat::types::{ChatRequest, GatewayReply, Role, TranscriptEntry};
use portfolio_chat::widget::backend::ChatBackend;
use portfolio_chat::widget::view::{RecordingView, ViewEvent};
use portfolio_chat::widget::{persona, ChatWidget, TurnOutcome};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

// ── Backend double ─────────────────────────────────────────────────────────

#[derive(Default)]
struct StubBackend {
    responses: Mutex<VecDeque<ChatResult<GatewayReply>>>,
    calls: AtomicUsize,
    last_request: Mutex<Option<(String, Vec<TranscriptEntry>)>>,
}

impl StubBackend {
    fn with_reply(reply: &str) -> Self {
        let stub = Self::default();
        stub.push(Ok(GatewayReply { reply: Some(reply.to_string()), error: None }));
        stub
    }

    fn push(&self, response: ChatResult<GatewayReply>) {
        self.responses.lock().unwrap().push_back(response);
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChatBackend for &StubBackend {
    async fn send(&self, message: &str, history: &[TranscriptEntry]) -> ChatResult<GatewayReply> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some((message.to_string(), history.to_vec()));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(GatewayReply::default()))
    }
}

fn widget(stub: &StubBackend) -> ChatWidget<&StubBackend, RecordingView> {
    ChatWidget::new(stub, RecordingView::default())
}

// ── Gateway handler ────────────────────────────────────────────────────────

#[tokio::test]
async fn empty_message_is_rejected_with_400() {
    let state = AppState { provider: None };
    let request = ChatRequest { message: String::new(), history: vec![] };

    let (status, Json(body)) = handle_chat(State(state), Json(request)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("obrigat"));
}

#[tokio::test]
async fn uninitialized_provider_answers_500() {
    let state = AppState { provider: None };
    let request = ChatRequest { message: "oi".into(), history: vec![] };

    let (status, Json(body)) = handle_chat(State(state), Json(request)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("GEMINI_API_KEY"));
}

// ── Widget turn cycle ──────────────────────────────────────────────────────

#[tokio::test]
async fn keyword_hit_answers_locally_without_network() {
    let stub = StubBackend::default();
    let mut widget = widget(&stub);

    let outcome = widget.submit("qual o cargo dele hoje?").await;

    assert_eq!(outcome, TurnOutcome::Canned);
    assert_eq!(stub.call_count(), 0);
    assert_eq!(widget.session().transcript().len(), 3);
    assert_eq!(
        widget.view().visible_messages().len(),
        2 // user turn + canned answer
    );
}

#[tokio::test]
async fn reply_flows_through_and_is_rendered() {
    let stub = StubBackend::with_reply("O RoboZap envia chamados no WhatsApp.");
    let mut widget = widget(&stub);

    let outcome = widget.submit("o que faz o RoboZap?").await;

    assert_eq!(outcome, TurnOutcome::Replied);
    assert_eq!(stub.call_count(), 1);

    let transcript = widget.session().transcript();
    let last = transcript.last().unwrap();
    assert_eq!(last.role, Role::Assistant);
    assert_eq!(last.content, "O RoboZap envia chamados no WhatsApp.");

    // Typing indicator went on and back off around the call.
    let events = &widget.view().events;
    let on = events.iter().position(|e| *e == ViewEvent::Typing(true)).unwrap();
    let off = events.iter().position(|e| *e == ViewEvent::Typing(false)).unwrap();
    assert!(on < off);
}

#[tokio::test]
async fn wire_contract_sends_message_and_full_history() {
    let stub = StubBackend::with_reply("ok");
    let mut widget = widget(&stub);

    widget.submit("primeira pergunta livre").await;

    let guard = stub.last_request.lock().unwrap();
    let (message, history) = guard.as_ref().unwrap();
    assert_eq!(message, "primeira pergunta livre");
    // System instruction first, submitted user turn last — the message is
    // carried both standalone and as the transcript's final entry.
    assert_eq!(history[0].role, Role::System);
    assert_eq!(history.last().unwrap().role, Role::User);
    assert_eq!(history.last().unwrap().content, "primeira pergunta livre");
}

#[tokio::test]
async fn transport_failure_shows_the_fallback() {
    let stub = StubBackend::default();
    stub.push(Err(ChatError::provider(500, "API error 500")));
    let mut widget = widget(&stub);

    let outcome = widget.submit("pergunta qualquer sobre o perfil").await;

    assert_eq!(outcome, TurnOutcome::Fallback);
    let last = widget.session().transcript().last().unwrap();
    assert_eq!(last.content, persona::FALLBACK_REPLY);

    // The single-flight guard was released: the next turn goes out.
    stub.push(Ok(GatewayReply { reply: Some("segue".into()), error: None }));
    assert_eq!(widget.submit("e uma segunda pergunta livre?").await, TurnOutcome::Replied);
    assert_eq!(stub.call_count(), 2);
}

#[tokio::test]
async fn blocked_keyword_in_reply_is_replaced() {
    let stub = StubBackend::default();
    stub.push(Ok(GatewayReply {
        reply: Some("Ele tem anos de experiencia com Kubernetes e Terraform.".into()),
        error: None,
    }));
    let mut widget = widget(&stub);

    let outcome = widget.submit("ele conhece orquestracao de containers?").await;

    assert_eq!(outcome, TurnOutcome::Fallback);
    assert_eq!(widget.session().transcript().last().unwrap().content, persona::FALLBACK_REPLY);
}

#[tokio::test]
async fn gateway_error_body_is_used_when_reply_is_absent() {
    // Preserved precedence: {error} text becomes the candidate when {reply}
    // is missing, and passes when the policy has nothing against it.
    let stub = StubBackend::default();
    stub.push(Ok(GatewayReply { reply: None, error: Some("Falha ao gerar resposta.".into()) }));
    let mut widget = widget(&stub);

    let outcome = widget.submit("me fale dos projetos dele em detalhe").await;

    assert_eq!(outcome, TurnOutcome::Replied);
    assert_eq!(
        widget.session().transcript().last().unwrap().content,
        "Falha ao gerar resposta."
    );
}

#[tokio::test]
async fn clear_resets_transcript_and_view() {
    let stub = StubBackend::with_reply("resposta");
    let mut widget = widget(&stub);

    widget.submit("qual o cargo dele?").await;
    widget.submit("me fale do RoboZap").await;
    assert!(widget.session().transcript().len() > 1);

    widget.clear();
    assert_eq!(widget.session().transcript().len(), 1);
    assert_eq!(widget.session().transcript()[0].role, Role::System);
    assert!(widget.view().visible_messages().is_empty());

    // Idempotent: a second clear changes nothing.
    widget.clear();
    assert_eq!(widget.session().transcript().len(), 1);
    assert!(widget.view().visible_messages().is_empty());
}
