// ── Chat Widget ────────────────────────────────────────────────────────────
// The async driver that ties the pure session core to a backend transport
// and a view. Owns no global state — every widget instance carries its own
// transcript and single-flight guard, so multiple instances never interfere.

pub mod backend;
pub mod intercept;
pub mod persona;
pub mod policy;
pub mod session;
pub mod theme;
pub mod view;

use backend::ChatBackend;
use log::warn;
use policy::{select_reply, Selected};
use session::{ChatSession, SubmitAction};
use view::ChatView;

use crate::types::Role;

/// How one submitted input was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Empty input or single-flight rejection; nothing happened.
    Ignored,
    /// Answered locally from a keyword category, no network call.
    Canned,
    /// The gateway's reply was shown as-is.
    Replied,
    /// The fixed fallback text was shown instead of the reply.
    Fallback,
}

pub struct ChatWidget<B: ChatBackend, V: ChatView> {
    session: ChatSession,
    backend: B,
    view: V,
}

impl<B: ChatBackend, V: ChatView> ChatWidget<B, V> {
    pub fn new(backend: B, view: V) -> Self {
        ChatWidget { session: ChatSession::new(), backend, view }
    }

    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Submit one user input.
    ///
    /// The user turn renders immediately; a canned hit renders its answer
    /// without touching the network. Otherwise the turn goes to the gateway
    /// behind the typing indicator, and the reply policy decides what is
    /// shown. A transport failure is indistinguishable from a content-policy
    /// fallback at the view, and the single-flight guard is released on
    /// every path.
    pub async fn submit(&mut self, input: &str) -> TurnOutcome {
        match self.session.submit(input) {
            SubmitAction::Ignored => TurnOutcome::Ignored,
            SubmitAction::Canned { answer, .. } => {
                self.view.append(Role::User, input.trim());
                self.view.append(Role::Assistant, answer);
                TurnOutcome::Canned
            }
            SubmitAction::Send { message } => {
                self.view.append(Role::User, &message);
                self.view.set_typing(true);

                // The transcript already carries this message as its last
                // user turn; the wire contract sends both.
                let result = self.backend.send(&message, self.session.transcript()).await;
                self.view.set_typing(false);

                let selected = match result {
                    Ok(body) => select_reply(body.reply.as_deref(), body.error.as_deref()),
                    Err(e) => {
                        warn!("[widget] backend call failed: {}", e);
                        Selected::fallback()
                    }
                };

                self.session.finish_turn(&selected.text);
                self.view.append(Role::Assistant, &selected.text);

                if selected.fell_back {
                    TurnOutcome::Fallback
                } else {
                    TurnOutcome::Replied
                }
            }
        }
    }

    /// Reset the transcript to its initial state and empty the view.
    pub fn clear(&mut self) {
        self.session.clear();
        self.view.clear();
    }
}
