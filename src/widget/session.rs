// ── Chat Session Core ──────────────────────────────────────────────────────
// Pure per-session state: the ordered transcript and the single-flight busy
// flag. No I/O, no rendering — `submit` returns what should happen and the
// async driver in mod.rs carries it out.
//
// Turn lifecycle: idle → sending → (success | fallback) → idle. The busy
// flag rejects (never queues) a second submission while one is in flight,
// and every completion path releases it.

use super::intercept::{intercept, Category};
use super::persona;
use crate::types::{Role, TranscriptEntry};

/// What the driver must do with one submitted input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAction {
    /// Empty input, or a request is already in flight. Nothing changed.
    Ignored,
    /// A keyword category matched; both turns are already in the transcript.
    Canned { category: Category, answer: &'static str },
    /// The turn must go to the gateway. The session is now busy until
    /// [`ChatSession::finish_turn`] is called.
    Send { message: String },
}

pub struct ChatSession {
    transcript: Vec<TranscriptEntry>,
    busy: bool,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatSession {
    /// Fresh session: transcript holds only the fixed system instruction.
    pub fn new() -> Self {
        ChatSession {
            transcript: vec![TranscriptEntry::new(Role::System, persona::SYSTEM_PROMPT)],
            busy: false,
        }
    }

    pub fn transcript(&self) -> &[TranscriptEntry] {
        &self.transcript
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Decide one user input: trim, guard, append the user turn, then either
    /// answer locally from the canned categories or hand the turn to the
    /// network path.
    pub fn submit(&mut self, input: &str) -> SubmitAction {
        let text = input.trim();
        if text.is_empty() || self.busy {
            return SubmitAction::Ignored;
        }

        self.push(Role::User, text);

        if let Some((category, answer)) = intercept(text) {
            self.push(Role::Assistant, answer);
            return SubmitAction::Canned { category, answer };
        }

        self.busy = true;
        SubmitAction::Send { message: text.to_string() }
    }

    /// Record the assistant turn of an in-flight request and release the
    /// single-flight guard. Called on every completion path, success or not.
    pub fn finish_turn(&mut self, reply: &str) {
        self.push(Role::Assistant, reply);
        self.busy = false;
    }

    /// Reset to the initial state: system-only transcript, guard released.
    /// Idempotent.
    pub fn clear(&mut self) {
        self.transcript.clear();
        self.transcript.push(TranscriptEntry::new(Role::System, persona::SYSTEM_PROMPT));
        self.busy = false;
    }

    fn push(&mut self, role: Role, content: &str) {
        self.transcript.push(TranscriptEntry::new(role, content));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_system_only() {
        let session = ChatSession::new();
        assert_eq!(session.transcript().len(), 1);
        assert_eq!(session.transcript()[0].role, Role::System);
        assert!(!session.is_busy());
    }

    #[test]
    fn test_empty_input_is_ignored() {
        let mut session = ChatSession::new();
        assert_eq!(session.submit("   "), SubmitAction::Ignored);
        assert_eq!(session.transcript().len(), 1);
    }

    #[test]
    fn test_canned_turn_appends_both_sides() {
        let mut session = ChatSession::new();
        let action = session.submit("qual o cargo dele?");
        assert!(matches!(action, SubmitAction::Canned { .. }));
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript()[1].role, Role::User);
        assert_eq!(session.transcript()[2].role, Role::Assistant);
        // A canned answer never occupies the single-flight slot.
        assert!(!session.is_busy());
    }

    #[test]
    fn test_single_flight_rejects_second_submit() {
        let mut session = ChatSession::new();
        let action = session.submit("me fale do projeto RoboZap");
        assert!(matches!(action, SubmitAction::Send { .. }));
        assert!(session.is_busy());

        let len_before = session.transcript().len();
        assert_eq!(session.submit("outra pergunta"), SubmitAction::Ignored);
        assert_eq!(session.transcript().len(), len_before);

        session.finish_turn("resposta");
        assert!(!session.is_busy());
        assert!(matches!(session.submit("outra pergunta"), SubmitAction::Send { .. }));
    }

    #[test]
    fn test_submit_trims_input() {
        let mut session = ChatSession::new();
        session.submit("  me fale do RoboZap  ");
        assert_eq!(session.transcript()[1].content, "me fale do RoboZap");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let mut session = ChatSession::new();
        session.submit("qual o cargo dele?");
        session.submit("me fale do RoboZap");
        session.clear();
        let after_once: Vec<_> = session.transcript().to_vec();
        session.clear();
        assert_eq!(session.transcript(), &after_once[..]);
        assert_eq!(session.transcript().len(), 1);
        assert!(!session.is_busy());
    }
}
