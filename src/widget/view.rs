// ── View Seam ──────────────────────────────────────────────────────────────
// Rendering is append-only: the session core emits events, a view displays
// them. Keeping this behind a trait lets the decision logic run headless.

use crate::types::Role;

pub trait ChatView {
    /// Append one message tagged with its sender role.
    fn append(&mut self, role: Role, text: &str);
    /// Show or hide the transient typing indicator.
    fn set_typing(&mut self, on: bool);
    /// Remove every rendered message.
    fn clear(&mut self);
}

/// Discards everything. For headless use of the widget.
pub struct NullView;

impl ChatView for NullView {
    fn append(&mut self, _role: Role, _text: &str) {}
    fn set_typing(&mut self, _on: bool) {}
    fn clear(&mut self) {}
}

/// Records every event for assertions in tests.
#[derive(Debug, Default)]
pub struct RecordingView {
    pub events: Vec<ViewEvent>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    Message { role: Role, text: String },
    Typing(bool),
    Cleared,
}

impl RecordingView {
    /// Messages currently visible (appends since the last clear).
    pub fn visible_messages(&self) -> Vec<&ViewEvent> {
        let last_clear = self
            .events
            .iter()
            .rposition(|e| *e == ViewEvent::Cleared)
            .map(|i| i + 1)
            .unwrap_or(0);
        self.events[last_clear..]
            .iter()
            .filter(|e| matches!(e, ViewEvent::Message { .. }))
            .collect()
    }
}

impl ChatView for RecordingView {
    fn append(&mut self, role: Role, text: &str) {
        self.events.push(ViewEvent::Message { role, text: text.to_string() });
    }

    fn set_typing(&mut self, on: bool) {
        self.events.push(ViewEvent::Typing(on));
    }

    fn clear(&mut self) {
        self.events.push(ViewEvent::Cleared);
    }
}
