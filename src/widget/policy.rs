// ── Reply Policy ───────────────────────────────────────────────────────────
// Client-side safety net applied to whatever comes back from the gateway.
// The gateway does not filter content; this layer decides whether the raw
// candidate is shown or replaced by the fixed fallback text.

use super::persona;

/// Outcome of running a gateway response through the policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selected {
    pub text: String,
    /// True when the fallback replaced the candidate.
    pub fell_back: bool,
}

impl Selected {
    pub fn fallback() -> Self {
        Selected { text: persona::FALLBACK_REPLY.to_string(), fell_back: true }
    }
}

/// Choose what the user sees for one completed turn.
///
/// Precedence: a non-empty `reply` wins over `error`; otherwise the error
/// text becomes the candidate and runs through the same filter. The fallback
/// replaces the candidate when it is empty, carries an unfilled placeholder
/// marker, or mentions a blocked keyword.
pub fn select_reply(reply: Option<&str>, error: Option<&str>) -> Selected {
    let raw = reply
        .filter(|r| !r.is_empty())
        .or(error.filter(|e| !e.is_empty()))
        .unwrap_or("");

    if raw.is_empty() || has_placeholder(raw) || has_blocked_keyword(raw) {
        return Selected::fallback();
    }

    Selected { text: raw.to_string(), fell_back: false }
}

fn has_placeholder(text: &str) -> bool {
    persona::PLACEHOLDER_MARKERS.iter().any(|m| text.contains(m))
}

fn has_blocked_keyword(text: &str) -> bool {
    let lower = text.to_lowercase();
    persona::BLOCKED_KEYWORDS.iter().any(|kw| lower.contains(kw))
}
