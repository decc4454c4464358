// Portfolio Chat — library root.
//
// Two loosely coupled halves over one HTTP contract:
//   gateway/ — the stateless POST /api/chat-gemini endpoint that forwards a
//              chat turn to the Google generative-language API
//   widget/  — the conversation session core used by chat clients: transcript,
//              keyword interception, reply policy, and the view seam
//
// Dependency rule (one-way): widget/ talks to the gateway only through the
// ChatBackend trait and the wire types in types.rs — it never imports gateway/.

pub mod config;
pub mod error;
pub mod gateway;
pub mod types;
pub mod widget;

pub use error::{ChatError, ChatResult};
