//! Chat assistant module - transcript state for a hosted completion endpoint
//!
//! The assistant forwards the running conversation to a hosted language-model
//! completion API and shows the reply. This crate owns everything up to the
//! wire: the JSON payload types, the transcript, and the single-attempt
//! failure policy. The transport itself is a trait implemented by the
//! embedder; no networking happens here.
//!
//! # Failure policy
//!
//! One attempt per send. On any failure (transport error or an error
//! payload) the pending user turn is rolled back so the transcript never
//! contains a question the assistant did not answer, and the caller gets a
//! single user-visible message.
//!
//! # Configuration
//!
//! Environment variables override the request defaults:
//!
//! - `LINGO_CHAT_MODEL`: model identifier
//! - `LINGO_CHAT_MAX_TOKENS`: completion token budget

pub mod protocol;
pub mod session;

pub use protocol::{ChatMessage, CompletionRequest, CompletionResponse, Role};
pub use session::{ChatReply, ChatSession, ChatTransport, TransportError};
