//! Transcript state and the single-attempt send policy.

use std::env;

use crate::protocol::{
    ChatMessage, CompletionRequest, CompletionResponse, ErrorResponse, DEFAULT_MAX_TOKENS,
    DEFAULT_MODEL,
};

/// Fixed system instruction sent with every request
pub const SYSTEM_PROMPT: &str = "You are a language learning assistant — warm, \
elegant, and deeply knowledgeable. You help learners integrate language practice \
into their daily routines: morning rituals, commutes, meals, work breaks, \
evenings, and bedtime. You give practical, imaginative, culturally rich advice \
tailored to the time of day and the learner's language. Keep answers concise \
but poetic — 2-4 short paragraphs maximum. Never use bullet lists. Write in \
flowing prose.";

/// Suggested first message for an empty transcript
pub const OPENING_PROMPT: &str = "I'm starting my language learning journey. Where do I begin?";

/// Shown when the endpoint cannot be reached at all
pub const CONNECTION_FAILURE_REPLY: &str =
    "I seem to have lost the connection. Please try again.";

/// Shown when the endpoint answers with an empty or unreadable error
pub const GENERIC_FAILURE_REPLY: &str = "Something went wrong. Please try again.";

/// The endpoint could not be reached (DNS, socket, timeout - the embedder
/// decides; this crate only cares that no response body exists).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportError;

/// The network call, implemented by the embedder. Returns the raw response
/// body on any HTTP completion, success or error status alike.
pub trait ChatTransport {
    fn send(&mut self, request: &CompletionRequest) -> Result<String, TransportError>;
}

/// What a send produced, always user-visible text
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatReply {
    /// Assistant turn, appended to the transcript
    Reply(String),
    /// Failure message; the transcript was rolled back
    Failure(String),
}

impl ChatReply {
    pub fn text(&self) -> &str {
        match self {
            ChatReply::Reply(text) | ChatReply::Failure(text) => text,
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, ChatReply::Failure(_))
    }
}

/// A running conversation with the assistant
#[derive(Debug, Clone)]
pub struct ChatSession {
    model: String,
    max_tokens: u32,
    history: Vec<ChatMessage>,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            history: Vec::new(),
        }
    }

    /// Build a session honoring `LINGO_CHAT_MODEL` / `LINGO_CHAT_MAX_TOKENS`.
    pub fn from_env() -> Self {
        let mut session = Self::new();
        if let Ok(model) = env::var("LINGO_CHAT_MODEL") {
            if !model.is_empty() {
                session.model = model;
            }
        }
        if let Ok(raw) = env::var("LINGO_CHAT_MAX_TOKENS") {
            if let Ok(max_tokens) = raw.parse::<u32>() {
                session.max_tokens = max_tokens;
            }
        }
        session
    }

    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Append a user turn and build the request carrying the whole
    /// transcript.
    pub fn push_user(&mut self, text: impl Into<String>) -> CompletionRequest {
        self.history.push(ChatMessage::user(text));
        CompletionRequest {
            model: self.model.clone(),
            max_tokens: self.max_tokens,
            system: SYSTEM_PROMPT.to_string(),
            messages: self.history.clone(),
        }
    }

    /// Send one user message through the transport. Exactly one attempt;
    /// any failure rolls the user turn back and yields a visible message.
    pub fn send(&mut self, transport: &mut dyn ChatTransport, text: &str) -> ChatReply {
        let request = self.push_user(text);
        match transport.send(&request) {
            Ok(body) => self.apply_reply(&body),
            Err(TransportError) => {
                self.rollback();
                ChatReply::Failure(CONNECTION_FAILURE_REPLY.to_string())
            }
        }
    }

    /// Interpret a response body for the pending user turn.
    ///
    /// A body that parses as a completion with text becomes the assistant
    /// turn. An error payload (or anything unreadable) rolls the user turn
    /// back; the endpoint's message is surfaced when it has one.
    pub fn apply_reply(&mut self, body: &str) -> ChatReply {
        if let Ok(response) = serde_json::from_str::<CompletionResponse>(body) {
            let reply = response.reply_text();
            if !reply.is_empty() {
                self.history.push(ChatMessage::assistant(reply.clone()));
                return ChatReply::Reply(reply);
            }
        }

        self.rollback();
        let message = serde_json::from_str::<ErrorResponse>(body)
            .ok()
            .map(|e| e.error.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| GENERIC_FAILURE_REPLY.to_string());
        ChatReply::Failure(message)
    }

    /// Drop the pending user turn after a failed attempt.
    fn rollback(&mut self) {
        self.history.pop();
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
