//! Wire types for the hosted completion endpoint.
//!
//! Request and response shapes follow the messages-style completion API the
//! product talks to. Only the fields this application reads are modeled;
//! unknown response fields are ignored.

use serde::{Deserialize, Serialize};

/// Default model identifier, overridable via `LINGO_CHAT_MODEL`
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";

/// Default completion budget, overridable via `LINGO_CHAT_MAX_TOKENS`
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// Speaker of a transcript turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// Request payload: fixed system instruction plus the full transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub max_tokens: u32,
    pub system: String,
    pub messages: Vec<ChatMessage>,
}

/// Success payload: the reply arrives as a list of text blocks
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub content: Vec<ContentBlock>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentBlock {
    #[serde(default)]
    pub text: String,
}

impl CompletionResponse {
    /// Reply text: concatenated blocks, trimmed
    pub fn reply_text(&self) -> String {
        let mut out = String::new();
        for block in &self.content {
            out.push_str(&block.text);
        }
        out.trim().to_string()
    }
}

/// Error payload returned by the endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serializes_expected_shape() {
        let request = CompletionRequest {
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            system: "be brief".to_string(),
            messages: vec![ChatMessage::user("hola")],
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], DEFAULT_MODEL);
        assert_eq!(json["max_tokens"], 1000);
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["messages"][0]["content"], "hola");
    }

    #[test]
    fn test_response_reply_text_joins_and_trims() {
        let body = r#"{"content":[{"type":"text","text":"  Bonjour"},{"text":"!  "}]}"#;
        let response: CompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.reply_text(), "Bonjour!");
    }

    #[test]
    fn test_response_tolerates_missing_content() {
        let response: CompletionResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.reply_text(), "");
    }

    #[test]
    fn test_error_payload_parses() {
        let body = r#"{"type":"error","error":{"type":"overloaded_error","message":"Overloaded"}}"#;
        let err: ErrorResponse = serde_json::from_str(body).unwrap();
        assert_eq!(err.error.message, "Overloaded");
    }
}
