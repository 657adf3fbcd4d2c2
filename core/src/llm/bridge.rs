use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

/// Returned in place of the completion text when a reachable backend omits
/// the `response` field.
pub const NO_RESPONSE: &str = "No response";

/// Single-shot chat call against the text-completion backend
#[async_trait]
pub trait LlmBridge: Send + Sync {
    /// Send `prompt` (with an optional system prompt) and return the completion text.
    /// One attempt only; no retries.
    async fn chat(&self, prompt: &str, system_prompt: Option<&str>) -> Result<String, BridgeError>;
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BridgeError {
    #[error("LLM service request failed: {0}")]
    Transport(String),

    #[error("LLM service request timed out after {0:?}")]
    Timeout(Duration),

    #[error("LLM service returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Failed to decode LLM service response: {0}")]
    Decode(String),

    #[error("Failed to build HTTP client: {0}")]
    Client(String),
}

/// Coarse failure class: could the backend be reached at all?
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeFailureKind {
    Transport,
    Protocol,
}

impl BridgeError {
    pub fn kind(&self) -> BridgeFailureKind {
        match self {
            BridgeError::Transport(_) | BridgeError::Timeout(_) | BridgeError::Client(_) => {
                BridgeFailureKind::Transport
            }
            BridgeError::Status { .. } | BridgeError::Decode(_) => BridgeFailureKind::Protocol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_embeds_code() {
        let err = BridgeError::Status {
            status: 503,
            body: "overloaded".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("503"));
        assert!(msg.contains("overloaded"));
        assert_eq!(err.kind(), BridgeFailureKind::Protocol);
    }

    #[test]
    fn timeout_is_a_transport_failure() {
        let err = BridgeError::Timeout(Duration::from_secs(120));
        assert_eq!(err.kind(), BridgeFailureKind::Transport);
        assert!(err.to_string().contains("120s"));
    }
}
