use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

use super::bridge::{BridgeError, LlmBridge, NO_RESPONSE};

/// Configuration for HttpLlmBridge loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct LlmBridgeConfig {
    pub base_url: String, // e.g., http://llm-service:8000
    pub model: String,    // e.g., llama3.2
    pub request_timeout_ms: u64,
}

impl Default for LlmBridgeConfig {
    fn default() -> Self {
        Self {
            base_url: std::env::var("LLM_SERVICE_URL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "http://llm-service:8000".to_string()),
            model: std::env::var("LLM_MODEL")
                .ok()
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| "llama3.2".to_string()),
            request_timeout_ms: std::env::var("LLM_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse::<u64>().ok())
                .filter(|v| *v > 0)
                .unwrap_or(120_000),
        }
    }
}

impl LlmBridgeConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    fn chat_url(&self) -> String {
        format!("{}/chat", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
    model: &'a str,
    system_prompt: Option<&'a str>,
}

/// HTTP bridge to the chat backend: one POST per call, bounded by the configured timeout
#[derive(Clone)]
pub struct HttpLlmBridge {
    pub(crate) http: Client,
    pub(crate) cfg: LlmBridgeConfig,
}

impl HttpLlmBridge {
    pub fn new(cfg: LlmBridgeConfig) -> Result<Self, BridgeError> {
        let http = Client::builder()
            .timeout(cfg.request_timeout())
            .build()
            .map_err(|e| BridgeError::Client(e.to_string()))?;
        Ok(Self { http, cfg })
    }

    pub fn from_env() -> Result<Self, BridgeError> {
        Self::new(LlmBridgeConfig::default())
    }

    pub fn config(&self) -> &LlmBridgeConfig {
        &self.cfg
    }

    fn classify(&self, err: reqwest::Error) -> BridgeError {
        if err.is_timeout() {
            BridgeError::Timeout(self.cfg.request_timeout())
        } else {
            BridgeError::Transport(error_chain(&err))
        }
    }
}

#[async_trait]
impl LlmBridge for HttpLlmBridge {
    async fn chat(&self, prompt: &str, system_prompt: Option<&str>) -> Result<String, BridgeError> {
        let url = self.cfg.chat_url();
        debug!(target: "llm_bridge", url = %url, model = %self.cfg.model, "POST chat request");

        let body = ChatRequest {
            message: prompt,
            model: &self.cfg.model,
            system_prompt,
        };

        let resp = self
            .http
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.classify(e))
            .inspect_err(|e| warn!(target: "llm_bridge", error = %e, "Chat request failed"))?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = read_error_body(resp).await;
            warn!(target: "llm_bridge", %status, body = %text, "Chat backend returned error status");
            return Err(BridgeError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        let val: Value = resp.json().await.map_err(|e| {
            if e.is_timeout() {
                self.classify(e)
            } else {
                BridgeError::Decode(error_chain(&e))
            }
        })?;

        Ok(extract_response_text(&val))
    }
}

/// Pull the completion text out of a chat response body. A missing or null
/// `response` field yields the `NO_RESPONSE` sentinel instead of an error.
pub(crate) fn extract_response_text(v: &Value) -> String {
    match v.get("response") {
        Some(Value::String(s)) => s.clone(),
        None | Some(Value::Null) => NO_RESPONSE.to_string(),
        Some(other) => other.to_string(),
    }
}

/// Upper bound on how much of an error response body is kept.
pub(crate) const MAX_ERROR_BODY_BYTES: usize = 512;

// Reads chunks only until the limit is passed; the rest of the body is dropped.
async fn read_error_body(mut resp: reqwest::Response) -> String {
    let mut buf = Vec::new();
    while buf.len() <= MAX_ERROR_BODY_BYTES {
        match resp.chunk().await {
            Ok(Some(chunk)) => buf.extend_from_slice(&chunk),
            _ => break,
        }
    }
    truncate_body(&String::from_utf8_lossy(&buf))
}

/// Cut `body` to at most `MAX_ERROR_BODY_BYTES` on a char boundary, marking the cut.
pub(crate) fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_BYTES {
        return body.to_string();
    }
    let mut end = MAX_ERROR_BODY_BYTES;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated)", &body[..end])
}

// reqwest's Display stops at the outermost error; keep the root cause too.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut msg = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        msg.push_str(": ");
        msg.push_str(&cause.to_string());
        source = cause.source();
    }
    msg
}
