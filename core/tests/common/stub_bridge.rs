//! In-process `LlmBridge` doubles: `StubBridge` (scripted outcome plus call
//! log) and `EchoBridge` (output depends on the prompt).

use agent_platform::{BridgeError, LlmBridge};
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// =============================================================================
// In-process bridge stubs
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    pub prompt: String,
    pub system_prompt: Option<String>,
}

/// Bridge stub returning a fixed outcome and recording every call
pub struct StubBridge {
    outcome: Result<String, BridgeError>,
    calls: AtomicUsize,
    recorded: Mutex<Vec<RecordedCall>>,
}

impl StubBridge {
    pub fn responding(text: &str) -> Arc<Self> {
        Self::with_outcome(Ok(text.to_string()))
    }

    pub fn failing(err: BridgeError) -> Arc<Self> {
        Self::with_outcome(Err(err))
    }

    fn with_outcome(outcome: Result<String, BridgeError>) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            calls: AtomicUsize::new(0),
            recorded: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_call(&self) -> Option<RecordedCall> {
        self.recorded.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl LlmBridge for StubBridge {
    async fn chat(&self, prompt: &str, system_prompt: Option<&str>) -> Result<String, BridgeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.recorded.lock().unwrap().push(RecordedCall {
            prompt: prompt.to_string(),
            system_prompt: system_prompt.map(str::to_string),
        });
        self.outcome.clone()
    }
}

/// Bridge stub that echoes the prompt back, so results depend on input
pub struct EchoBridge;

#[async_trait]
impl LlmBridge for EchoBridge {
    async fn chat(&self, prompt: &str, _system_prompt: Option<&str>) -> Result<String, BridgeError> {
        Ok(format!("echo: {prompt}"))
    }
}
