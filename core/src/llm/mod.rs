//! LLM module: the bridge contract and its HTTP implementation
//!
//! This module provides:
//! - `LlmBridge`, the single-call chat contract agents depend on
//! - `BridgeError`, the normalized failure type for that call
//! - `LlmBridgeConfig`, `HttpLlmBridge` for talking to the chat backend over HTTP

mod bridge;
mod client;

pub use bridge::{BridgeError, BridgeFailureKind, LlmBridge, NO_RESPONSE};
pub use client::{HttpLlmBridge, LlmBridgeConfig};
