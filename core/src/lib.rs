// Agent Platform Core Library
// Routes task descriptions to specialized LLM-backed agents

pub mod agent;
pub mod config;
pub mod llm;
pub mod orchestrator;
pub mod task;
pub mod telemetry;

// Export core types
pub use agent::{Agent, AgentKind, DataAnalysisAgent, TaskManagementAgent, WebAutomationAgent};
pub use config::PlatformConfig;
pub use llm::{BridgeError, HttpLlmBridge, LlmBridge, LlmBridgeConfig};
pub use orchestrator::{AgentCatalog, Orchestrator};
pub use task::{ExecutionResult, ExecutionStatus, Task};

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlatformError {
    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Bridge error: {0}")]
    BridgeError(#[from] BridgeError),

    #[error("Registry is missing agents: {0:?}")]
    IncompleteRegistry(Vec<AgentKind>),

    #[error("Agent registered more than once: {0}")]
    DuplicateAgent(AgentKind),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
pub type Result<T> = std::result::Result<T, PlatformError>;
