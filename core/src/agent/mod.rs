//! Agent module split into smaller files for readability.
//! - kind.rs: AgentKind identifier (the registry key)
//! - behavior.rs: Agent trait and the shared execute algorithm
//! - prompt.rs: PromptTemplate rendering
//! - data_analysis.rs / web_automation.rs / task_management.rs: the specialists

mod behavior;
mod data_analysis;
mod kind;
mod prompt;
mod task_management;
mod web_automation;

use std::sync::Arc;

use crate::llm::LlmBridge;

pub use behavior::Agent;
pub use data_analysis::DataAnalysisAgent;
pub use kind::{AgentKind, UnknownAgentKind};
pub use prompt::PromptTemplate;
pub use task_management::TaskManagementAgent;
pub use web_automation::WebAutomationAgent;

/// Construct the specialist for `kind`. The match is exhaustive, so a new
/// `AgentKind` variant does not compile until it is wired here.
pub fn build(kind: AgentKind, bridge: Arc<dyn LlmBridge>) -> Arc<dyn Agent> {
    match kind {
        AgentKind::DataAnalysis => Arc::new(DataAnalysisAgent::new(bridge)),
        AgentKind::WebAutomation => Arc::new(WebAutomationAgent::new(bridge)),
        AgentKind::TaskManagement => Arc::new(TaskManagementAgent::new(bridge)),
    }
}
