use std::sync::Arc;

use super::behavior::Agent;
use super::kind::AgentKind;
use super::prompt::PromptTemplate;
use crate::llm::LlmBridge;
use crate::task::Task;

const CAPABILITIES: &[&str] = &["web_scraping", "api_integration", "content_extraction"];

const SYSTEM_PROMPT: &str = "You are a web automation expert. Provide detailed implementation plans.";

const TEMPLATE: PromptTemplate = PromptTemplate {
    title: "Web Automation Task",
    role: "web automation expert",
    sections: &[
        "Implementation approach",
        "Required tools/methods",
        "Step-by-step plan",
        "Expected challenges",
        "Success criteria",
    ],
};

/// Specialist for web scraping and API interaction requests
pub struct WebAutomationAgent {
    bridge: Arc<dyn LlmBridge>,
}

impl WebAutomationAgent {
    pub fn new(bridge: Arc<dyn LlmBridge>) -> Self {
        Self { bridge }
    }
}

impl Agent for WebAutomationAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::WebAutomation
    }

    fn capabilities(&self) -> &'static [&'static str] {
        CAPABILITIES
    }

    fn system_prompt(&self) -> &'static str {
        SYSTEM_PROMPT
    }

    fn render_prompt(&self, task: &Task) -> String {
        TEMPLATE.render(task)
    }

    fn bridge(&self) -> &dyn LlmBridge {
        self.bridge.as_ref()
    }
}
