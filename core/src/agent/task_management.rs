use std::sync::Arc;

use super::behavior::Agent;
use super::kind::AgentKind;
use super::prompt::PromptTemplate;
use crate::llm::LlmBridge;
use crate::task::Task;

const CAPABILITIES: &[&str] = &["project_planning", "task_scheduling", "progress_tracking"];

const SYSTEM_PROMPT: &str =
    "You are a senior project manager. Create comprehensive, actionable plans.";

const TEMPLATE: PromptTemplate = PromptTemplate {
    title: "Task Management Request",
    role: "project management expert",
    sections: &[
        "Project breakdown",
        "Task prioritization",
        "Timeline estimation",
        "Resource requirements",
        "Risk assessment",
    ],
};

pub struct TaskManagementAgent {
    bridge: Arc<dyn LlmBridge>,
}

impl TaskManagementAgent {
    pub fn new(bridge: Arc<dyn LlmBridge>) -> Self {
        Self { bridge }
    }
}

impl Agent for TaskManagementAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::TaskManagement
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
