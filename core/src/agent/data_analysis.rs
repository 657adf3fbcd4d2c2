use std::sync::Arc;

use super::behavior::Agent;
use super::kind::AgentKind;
use super::prompt::PromptTemplate;
use crate::llm::LlmBridge;
use crate::task::Task;

const CAPABILITIES: &[&str] = &["csv_analysis", "statistical_analysis", "data_visualization"];

const SYSTEM_PROMPT: &str = "You are a senior data analyst. Provide structured, actionable analysis.";

const TEMPLATE: PromptTemplate = PromptTemplate {
    title: "Data Analysis Task",
    role: "data analysis expert",
    sections: &[
        "Analysis approach",
        "Key insights",
        "Recommendations",
        "Next steps",
    ],
};

/// Specialist for data processing and analysis requests
pub struct DataAnalysisAgent {
    bridge: Arc<dyn LlmBridge>,
}

impl DataAnalysisAgent {
    pub fn new(bridge: Arc<dyn LlmBridge>) -> Self {
        Self { bridge }
    }
}

impl Agent for DataAnalysisAgent {
    fn kind(&self) -> AgentKind {
        AgentKind::DataAnalysis
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
