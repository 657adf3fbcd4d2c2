use async_trait::async_trait;
use tracing::{info, warn};

use super::kind::AgentKind;
use crate::llm::LlmBridge;
use crate::task::{ExecutionResult, Task};

/// Agent behavior trait
///
/// Implementors supply only fixed data (kind, capabilities, system prompt,
/// prompt layout) and the bridge they talk through; `execute` is shared.
#[async_trait]
pub trait Agent: Send + Sync {
    fn kind(&self) -> AgentKind;

    /// Declared skills, in a fixed order.
    fn capabilities(&self) -> &'static [&'static str];

    fn system_prompt(&self) -> &'static str;

    fn render_prompt(&self, task: &Task) -> String;

    fn bridge(&self) -> &dyn LlmBridge;

    /// Run the task through the LLM bridge. Total: bridge failures come back
    /// as an `Error` result, never as a panic or `Err`.
    async fn execute(&self, task: &Task) -> ExecutionResult {
        let kind = self.kind();
        let prompt = self.render_prompt(task);
        info!(target: "agent", agent = %kind, prompt_len = prompt.len(), "Executing task");

        match self.bridge().chat(&prompt, Some(self.system_prompt())).await {
            Ok(response) => {
                info!(target: "agent", agent = %kind, response_len = response.len(), "Task completed");
                ExecutionResult::completed(kind, response, self.capabilities())
            }
            Err(e) => {
                warn!(target: "agent", agent = %kind, error = %e, failure = ?e.kind(), "Task failed");
                ExecutionResult::failed(kind, e.to_string())
            }
        }
    }
}
