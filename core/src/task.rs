//! Task input and the normalized execution result returned by every agent.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::agent::AgentKind;

/// A caller-supplied unit of work: a free-form description plus arbitrary
/// JSON parameters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Task {
    #[serde(alias = "task_description")]
    description: String,
    #[serde(default)]
    parameters: Map<String, Value>,
}

impl Task {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            parameters: Map::new(),
        }
    }

    pub fn with_parameters(description: impl Into<String>, parameters: Map<String, Value>) -> Self {
        Self {
            description: description.into(),
            parameters,
        }
    }

    /// Builder-style parameter insertion, consuming the task.
    pub fn with_parameter(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.parameters.insert(key.into(), value.into());
        self
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn parameters(&self) -> &Map<String, Value> {
        &self.parameters
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStatus {
    Completed,
    Error,
}

/// Outcome of a dispatch. Failures are carried as data: `status == Error`
/// always has `error` set, `status == Completed` always has `response` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    pub status: ExecutionStatus,
    pub agent_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capabilities: Option<Vec<String>>,
    /// Valid agent types, only present when the requested type was unknown.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available_agents: Option<Vec<String>>,
}

impl ExecutionResult {
    pub fn completed(kind: AgentKind, response: String, capabilities: &[&str]) -> Self {
        Self {
            status: ExecutionStatus::Completed,
            agent_type: kind.as_str().to_string(),
            response: Some(response),
            error: None,
            capabilities: Some(capabilities.iter().map(|c| c.to_string()).collect()),
            available_agents: None,
        }
    }

    pub fn failed(kind: AgentKind, error: impl Into<String>) -> Self {
        Self {
            status: ExecutionStatus::Error,
            agent_type: kind.as_str().to_string(),
            response: None,
            error: Some(error.into()),
            capabilities: None,
            available_agents: None,
        }
    }

    pub fn unknown_agent(requested: &str, available: &[&str]) -> Self {
        Self {
            status: ExecutionStatus::Error,
            agent_type: requested.to_string(),
            response: None,
            error: Some(format!("Unknown agent type: {requested}")),
            capabilities: None,
            available_agents: Some(available.iter().map(|a| a.to_string()).collect()),
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == ExecutionStatus::Completed
    }

    /// Exactly one of `response`/`error` is populated, matching `status`.
    pub fn is_well_formed(&self) -> bool {
        match self.status {
            ExecutionStatus::Completed => self.response.is_some() && self.error.is_none(),
            ExecutionStatus::Error => self.error.is_some() && self.response.is_none(),
        }
    }
}
