use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a specialist agent. Declaration order is registry order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    DataAnalysis,
    WebAutomation,
    TaskManagement,
}

impl AgentKind {
    pub const ALL: [AgentKind; 3] = [
        AgentKind::DataAnalysis,
        AgentKind::WebAutomation,
        AgentKind::TaskManagement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentKind::DataAnalysis => "data_analysis",
            AgentKind::WebAutomation => "web_automation",
            AgentKind::TaskManagement => "task_management",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown agent type: {0}")]
pub struct UnknownAgentKind(pub String);

impl FromStr for AgentKind {
    type Err = UnknownAgentKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgentKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| UnknownAgentKind(s.to_string()))
    }
}
