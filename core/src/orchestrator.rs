use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::agent::{self, Agent, AgentKind};
use crate::llm::{HttpLlmBridge, LlmBridge, LlmBridgeConfig};
use crate::task::{ExecutionResult, Task};
use crate::{PlatformError, Result};

/// Discovery payload: registered agent types and what each declares it can do
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentCatalog {
    pub agents: Vec<String>,
    pub capabilities: BTreeMap<String, Vec<String>>,
}

/// Routes tasks to specialist agents.
///
/// The registry holds exactly one agent per `AgentKind` and is never mutated
/// after construction, so clones share it and lookups take no lock.
#[derive(Clone)]
pub struct Orchestrator {
    agents: Arc<BTreeMap<AgentKind, Arc<dyn Agent>>>,
}

impl Orchestrator {
    /// Build the full registry, every specialist sharing `bridge`.
    pub fn new(bridge: Arc<dyn LlmBridge>) -> Self {
        let agents: BTreeMap<AgentKind, Arc<dyn Agent>> = AgentKind::ALL
            .into_iter()
            .map(|kind| (kind, agent::build(kind, Arc::clone(&bridge))))
            .collect();
        info!(target: "orchestrator", agents = AgentKind::ALL.len(), "Agent registry built");
        Self {
            agents: Arc::new(agents),
        }
    }

    pub fn from_config(cfg: &LlmBridgeConfig) -> Result<Self> {
        let bridge = HttpLlmBridge::new(cfg.clone())?;
        Ok(Self::new(Arc::new(bridge)))
    }

    /// Build from explicit agents. Fails unless every `AgentKind` appears exactly once.
    pub fn with_agents(agents: impl IntoIterator<Item = Arc<dyn Agent>>) -> Result<Self> {
        let mut registry = BTreeMap::new();
        for agent in agents {
            let kind = agent.kind();
            if registry.insert(kind, agent).is_some() {
                return Err(PlatformError::DuplicateAgent(kind));
            }
        }
        let missing: Vec<AgentKind> = AgentKind::ALL
            .into_iter()
            .filter(|k| !registry.contains_key(k))
            .collect();
        if !missing.is_empty() {
            return Err(PlatformError::IncompleteRegistry(missing));
        }
        Ok(Self {
            agents: Arc::new(registry),
        })
    }

    /// Dispatch `task` to the agent registered under `agent_type`.
    ///
    /// An unknown type yields an `Error` result naming it (and listing the
    /// valid types) without touching any agent. Otherwise the agent's result
    /// is returned as-is.
    #[tracing::instrument(skip(self, task), fields(agent.type = %agent_type))]
    pub async fn dispatch(&self, agent_type: &str, task: &Task) -> ExecutionResult {
        match agent_type.parse::<AgentKind>() {
            Ok(kind) => self.dispatch_kind(kind, task).await,
            Err(e) => {
                warn!(target: "orchestrator", error = %e, "Rejected dispatch");
                ExecutionResult::unknown_agent(agent_type, &self.list_agent_types())
            }
        }
    }

    pub async fn dispatch_kind(&self, kind: AgentKind, task: &Task) -> ExecutionResult {
        match self.agents.get(&kind) {
            Some(agent) => {
                debug!(target: "orchestrator", agent = %kind, "Dispatching task");
                agent.execute(task).await
            }
            // Unreachable for registries built through `new`/`with_agents`.
            None => ExecutionResult::unknown_agent(kind.as_str(), &self.list_agent_types()),
        }
    }

    pub fn get(&self, kind: AgentKind) -> Option<Arc<dyn Agent>> {
        self.agents.get(&kind).cloned()
    }

    pub fn list_agent_types(&self) -> Vec<&'static str> {
        self.agents.keys().map(|k| k.as_str()).collect()
    }

    pub fn describe_capabilities(&self) -> BTreeMap<&'static str, Vec<&'static str>> {
        self.agents
            .iter()
            .map(|(kind, agent)| (kind.as_str(), agent.capabilities().to_vec()))
            .collect()
    }

    pub fn catalog(&self) -> AgentCatalog {
        AgentCatalog {
            agents: self
                .list_agent_types()
                .into_iter()
                .map(String::from)
                .collect(),
            capabilities: self
                .describe_capabilities()
                .into_iter()
                .map(|(k, caps)| (k.to_string(), caps.into_iter().map(String::from).collect()))
                .collect(),
        }
    }
}
