use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::traits::Agent;

/// Registry of agents available to the host orchestration system.
#[derive(Default)]
pub struct AgentRegistry {
    agents: HashMap<String, Arc<dyn Agent>>,
}

impl AgentRegistry {
    pub fn new() -> Self {
        Self {
            agents: HashMap::new(),
        }
    }

    pub fn register(&mut self, agent: Arc<dyn Agent>) {
        debug!(agent = %agent.id(), "Registering agent");
        self.agents.insert(agent.id().to_string(), agent);
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn Agent>> {
        self.agents.get(id).cloned()
    }

    pub fn list(&self) -> Vec<String> {
        self.agents.keys().cloned().collect()
    }

    /// Descriptive metadata records for every registered agent, for discovery.
    pub fn describe_all(&self) -> Vec<Value> {
        self.agents.values().map(|a| a.metadata()).collect()
    }
}
