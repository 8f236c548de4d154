//! Configuration and mirrored state for the agent queue resource.

use azdo_taskagent_sdk::{PoolId, QueueId};
use serde::{Deserialize, Serialize};

use crate::error::ResourceError;

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;

/// Desired configuration for an agent queue.
///
/// Both fields are immutable once the queue exists; the schema marks them
/// as forcing replacement. The queue's name is not configurable at all: it
/// is always copied from the pool referenced by `agent_pool_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentQueueConfig {
    pub agent_pool_id: PoolId,
    pub project_id: String,
}

impl AgentQueueConfig {
    /// Create a configuration record.
    pub fn new(agent_pool_id: PoolId, project_id: impl Into<String>) -> Self {
        Self {
            agent_pool_id,
            project_id: project_id.into(),
        }
    }

    /// Validate the configuration before any remote call is made.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::InvalidConfiguration` if `project_id` is
    /// empty after trimming.
    pub fn validate(&self) -> Result<(), ResourceError> {
        if self.project_id.trim().is_empty() {
            return Err(ResourceError::InvalidConfiguration {
                message: "project_id must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Locally mirrored state of an agent queue resource.
///
/// The identifier is kept in the decimal string form the host persists. An
/// absent identifier means the resource is not (or no longer) bound to a
/// remote queue; a refresh that finds the queue gone clears it rather than
/// failing, which is how external deletion is signaled to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentQueueState {
    id: Option<String>,
    pub agent_pool_id: Option<PoolId>,
    pub project_id: String,
}

impl AgentQueueState {
    /// State referencing an existing remote queue.
    pub fn bound(project_id: impl Into<String>, queue_id: QueueId) -> Self {
        Self {
            id: Some(queue_id.to_string()),
            agent_pool_id: None,
            project_id: project_id.into(),
        }
    }

    /// State restored from host storage; the identifier is taken as-is and
    /// only validated when an operation needs it.
    pub fn from_persisted(project_id: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            agent_pool_id: None,
            project_id: project_id.into(),
        }
    }

    /// The stored identifier, if the resource is bound.
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Whether the state references a remote queue.
    pub fn is_bound(&self) -> bool {
        self.id.is_some()
    }

    /// Parse the stored identifier for use in a remote call.
    ///
    /// # Errors
    ///
    /// Returns `ResourceError::IdentifierParse` when the identifier is
    /// missing or not a valid integer.
    pub fn queue_id(&self) -> Result<QueueId, ResourceError> {
        let value = self.id.as_deref().unwrap_or_default();
        value
            .parse::<QueueId>()
            .map_err(|_| ResourceError::IdentifierParse {
                value: value.to_string(),
            })
    }

    pub(crate) fn clear_id(&mut self) {
        self.id = None;
    }
}
