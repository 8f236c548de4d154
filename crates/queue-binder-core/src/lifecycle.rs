//! Lifecycle operations for the agent queue resource.
//!
//! Each operation is invoked independently by the orchestrating host with an
//! explicit handle to the remote API; the controller keeps no state between
//! calls. Remote calls are sequential and are never retried here. There is
//! no update operation: the Distributed Task API cannot mutate an existing
//! queue, so configuration changes are applied by destroy-then-recreate.

use azdo_taskagent_sdk::{
    ApiError, QueueId, TaskAgentApi, TaskAgentPoolReference, TaskAgentQueue,
};
use tracing::{debug, info};

use crate::error::ResourceError;
use crate::state::{AgentQueueConfig, AgentQueueState};

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;

/// Create an agent queue from its configuration.
///
/// The referenced pool is resolved first, both to fail fast on a dangling
/// reference and because the queue borrows the pool's name: queues cannot be
/// named independently. Pipeline authorization is explicitly disabled on the
/// new queue. After creation the state is refreshed with [`read`] so the
/// caller observes exactly what the remote system stored.
///
/// # Errors
///
/// * `ResourceError::InvalidConfiguration` - empty project identifier
/// * `ResourceError::PoolLookup` - the referenced pool could not be
///   resolved; the creation call is never issued
/// * `ResourceError::Create` - Azure DevOps failed or rejected the creation
///
/// No identifier is recorded unless creation succeeded.
pub async fn create(
    api: &dyn TaskAgentApi,
    config: &AgentQueueConfig,
) -> Result<AgentQueueState, ResourceError> {
    config.validate()?;

    let pool = api
        .get_agent_pool(config.agent_pool_id)
        .await
        .map_err(|source| ResourceError::PoolLookup {
            pool_id: config.agent_pool_id,
            source,
        })?;

    let queue = TaskAgentQueue {
        name: Some(pool.name),
        pool: Some(TaskAgentPoolReference {
            id: config.agent_pool_id,
            name: None,
            is_hosted: None,
        }),
        ..TaskAgentQueue::default()
    };

    let created = api
        .add_agent_queue(&config.project_id, &queue, false)
        .await
        .map_err(|source| ResourceError::Create { source })?;
    let queue_id = created.id.ok_or(ResourceError::MissingQueueId)?;

    info!(
        %queue_id,
        pool_id = %config.agent_pool_id,
        project_id = %config.project_id,
        "created agent queue"
    );

    let mut state = AgentQueueState::bound(config.project_id.clone(), queue_id);
    state.agent_pool_id = Some(config.agent_pool_id);
    read(api, &mut state).await?;
    Ok(state)
}

/// Refresh local state from the remote queue.
///
/// A not-found response means the queue was deleted outside the tool;
/// clearing the identifier tells the host to schedule recreation rather
/// than failing the refresh. On success the remote record is authoritative
/// for the pool binding and overwrites `agent_pool_id`.
///
/// # Errors
///
/// * `ResourceError::IdentifierParse` - the stored identifier is not an
///   integer; no remote call is made
/// * `ResourceError::Read` - any remote failure other than not-found
pub async fn read(
    api: &dyn TaskAgentApi,
    state: &mut AgentQueueState,
) -> Result<(), ResourceError> {
    let queue_id = state.queue_id()?;

    let queue = match api.get_agent_queue(&state.project_id, queue_id).await {
        Ok(queue) => queue,
        Err(ApiError::NotFound) => {
            debug!(
                %queue_id,
                project_id = %state.project_id,
                "agent queue no longer exists, clearing identifier"
            );
            state.clear_id();
            return Ok(());
        }
        Err(source) => return Err(ResourceError::Read { source }),
    };

    if let Some(pool) = queue.pool {
        state.agent_pool_id = Some(pool.id);
    }

    Ok(())
}

/// Delete the remote queue and unbind the local state.
///
/// The identifier is cleared only after the remote deletion succeeded; on
/// failure it stays intact so the host can attempt the deletion again.
///
/// # Errors
///
/// * `ResourceError::IdentifierParse` - the stored identifier is not an
///   integer; no remote call is made
/// * `ResourceError::Delete` - Azure DevOps failed the deletion
pub async fn delete(
    api: &dyn TaskAgentApi,
    state: &mut AgentQueueState,
) -> Result<(), ResourceError> {
    let queue_id = state.queue_id()?;

    api.delete_agent_queue(&state.project_id, queue_id)
        .await
        .map_err(|source| ResourceError::Delete { source })?;

    info!(%queue_id, project_id = %state.project_id, "deleted agent queue");

    state.clear_id();
    Ok(())
}

/// Normalize a composite import identifier into local state.
///
/// The expected form is `projectid/resourceid`, split on the first `/`.
/// The result carries no pool binding; a subsequent [`read`] fills it in
/// from the remote record.
///
/// # Errors
///
/// * `ResourceError::ImportFormat` - missing separator or an empty part
/// * `ResourceError::ImportIdParse` - the resource part is not an integer
///
/// # Examples
///
/// ```
/// use queue_binder_core::lifecycle::import;
///
/// let state = import("my-project/42").unwrap();
/// assert_eq!(state.project_id, "my-project");
/// assert_eq!(state.id(), Some("42"));
/// ```
pub fn import(composite_id: &str) -> Result<AgentQueueState, ResourceError> {
    let (project_id, raw_id) =
        composite_id
            .split_once('/')
            .ok_or_else(|| ResourceError::ImportFormat {
                value: composite_id.to_string(),
            })?;

    if project_id.is_empty() || raw_id.is_empty() {
        return Err(ResourceError::ImportFormat {
            value: composite_id.to_string(),
        });
    }

    if raw_id.parse::<QueueId>().is_err() {
        return Err(ResourceError::ImportIdParse {
            value: raw_id.to_string(),
        });
    }

    Ok(AgentQueueState::from_persisted(project_id, raw_id))
}
