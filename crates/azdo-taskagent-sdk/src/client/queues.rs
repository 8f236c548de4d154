//! Agent Queue Operations

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::pools::PoolId;
use crate::client::TaskAgentClient;
use crate::error::ApiError;

#[cfg(test)]
#[path = "queues_tests.rs"]
mod tests;

/// Identifier of an agent queue.
///
/// Queue identifiers are positive integers assigned by Azure DevOps when the
/// queue is created; they are scoped to the organization, not the project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueueId(u32);

impl QueueId {
    /// Create a queue identifier.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the identifier as an integer.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for QueueId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for QueueId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// Reference to the agent pool backing a queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAgentPoolReference {
    pub id: PoolId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_hosted: Option<bool>,
}

/// Agent queue as exchanged with the Distributed Task API.
///
/// Also used as the request body when creating a queue, which is why every
/// field is optional: the service assigns `id` and `project_id`, and `name`
/// is copied from the referenced pool by the caller.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAgentQueue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<QueueId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pool: Option<TaskAgentPoolReference>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl TaskAgentClient {
    /// Create an agent queue in a project.
    ///
    /// The queue body must reference the backing pool; Azure DevOps assigns
    /// the queue identifier and echoes the created record back.
    ///
    /// # Arguments
    ///
    /// * `project` - Project identifier or name
    /// * `queue` - Queue record to submit (pool reference and name set)
    /// * `authorize_pipelines` - Whether all pipelines may use the queue
    ///
    /// # Errors
    ///
    /// * `ApiError::InvalidRequest` - Azure DevOps rejected the queue body
    /// * `ApiError::AuthorizationFailed` - Insufficient permissions on the project
    /// * `ApiError::HttpError` - Azure DevOps returned an error
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use azdo_taskagent_sdk::{PoolId, TaskAgentClient, TaskAgentPoolReference, TaskAgentQueue};
    /// # async fn example(client: &TaskAgentClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let queue = TaskAgentQueue {
    ///     name: Some("Default".to_string()),
    ///     pool: Some(TaskAgentPoolReference {
    ///         id: PoolId::new(9),
    ///         name: None,
    ///         is_hosted: None,
    ///     }),
    ///     ..TaskAgentQueue::default()
    /// };
    /// let created = client.add_agent_queue("my-project", &queue, false).await?;
    /// println!("Queue id: {:?}", created.id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_agent_queue(
        &self,
        project: &str,
        queue: &TaskAgentQueue,
        authorize_pipelines: bool,
    ) -> Result<TaskAgentQueue, ApiError> {
        debug!(project, authorize_pipelines, "creating agent queue");

        let mut url = self.endpoint(&format!("{}/_apis/distributedtask/queues", project))?;
        url.query_pairs_mut()
            .append_pair("authorizePipelines", if authorize_pipelines { "true" } else { "false" });

        let response = self.post(url, queue).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                404 => ApiError::NotFound,
                403 => ApiError::AuthorizationFailed,
                401 => ApiError::AuthenticationFailed,
                400 => {
                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    ApiError::InvalidRequest { message }
                }
                _ => {
                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    ApiError::HttpError {
                        status: status.as_u16(),
                        message,
                    }
                }
            });
        }

        response.json().await.map_err(ApiError::from)
    }

    /// Fetch an agent queue by identifier.
    ///
    /// # Arguments
    ///
    /// * `project` - Project identifier or name
    /// * `queue_id` - Queue identifier
    ///
    /// # Errors
    ///
    /// * `ApiError::NotFound` - The queue does not exist in this project
    /// * `ApiError::AuthorizationFailed` - Insufficient permissions
    /// * `ApiError::HttpError` - Azure DevOps returned an error
    pub async fn get_agent_queue(
        &self,
        project: &str,
        queue_id: QueueId,
    ) -> Result<TaskAgentQueue, ApiError> {
        debug!(project, %queue_id, "fetching agent queue");

        let url = self.endpoint(&format!(
            "{}/_apis/distributedtask/queues/{}",
            project, queue_id
        ))?;
        let response = self.get(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                404 => ApiError::NotFound,
                403 => ApiError::AuthorizationFailed,
                401 => ApiError::AuthenticationFailed,
                _ => {
                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    ApiError::HttpError {
                        status: status.as_u16(),
                        message,
                    }
                }
            });
        }

        response.json().await.map_err(ApiError::from)
    }

    /// Delete an agent queue.
    ///
    /// # Arguments
    ///
    /// * `project` - Project identifier or name
    /// * `queue_id` - Queue identifier
    ///
    /// # Errors
    ///
    /// * `ApiError::NotFound` - The queue does not exist in this project
    /// * `ApiError::AuthorizationFailed` - Insufficient permissions
    /// * `ApiError::HttpError` - Azure DevOps returned an error
    pub async fn delete_agent_queue(
        &self,
        project: &str,
        queue_id: QueueId,
    ) -> Result<(), ApiError> {
        debug!(project, %queue_id, "deleting agent queue");

        let url = self.endpoint(&format!(
            "{}/_apis/distributedtask/queues/{}",
            project, queue_id
        ))?;
        let response = self.delete(url).await?;

        let status = response.status();
        if !status.is_success() {
            return Err(match status.as_u16() {
                404 => ApiError::NotFound,
                403 => ApiError::AuthorizationFailed,
                401 => ApiError::AuthenticationFailed,
                _ => {
                    let message = response
                        .text()
                        .await
                        .unwrap_or_else(|_| "Unknown error".to_string());
                    ApiError::HttpError {
                        status: status.as_u16(),
                        message,
                    }
                }
            });
        }

        Ok(())
    }
}
