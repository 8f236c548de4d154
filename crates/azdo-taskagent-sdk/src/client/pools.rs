//! Agent Pool Operations

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::TaskAgentClient;
use crate::error::ApiError;

#[cfg(test)]
#[path = "pools_tests.rs"]
mod tests;

/// Identifier of an agent pool.
///
/// Pool identifiers are positive integers assigned by Azure DevOps when the
/// pool is created at the organization level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PoolId(u32);

impl PoolId {
    /// Create a pool identifier.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the identifier as an integer.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for PoolId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

/// Agent pool metadata as returned by the Distributed Task API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskAgentPool {
    pub id: PoolId,
    pub name: String,
    #[serde(default)]
    pub is_hosted: bool,
    #[serde(default)]
    pub size: Option<u32>,
}

impl TaskAgentClient {
    /// Look up an agent pool by identifier.
    ///
    /// Agent queues borrow their name from the pool they reference, so
    /// resource controllers resolve the pool before creating a queue.
    ///
    /// # Arguments
    ///
    /// * `pool_id` - Organization-level pool identifier
    ///
    /// # Errors
    ///
    /// * `ApiError::NotFound` - No pool with this identifier exists
    /// * `ApiError::AuthorizationFailed` - Insufficient permissions on the organization
    /// * `ApiError::HttpError` - Azure DevOps returned an error
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use azdo_taskagent_sdk::{PoolId, TaskAgentClient};
    /// # async fn example(client: &TaskAgentClient) -> Result<(), Box<dyn std::error::Error>> {
    /// let pool = client.get_agent_pool(PoolId::new(9)).await?;
    /// println!("Pool: {} (hosted: {})", pool.name, pool.is_hosted);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_agent_pool(&self, pool_id: PoolId) -> Result<TaskAgentPool, ApiError> {
        debug!(%pool_id, "fetching agent pool");

        let url = self.endpoint(&format!("_apis/distributedtask/pools/{}", pool_id))?;
        let response = self.get(url).await?;

        // Map HTTP status codes to appropriate errors
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

        // Parse successful response
        response.json().await.map_err(ApiError::from)
    }
}
