//! Azure DevOps Task Agent client for authenticated operations.
//!
//! This module provides the main `TaskAgentClient` for making authenticated
//! calls to the Azure DevOps Distributed Task REST API. It covers the agent
//! pool and agent queue surface and exposes the [`TaskAgentApi`] trait so
//! resource controllers can depend on the operations rather than on the
//! concrete HTTP client.

mod pools;
mod queues;

use std::time::Duration;

use async_trait::async_trait;
use url::Url;

use crate::auth::Credentials;
use crate::error::ApiError;

pub use pools::{PoolId, TaskAgentPool};
pub use queues::{QueueId, TaskAgentPoolReference, TaskAgentQueue};

/// Configuration for Azure DevOps API client behavior.
///
/// Controls the organization endpoint, API version, timeouts, and the user
/// agent string.
///
/// # Examples
///
/// ```
/// use azdo_taskagent_sdk::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_organization_url("https://dev.azure.com/my-org")
///     .with_timeout(Duration::from_secs(60));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// User agent string for API requests
    pub user_agent: String,
    /// Request timeout duration
    pub timeout: Duration,
    /// Azure DevOps organization URL, e.g. `https://dev.azure.com/my-org`
    pub organization_url: String,
    /// REST API version sent with every request
    pub api_version: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: "azdo-taskagent-sdk/0.1.0".to_string(),
            timeout: Duration::from_secs(30),
            organization_url: "https://dev.azure.com".to_string(),
            api_version: "7.1-preview.1".to_string(),
        }
    }
}

impl ClientConfig {
    /// Create a new builder for client configuration.
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::new()
    }

    /// Set the user agent string.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the Azure DevOps organization URL.
    pub fn with_organization_url(mut self, url: impl Into<String>) -> Self {
        self.organization_url = url.into();
        self
    }

    /// Set the REST API version.
    pub fn with_api_version(mut self, api_version: impl Into<String>) -> Self {
        self.api_version = api_version.into();
        self
    }
}

/// Builder for constructing `ClientConfig` instances.
#[derive(Debug)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new configuration builder with defaults.
    pub fn new() -> Self {
        Self {
            config: ClientConfig::default(),
        }
    }

    /// Set the user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.config.user_agent = user_agent.into();
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the Azure DevOps organization URL.
    pub fn organization_url(mut self, url: impl Into<String>) -> Self {
        self.config.organization_url = url.into();
        self
    }

    /// Set the REST API version.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.config.api_version = api_version.into();
        self
    }

    /// Build the final configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

impl Default for ClientConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The remote operations a task-agent resource controller depends on.
///
/// `TaskAgentClient` is the production implementation; tests substitute an
/// in-memory double. All methods map a not-found response to
/// [`ApiError::NotFound`] so callers can branch on the signal.
#[async_trait]
pub trait TaskAgentApi: Send + Sync {
    /// Look up an agent pool by identifier.
    async fn get_agent_pool(&self, pool_id: PoolId) -> Result<TaskAgentPool, ApiError>;

    /// Create an agent queue in a project.
    ///
    /// `authorize_pipelines` controls whether every pipeline in the project
    /// is granted access to the new queue.
    async fn add_agent_queue(
        &self,
        project: &str,
        queue: &TaskAgentQueue,
        authorize_pipelines: bool,
    ) -> Result<TaskAgentQueue, ApiError>;

    /// Fetch an agent queue by identifier.
    async fn get_agent_queue(
        &self,
        project: &str,
        queue_id: QueueId,
    ) -> Result<TaskAgentQueue, ApiError>;

    /// Delete an agent queue.
    async fn delete_agent_queue(&self, project: &str, queue_id: QueueId) -> Result<(), ApiError>;
}

/// Azure DevOps Task Agent API client.
///
/// The main client for the Distributed Task REST surface. Handles personal
/// access token authentication and request construction; the caller owns
/// retry policy and cancellation.
///
/// # Examples
///
/// ```no_run
/// # use azdo_taskagent_sdk::{ClientConfig, Credentials, TaskAgentClient};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = TaskAgentClient::builder(Credentials::personal_access_token("secret"))
///     .config(ClientConfig::default().with_organization_url("https://dev.azure.com/my-org"))
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct TaskAgentClient {
    credentials: Credentials,
    http_client: reqwest::Client,
    config: ClientConfig,
}

impl TaskAgentClient {
    /// Create a new builder for constructing a task-agent client.
    ///
    /// # Arguments
    ///
    /// * `credentials` - Personal access token credential for the organization
    pub fn builder(credentials: Credentials) -> TaskAgentClientBuilder {
        TaskAgentClientBuilder::new(credentials)
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a request URL under the organization, with the API version
    /// query parameter applied.
    ///
    /// `path` is the route below the organization URL, without a leading
    /// slash (e.g. `_apis/distributedtask/pools/9`).
    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let base = self.config.organization_url.trim_end_matches('/');
        let mut url =
            Url::parse(&format!("{}/{}", base, path)).map_err(|e| ApiError::Configuration {
                message: format!("Invalid organization URL: {}", e),
            })?;
        url.query_pairs_mut()
            .append_pair("api-version", &self.config.api_version);
        Ok(url)
    }

    /// Make an authenticated GET request.
    ///
    /// Does NOT return an error for non-2xx status codes; the operation
    /// methods map status codes to domain errors.
    pub(crate) async fn get(&self, url: Url) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http_client
            .get(url)
            .header("Authorization", self.credentials.authorization_header())
            .header("Accept", "application/json")
            .send()
            .await?;

        Ok(response)
    }

    /// Make an authenticated POST request with a JSON body.
    pub(crate) async fn post(
        &self,
        url: Url,
        body: &impl serde::Serialize,
    ) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http_client
            .post(url)
            .header("Authorization", self.credentials.authorization_header())
            .header("Accept", "application/json")
            .json(body)
            .send()
            .await?;

        Ok(response)
    }

    /// Make an authenticated DELETE request.
    pub(crate) async fn delete(&self, url: Url) -> Result<reqwest::Response, ApiError> {
        let response = self
            .http_client
            .delete(url)
            .header("Authorization", self.credentials.authorization_header())
            .header("Accept", "application/json")
            .send()
            .await?;

        Ok(response)
    }
}

impl std::fmt::Debug for TaskAgentClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskAgentClient")
            .field("config", &self.config)
            .field("credentials", &self.credentials)
            .finish()
    }
}

#[async_trait]
impl TaskAgentApi for TaskAgentClient {
    async fn get_agent_pool(&self, pool_id: PoolId) -> Result<TaskAgentPool, ApiError> {
        TaskAgentClient::get_agent_pool(self, pool_id).await
    }

    async fn add_agent_queue(
        &self,
        project: &str,
        queue: &TaskAgentQueue,
        authorize_pipelines: bool,
    ) -> Result<TaskAgentQueue, ApiError> {
        TaskAgentClient::add_agent_queue(self, project, queue, authorize_pipelines).await
    }

    async fn get_agent_queue(
        &self,
        project: &str,
        queue_id: QueueId,
    ) -> Result<TaskAgentQueue, ApiError> {
        TaskAgentClient::get_agent_queue(self, project, queue_id).await
    }

    async fn delete_agent_queue(&self, project: &str, queue_id: QueueId) -> Result<(), ApiError> {
        TaskAgentClient::delete_agent_queue(self, project, queue_id).await
    }
}

/// Builder for constructing `TaskAgentClient` instances.
pub struct TaskAgentClientBuilder {
    credentials: Credentials,
    config: Option<ClientConfig>,
}

impl TaskAgentClientBuilder {
    /// Create a new client builder.
    fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            config: None,
        }
    }

    /// Set the client configuration.
    ///
    /// If not set, uses `ClientConfig::default()`.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Build the task-agent client.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Configuration` if the HTTP client cannot be created.
    pub fn build(self) -> Result<TaskAgentClient, ApiError> {
        let config = self.config.unwrap_or_default();

        // Build reqwest client with timeout and user agent
        let http_client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(|e| ApiError::Configuration {
                message: format!("Failed to create HTTP client: {}", e),
            })?;

        Ok(TaskAgentClient {
            credentials: self.credentials,
            http_client,
            config,
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
