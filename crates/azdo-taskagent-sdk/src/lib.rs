//! # Azure DevOps Task Agent SDK
//!
//! Typed client for the Azure DevOps Distributed Task REST API, covering the
//! agent pool and agent queue surface used by the queue-binder resource
//! controller.
//!
//! This SDK provides:
//! - Personal access token authentication
//! - Agent pool lookup by identifier
//! - Agent queue create, read, and delete operations
//! - The [`TaskAgentApi`] trait so callers can inject test doubles
//!
//! # Examples
//!
//! ```rust,no_run
//! use azdo_taskagent_sdk::{ClientConfig, Credentials, PoolId, TaskAgentClient};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = TaskAgentClient::builder(Credentials::personal_access_token("secret"))
//!     .config(
//!         ClientConfig::default()
//!             .with_organization_url("https://dev.azure.com/my-org"),
//!     )
//!     .build()?;
//!
//! let pool = client.get_agent_pool(PoolId::new(9)).await?;
//! println!("Pool: {}", pool.name);
//! # Ok(())
//! # }
//! ```

// Public modules
pub mod auth;
pub mod client;
pub mod error;

// Re-export commonly used types at crate root for convenience
pub use auth::Credentials;
pub use client::{
    ClientConfig, ClientConfigBuilder, PoolId, QueueId, TaskAgentApi, TaskAgentClient,
    TaskAgentClientBuilder, TaskAgentPool, TaskAgentPoolReference, TaskAgentQueue,
};
pub use error::ApiError;
