//! # Queue-Binder Core
//!
//! Resource controller for Azure DevOps agent queues: the project-scoped
//! bindings that expose an agent pool's capacity to a single project.
//!
//! This library provides:
//! - A typed configuration and state model for the agent queue resource
//! - Create, read, delete, and import lifecycle operations
//! - A schema descriptor for the orchestrating host's plan/diff engine
//!
//! There is no update operation. The Distributed Task API cannot mutate an
//! existing queue, so both configuration fields force destroy-then-recreate;
//! the schema marks them accordingly.
//!
//! The controller holds no connection state of its own: every operation
//! receives an explicit [`TaskAgentApi`](azdo_taskagent_sdk::TaskAgentApi)
//! handle, and the host is responsible for never running two operations on
//! the same resource instance concurrently.
//!
//! ## Module Organization
//!
//! - [`error`] - Error types for all lifecycle operations
//! - [`schema`] - Field descriptors consumed by the orchestrating host
//! - [`state`] - Configuration and mirrored resource state
//! - [`lifecycle`] - The create/read/delete/import operations

// Module declarations
pub mod error;
pub mod lifecycle;
pub mod schema;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use error::ResourceError;
pub use lifecycle::{create, delete, import, read};
pub use schema::{
    agent_queue_schema, suppress_case_difference, FieldDescriptor, ResourceSchema, ValueKind,
};
pub use state::{AgentQueueConfig, AgentQueueState};
