//! Error types for the agent queue resource controller.
//!
//! Every remote failure is wrapped with the operation it occurred in and
//! surfaced to the orchestrating host; nothing is retried here. The one
//! deliberate exception is the not-found response during a refresh, which
//! the read operation absorbs by clearing the local identifier.

use azdo_taskagent_sdk::{ApiError, PoolId};
use thiserror::Error;

/// Errors surfaced by agent queue lifecycle operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The referenced agent pool could not be resolved during create.
    #[error("Error looking up referenced agent pool {pool_id}: {source}")]
    PoolLookup {
        pool_id: PoolId,
        #[source]
        source: ApiError,
    },

    /// Azure DevOps rejected or failed the queue creation call.
    #[error("Error creating agent queue: {source}")]
    Create {
        #[source]
        source: ApiError,
    },

    /// Azure DevOps failed while the queue was being refreshed.
    #[error("Error reading the agent queue resource: {source}")]
    Read {
        #[source]
        source: ApiError,
    },

    /// Azure DevOps failed while the queue was being deleted.
    #[error("Error deleting agent queue: {source}")]
    Delete {
        #[source]
        source: ApiError,
    },

    /// The creation response did not carry the assigned queue identifier.
    #[error("Agent queue was created but no identifier was returned")]
    MissingQueueId,

    /// The locally stored identifier is not a valid integer.
    #[error("Queue ID was unexpectedly not a valid integer: {value:?}")]
    IdentifierParse { value: String },

    /// An import identifier did not split into project and resource parts.
    #[error("unexpected format of ID ({value}), expected projectid/resourceid")]
    ImportFormat { value: String },

    /// An import identifier's resource part is not an integer.
    #[error("Agent queue ID ({value}) isn't a valid integer")]
    ImportIdParse { value: String },

    /// The configuration failed validation before any remote call was made.
    #[error("Invalid agent queue configuration: {message}")]
    InvalidConfiguration { message: String },
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
