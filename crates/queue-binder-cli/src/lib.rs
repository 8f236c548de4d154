//! # Queue-Binder CLI
//!
//! Command-line interface for operating Azure DevOps agent queues by hand.
//!
//! This module provides CLI commands for:
//! - Creating an agent queue that binds a pool to a project
//! - Showing the refreshed state of an existing queue
//! - Deleting a queue
//! - Normalizing a `projectid/resourceid` composite into local state
//!
//! The personal access token is read from `AZDO_PERSONAL_ACCESS_TOKEN` only;
//! it is never accepted as a command-line argument.

use clap::{Parser, Subcommand};

use azdo_taskagent_sdk::{
    ApiError, ClientConfig, Credentials, PoolId, QueueId, TaskAgentClient,
};
use queue_binder_core::{AgentQueueConfig, AgentQueueState, ResourceError};

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;

/// Environment variable holding the personal access token.
pub const PAT_ENV: &str = "AZDO_PERSONAL_ACCESS_TOKEN";

// ============================================================================
// CLI Structure
// ============================================================================

/// Queue-Binder CLI - agent queue management for Azure DevOps
#[derive(Parser)]
#[command(name = "queue-binder")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage Azure DevOps agent queues")]
#[command(
    long_about = "Queue-Binder creates, inspects, and deletes the project-scoped agent queues that expose an agent pool to a project"
)]
pub struct Cli {
    /// Azure DevOps organization URL, e.g. https://dev.azure.com/my-org
    #[arg(short, long, env = "AZDO_ORG_SERVICE_URL")]
    pub organization_url: String,

    /// Logging level
    #[arg(short, long, default_value = "info")]
    pub log_level: String,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Create an agent queue binding a pool to a project
    Create {
        /// Project identifier or name
        #[arg(short, long)]
        project: String,

        /// Identifier of the agent pool to expose
        #[arg(long)]
        pool_id: u32,
    },

    /// Show the refreshed state of an agent queue
    Show {
        /// Project identifier or name
        #[arg(short, long)]
        project: String,

        /// Queue identifier
        #[arg(long)]
        id: u32,
    },

    /// Delete an agent queue
    Delete {
        /// Project identifier or name
        #[arg(short, long)]
        project: String,

        /// Queue identifier
        #[arg(long)]
        id: u32,
    },

    /// Normalize a projectid/resourceid composite into local state
    Import {
        /// Composite identifier, e.g. my-project/42
        composite_id: String,
    },
}

/// Output format options
#[derive(Clone, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

// ============================================================================
// CLI Error Types
// ============================================================================

/// CLI-specific errors
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Output serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

// ============================================================================
// Main Entry Point
// ============================================================================

/// Main CLI entry point
pub async fn run_cli() -> Result<(), CliError> {
    let cli = Cli::parse();

    // Initialize logging
    initialize_logging(&cli);

    // Execute command
    match cli.command {
        Commands::Create { project, pool_id } => {
            let client = build_client(&cli.organization_url)?;
            execute_create(&client, project, pool_id, &cli.format).await
        }
        Commands::Show { project, id } => {
            let client = build_client(&cli.organization_url)?;
            execute_show(&client, project, id, &cli.format).await
        }
        Commands::Delete { project, id } => {
            let client = build_client(&cli.organization_url)?;
            execute_delete(&client, project, id).await
        }
        Commands::Import { composite_id } => execute_import(&composite_id, &cli.format),
    }
}

/// Initialize logging based on CLI arguments
fn initialize_logging(cli: &Cli) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level)),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the task-agent client from the environment-supplied credential.
fn build_client(organization_url: &str) -> Result<TaskAgentClient, CliError> {
    let token = std::env::var(PAT_ENV).map_err(|_| CliError::Configuration {
        message: format!("{} is not set", PAT_ENV),
    })?;

    let client = TaskAgentClient::builder(Credentials::personal_access_token(token))
        .config(ClientConfig::default().with_organization_url(organization_url))
        .build()?;

    Ok(client)
}

// ============================================================================
// Command Implementations
// ============================================================================

/// Execute the create command
async fn execute_create(
    client: &TaskAgentClient,
    project: String,
    pool_id: u32,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let config = AgentQueueConfig::new(PoolId::new(pool_id), project);
    let state = queue_binder_core::create(client, &config).await?;

    print!("{}", format_state(&state, format)?);
    Ok(())
}

/// Execute the show command
async fn execute_show(
    client: &TaskAgentClient,
    project: String,
    id: u32,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let mut state = AgentQueueState::bound(project, QueueId::new(id));
    queue_binder_core::read(client, &mut state).await?;

    if !state.is_bound() {
        println!("agent queue {} not found in project {}", id, state.project_id);
        return Ok(());
    }

    print!("{}", format_state(&state, format)?);
    Ok(())
}

/// Execute the delete command
async fn execute_delete(client: &TaskAgentClient, project: String, id: u32) -> Result<(), CliError> {
    let mut state = AgentQueueState::bound(project, QueueId::new(id));
    queue_binder_core::delete(client, &mut state).await?;

    println!("deleted agent queue {}", id);
    Ok(())
}

/// Execute the import command
fn execute_import(composite_id: &str, format: &OutputFormat) -> Result<(), CliError> {
    let state = queue_binder_core::import(composite_id)?;

    print!("{}", format_state(&state, format)?);
    Ok(())
}

/// Render a state record in the requested output format.
fn format_state(state: &AgentQueueState, format: &OutputFormat) -> Result<String, CliError> {
    match format {
        OutputFormat::Text => {
            let pool = state
                .agent_pool_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "(unknown)".to_string());
            Ok(format!(
                "id:            {}\nagent_pool_id: {}\nproject_id:    {}\n",
                state.id().unwrap_or("(none)"),
                pool,
                state.project_id
            ))
        }
        OutputFormat::Json => {
            let mut rendered = serde_json::to_string_pretty(state)?;
            rendered.push('\n');
            Ok(rendered)
        }
    }
}
