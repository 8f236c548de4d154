use queue_binder_cli::run_cli;
use tracing::error;

#[tokio::main]
async fn main() {
    // Run CLI and handle errors
    if let Err(e) = run_cli().await {
        error!("CLI error: {}", e);
        eprintln!("Error: {}", e);

        // Exit with appropriate code based on error type
        let exit_code = match e {
            queue_binder_cli::CliError::Configuration { .. } => 1,
            queue_binder_cli::CliError::Resource(_) => 2,
            queue_binder_cli::CliError::Api(_) => 3,
            queue_binder_cli::CliError::Serialization(_) => 4,
        };

        std::process::exit(exit_code);
    }
}
