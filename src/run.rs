//! Runtime execution logic.
//!
//! Builds the production components from a validated configuration and
//! runs the poll loop until a shutdown signal arrives.

use ifwatch::config::ValidatedConfig;
use ifwatch::monitor::PollLoop;
use ifwatch::network::{self, platform::PlatformFetcher};
use ifwatch::webhook::{HttpWebhook, ReqwestClient};
use thiserror::Error;
use tokio::runtime::Runtime;

/// Errors that can occur while running the application.
#[derive(Debug, Error)]
pub enum RunError {
    /// The async runtime could not be created.
    #[error("Failed to build async runtime: {0}")]
    Runtime(#[source] std::io::Error),

    /// The shutdown signal handler could not be installed.
    #[error("Failed to listen for shutdown signal: {0}")]
    Signal(#[source] std::io::Error),
}

/// Builds the single-threaded runtime the poll loop runs on.
///
/// # Errors
///
/// Returns [`RunError::Runtime`] if the runtime cannot be created.
pub fn build_runtime() -> Result<Runtime, RunError> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(RunError::Runtime)
}

/// Creates the webhook sender for the configured endpoint.
pub fn create_webhook(config: &ValidatedConfig) -> HttpWebhook<ReqwestClient> {
    HttpWebhook::new(ReqwestClient::new(), config.url.clone()).with_dry_run(config.dry_run)
}

/// Executes the main monitoring loop.
///
/// Returns once a shutdown signal (Ctrl+C, or SIGTERM on Unix) is received.
///
/// # Errors
///
/// Returns an error if the signal handler cannot be installed.
pub async fn execute(config: ValidatedConfig) -> Result<(), RunError> {
    let webhook = create_webhook(&config);
    if config.dry_run {
        tracing::info!("Dry-run mode: notifications will be logged, not sent");
    }

    let hostname = network::hostname();
    tracing::info!(
        "Starting network interface monitor on {hostname} with {}s interval",
        config.interval.as_secs()
    );

    let mut monitor = PollLoop::new(PlatformFetcher::new(), webhook, hostname, config.interval);

    tokio::select! {
        result = shutdown_signal() => {
            result.map_err(RunError::Signal)?;
            tracing::info!("Shutdown signal received, stopping monitor");
            Ok(())
        }
        never = monitor.run() => match never {},
    }
}

/// Waits for Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() -> std::io::Result<()> {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let mut terminate = signal(SignalKind::terminate())?;
        tokio::select! {
            result = tokio::signal::ctrl_c() => result,
            _ = terminate.recv() => Ok(()),
        }
    }

    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await
    }
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
