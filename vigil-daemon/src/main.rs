//! Vigil - Headless Keep-Alive Daemon
//!
//! For every credential token in the token file:
//! - bootstraps a session against the remote service
//! - runs a fixed-interval heartbeat loop to keep the session active
//!
//! Runs until interrupted; Ctrl+C / SIGTERM cancel every account loop
//! cooperatively before exit.

use anyhow::Result;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;
use vigil_core::{tokens, Endpoints, OrchestratorConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_env_filter(EnvFilter::new(&cli.log_level)).init();

    info!("🚀 Vigil starting...");

    // Fatal: there is no partial-success mode for the token source
    let tokens = tokens::load_tokens(&cli.token_file)?;
    info!("📊 Loaded {} token(s) from {}", tokens.len(), cli.token_file.display());

    if let Some(proxy) = &cli.proxy {
        info!("🔀 Routing all traffic through {}", proxy);
    }

    let shutdown = CancellationToken::new();
    {
        let shutdown = shutdown.clone();
        tokio::spawn(async move {
            shutdown_signal().await;
            shutdown.cancel();
        });
    }

    let config = OrchestratorConfig {
        endpoints: Endpoints::default(),
        proxy: cli.proxy,
        max_concurrency: cli.max_concurrency,
    };

    vigil_core::run(tokens, config, shutdown).await?;

    info!("👋 Program terminated");
    Ok(())
}

#[allow(
    clippy::expect_used,
    reason = "Signal handlers are critical infrastructure, panic is appropriate on failure"
)]
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("🛑 Received Ctrl+C, initiating graceful shutdown..."),
        () = terminate => info!("🛑 Received SIGTERM, initiating graceful shutdown..."),
    }
}
