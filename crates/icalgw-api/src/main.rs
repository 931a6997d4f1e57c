//! iCal export gateway entry point.
//!
//! Binary name: `icalgw`
//!
//! Loads configuration from `ICALGW_*` environment variables, wires the
//! backend transport, and serves the gateway until Ctrl+C or SIGTERM.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use icalgw_api::http::router::build_router;
use icalgw_api::state::AppState;
use icalgw_types::config::GatewayConfig;

#[derive(Debug, Parser)]
#[command(name = "icalgw", about = "HTTP gateway exposing the iCal export endpoint")]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1", env = "ICALGW_HOST")]
    host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 8787, env = "ICALGW_PORT")]
    port: u16,

    /// Increase log verbosity (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "info,icalgw=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)),
        )
        .with_target(false)
        .init();

    let config = GatewayConfig::from_env()?;

    // Boot-time completeness check: log the gap but keep serving, so a
    // misconfigured deployment answers requests with a 500 naming the
    // missing variable instead of crash-looping.
    if let Err(e) = config.credentials() {
        tracing::warn!(error = %e, "gateway configuration incomplete");
    }
    tracing::info!(
        backend = %config.backend_url,
        mode = %config.mode,
        timeout_secs = config.timeout.as_secs(),
        "backend transport configured"
    );

    let state = AppState::new(config);
    let router = build_router(state);

    let addr = format!("{}:{}", cli.host, cli.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "iCal export gateway listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

/// Wait for Ctrl+C or SIGTERM for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
