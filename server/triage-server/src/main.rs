use std::path::PathBuf;

use clap::Parser;
use error_common::{log_error, Result, ServiceError};
use logger_redacted::{init_logging, LoggerConfig};
use tracing::info;

use triage_server::{create_app, ServerConfig, TriageServer};

/// Symptom Triage HTTP Server
#[derive(Parser, Debug)]
#[command(name = "triage-server")]
#[command(about = "Symptom triage HTTP API server")]
struct Args {
    /// Server bind address, overrides the configuration file
    #[arg(long)]
    host: Option<String>,

    /// Server port, overrides the configuration file
    #[arg(short, long)]
    port: Option<u16>,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    init_logging(&LoggerConfig::from_env().verbose(args.verbose))
        .map_err(|e| ServiceError::ConfigError(e.to_string()))?;

    if let Err(e) = run(args).await {
        log_error("triage-server", &e);
        return Err(e);
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let mut config = ServerConfig::load(args.config.as_deref())
        .map_err(|e| ServiceError::ConfigError(format!("Failed to load server configuration: {e}")))?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(port) = args.port {
        config.port = port;
    }

    info!("🏥 Starting {}", config.name);
    info!("📋 Version: {}", env!("CARGO_PKG_VERSION"));

    let server = TriageServer::from_env(config)?;
    let addr = server.config.bind_address();
    let app = create_app(server);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| ServiceError::NetworkError(format!("Failed to bind to {addr}: {e}")))?;

    info!("🚀 Symptom triage server running on http://{addr}");
    info!("📋 Health check available at: http://{addr}/health");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServiceError::ServerError(format!("HTTP server error: {e}")))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
}
