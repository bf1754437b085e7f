//! TaskDeck MCP server binary.
//!
//! Bridges a task-management REST API into MCP tools, resources, and
//! prompts. Runs over stdio, streamable HTTP, or both.

use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use clap::Parser;
use miette::Diagnostic;
use rmcp::ServiceExt;
use taskdeck::client::{ApiError, ApiClient, TaskApi};
use taskdeck::config::{Config, ConfigError, Transport};
use taskdeck::mcp::{TaskDeckServer, create_mcp_service};
use taskdeck::monitor::MemoryMetrics;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Error, Diagnostic, Debug)]
enum BinaryError {
    #[error("Configuration error: {0}")]
    #[diagnostic(code(taskdeck::binary::config))]
    Config(#[from] ConfigError),

    #[error("API client error: {0}")]
    #[diagnostic(code(taskdeck::binary::api))]
    Api(#[from] ApiError),

    #[error("I/O error: {0}")]
    #[diagnostic(code(taskdeck::binary::io))]
    Io(#[from] std::io::Error),

    #[error("MCP transport error: {0}")]
    #[diagnostic(code(taskdeck::binary::mcp))]
    Mcp(String),
}

#[derive(Parser)]
#[command(name = "taskdeck-mcp")]
#[command(author, version, about = "MCP server for the TaskDeck task API", long_about = None)]
struct Cli {
    /// Override the upstream API base URL (default: TASKDECK_API_URL env)
    #[arg(long)]
    api_url: Option<String>,

    /// Transport to run: stdio, http, or both (default: TASKDECK_TRANSPORT env)
    #[arg(long)]
    transport: Option<String>,

    /// HTTP bind host (http/both transports only)
    #[arg(long)]
    host: Option<String>,

    /// HTTP bind port (http/both transports only)
    #[arg(short, long)]
    port: Option<u16>,
}

/// Logs go to stderr: stdout belongs to the stdio transport.
fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn load_config(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = Config::from_env()?;
    if let Some(url) = &cli.api_url {
        config.api_url = url.trim_end_matches('/').to_string();
    }
    if let Some(transport) = &cli.transport {
        config.transport = transport.parse()?;
    }
    if let Some(host) = &cli.host {
        config.http_host = host.clone();
    }
    if let Some(port) = cli.port {
        config.http_port = port;
    }
    Ok(config)
}

async fn run_stdio(server: TaskDeckServer<ApiClient>) -> Result<(), BinaryError> {
    info!("serving MCP over stdio");
    let service = server
        .serve(rmcp::transport::stdio())
        .await
        .map_err(|e| BinaryError::Mcp(e.to_string()))?;
    service
        .waiting()
        .await
        .map_err(|e| BinaryError::Mcp(e.to_string()))?;
    Ok(())
}

async fn run_http(
    api: Arc<ApiClient>,
    metrics: Arc<MemoryMetrics>,
    config: &Config,
    cancellation_token: CancellationToken,
) -> Result<(), BinaryError> {
    let service = create_mcp_service(
        api,
        metrics,
        config.server_name.clone(),
        config.server_version.clone(),
        cancellation_token,
    );
    let app = Router::new()
        .nest_service("/mcp", service)
        .layer(TraceLayer::new_for_http());

    let addr = format!("{}:{}", config.http_host, config.http_port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("serving MCP over HTTP at http://{addr}/mcp");
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), BinaryError> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config.log_level);
    let _ = rustls::crypto::ring::default_provider().install_default();

    info!(
        api_url = %config.api_url,
        transport = ?config.transport,
        "starting {} {}",
        config.server_name,
        config.server_version
    );

    let api = Arc::new(ApiClient::from_config(&config)?);
    match api.health().await {
        Ok(()) => info!("upstream API is reachable"),
        Err(error) => warn!(%error, "upstream API health check failed, continuing anyway"),
    }

    let metrics = MemoryMetrics::new();
    let flusher = metrics.spawn_flusher(Duration::from_secs(60));

    let cancellation_token = CancellationToken::new();
    let result = match config.transport {
        Transport::Stdio => {
            let server = TaskDeckServer::new(
                Arc::clone(&api),
                metrics.clone(),
                config.server_name.clone(),
                config.server_version.clone(),
            );
            run_stdio(server).await
        }
        Transport::Http => {
            run_http(
                Arc::clone(&api),
                Arc::clone(&metrics),
                &config,
                cancellation_token.clone(),
            )
            .await
        }
        Transport::Both => {
            let server = TaskDeckServer::new(
                Arc::clone(&api),
                metrics.clone(),
                config.server_name.clone(),
                config.server_version.clone(),
            );
            tokio::select! {
                result = run_stdio(server) => result,
                result = run_http(
                    Arc::clone(&api),
                    Arc::clone(&metrics),
                    &config,
                    cancellation_token.clone(),
                ) => result,
            }
        }
    };

    cancellation_token.cancel();
    flusher.abort();
    result
}
