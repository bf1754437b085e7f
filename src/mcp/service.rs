//! Streamable HTTP service creation.

use std::sync::Arc;

use rmcp::transport::streamable_http_server::{
    StreamableHttpServerConfig, StreamableHttpService, session::local::LocalSessionManager,
};
use tokio_util::sync::CancellationToken;

use crate::client::TaskApi;
use crate::mcp::server::TaskDeckServer;
use crate::monitor::MetricsSink;

/// Create the MCP Streamable HTTP service for nesting into an axum router.
///
/// The factory builds a fresh server per session; all sessions share the
/// same API client and metrics sink.
pub fn create_mcp_service<C: TaskApi + 'static>(
    api: Arc<C>,
    metrics: Arc<dyn MetricsSink>,
    server_name: String,
    server_version: String,
    cancellation_token: CancellationToken,
) -> StreamableHttpService<TaskDeckServer<C>, LocalSessionManager> {
    let service_factory = move || -> Result<TaskDeckServer<C>, std::io::Error> {
        Ok(TaskDeckServer::new(
            Arc::clone(&api),
            Arc::clone(&metrics),
            server_name.clone(),
            server_version.clone(),
        ))
    };

    let mut config = StreamableHttpServerConfig::default();
    config.sse_keep_alive = None;
    config.sse_retry = None;
    config.stateful_mode = true;
    config.cancellation_token = cancellation_token;

    StreamableHttpService::new(
        service_factory,
        LocalSessionManager::default().into(),
        config,
    )
}
