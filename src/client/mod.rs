//! HTTP client for the upstream task-management REST API.
//!
//! `ApiClient` is a thin verb wrapper returning raw body bytes; the
//! `TaskApi` trait layers typed operations on top and is the seam the MCP
//! handlers are generic over, so tests can substitute a stub backend.

mod api;
mod error;
mod http;

pub use api::TaskApi;
pub use error::{ApiError, ApiResult};
pub use http::ApiClient;
