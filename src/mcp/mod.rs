//! Model Context Protocol surface.
//!
//! - `server`: rmcp `ServerHandler` wiring tools, resources, and prompts
//! - `service`: Streamable HTTP transport factory for axum
//! - `params`: tool parameter structs
//! - `resources`: URI parsing and resource aggregators
//! - `prompts`: static guidance-template generators

pub mod params;
pub mod prompts;
pub mod resources;
pub mod server;
mod service;

#[cfg(test)]
pub(crate) mod testing;

pub use server::TaskDeckServer;
pub use service::create_mcp_service;
