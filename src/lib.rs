pub mod client;
pub mod config;
pub mod format;
pub mod mcp;
pub mod models;
pub mod monitor;
