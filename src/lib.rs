//! Dictionary MCP Server Library
//!
//! This crate exposes English dictionary lookups (backed by the Free
//! Dictionary API) to Model Context Protocol clients.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **dictionary**: Lookup client, text rendering and the search fallback
//!   - **tools**: MCP tools that can be executed by clients
//!   - **resources**: Data resources that can be read by clients
//!
//! # Example
//!
//! ```rust,no_run
//! use dictionary_mcp_server::{core::Config, core::McpServer, core::TransportService};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     config.validate()?;
//!     let server = McpServer::new(config.clone());
//!     TransportService::new(config.transport).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
