//! Projects MCP Server Library
//!
//! This crate provides a small Model Context Protocol (MCP) server that
//! exposes an in-memory projects registry, with a modular architecture
//! organized by domains.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling, and the main server
//! - **domains**: Business logic organized by bounded contexts
//!   - **projects**: The projects registry, exposed as MCP resources
//!   - **opener**: Revealing a project path in the OS file browser
//!   - **tools**: MCP tools that can be executed by clients
//!   - **prompts**: Prompts built from the registry contents
//!
//! # Example
//!
//! ```rust,no_run
//! use projects_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
