//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output. The transport handles
//! the connection lifecycle and delegates message processing to the server
//! handler; a failure to establish or hold the connection is surfaced to
//! the caller, which treats it as fatal.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
