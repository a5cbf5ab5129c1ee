//! Model Context Protocol (MCP) server implementation.
//!
//! Exposes card lookup, card statistics and deck validation as MCP tools,
//! plus deckbuilding guides as resources and prompts. The server talks
//! JSON-RPC 2.0 over stdio.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                          MCP Server                          │
//! │                                                              │
//! │   ┌─────────────┐    ┌─────────────┐    ┌────────────────┐   │
//! │   │  Transport  │───▶│   Server    │───▶│ Tools          │   │
//! │   │   (stdio)   │    │ (lifecycle) │    │ Resources      │   │
//! │   └─────────────┘    └─────────────┘    │ Prompts        │   │
//! │                                         └───────┬────────┘   │
//! │                                                 ▼            │
//! │                     ┌───────────────────────────────────┐    │
//! │                     │ deck · analysis · CardDatabase    │    │
//! │                     └───────────────────────────────────┘    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Protocol Version
//!
//! This implementation targets MCP protocol version 2024-11-05.

pub mod guides;
pub mod protocol;
pub mod server;
pub mod transport;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, MCP_PROTOCOL_VERSION};
pub use server::{McpServer, ToolCallResult};
pub use transport::StdioTransport;
