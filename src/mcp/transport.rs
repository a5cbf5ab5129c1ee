//! Newline-delimited stdio transport.
//!
//! Each message is one line of UTF-8 JSON. stdout carries protocol traffic
//! only; logs go to stderr.

use std::io;

use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

use crate::mcp::protocol::{JsonRpcError, JsonRpcResponse};

/// Reads requests from stdin and writes replies to stdout.
pub struct StdioTransport {
    reader: BufReader<tokio::io::Stdin>,
    writer: tokio::io::Stdout,
}

impl StdioTransport {
    /// Creates a transport over the process's stdio.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reader: BufReader::new(tokio::io::stdin()),
            writer: tokio::io::stdout(),
        }
    }

    /// Reads the next line without its terminator.
    ///
    /// Returns `None` once stdin is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading stdin fails or the line is not UTF-8.
    pub async fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Writes a success reply.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or writing fails.
    pub async fn write_response(&mut self, response: &JsonRpcResponse) -> io::Result<()> {
        self.write_message(response).await
    }

    /// Writes an error reply.
    ///
    /// # Errors
    ///
    /// Returns an error if serialisation or writing fails.
    pub async fn write_error(&mut self, error: &JsonRpcError) -> io::Result<()> {
        self.write_message(error).await
    }

    async fn write_message<T: Serialize + Sync>(&mut self, message: &T) -> io::Result<()> {
        let json = encode_line(message)?;
        self.writer.write_all(json.as_bytes()).await?;
        self.writer.flush().await
    }
}

impl Default for StdioTransport {
    fn default() -> Self {
        Self::new()
    }
}

/// Serialises `message` as one newline-terminated line.
fn encode_line<T: Serialize>(message: &T) -> io::Result<String> {
    let mut json =
        serde_json::to_string(message).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    // compact serde_json output escapes every newline inside strings
    debug_assert!(!json.contains('\n'), "message must be a single line");

    json.push('\n');
    Ok(json)
}
