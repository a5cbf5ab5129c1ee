//! JSON-RPC 2.0 framing for the MCP server.
//!
//! The server only ever answers: requests (with an `id`) get exactly one
//! response or error, notifications (without an `id`) get nothing. MCP
//! forbids `null` request IDs, so [`RequestId`] has no null variant.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP protocol revision spoken by this server.
pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Name reported in `serverInfo`.
pub const SERVER_NAME: &str = "mtg-deck-mcp";

/// A request ID: integer or string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Integer ID.
    Number(i64),
    /// String ID.
    String(String),
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

/// An incoming request.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    /// Protocol marker, `"2.0"`.
    pub jsonrpc: String,
    /// Request identifier echoed in the reply.
    pub id: RequestId,
    /// Method name, e.g. `tools/call`.
    pub method: String,
    /// Method parameters.
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Returns a description of the first structural problem, if any.
    #[must_use]
    pub fn validate(&self) -> Option<&'static str> {
        if self.jsonrpc != "2.0" {
            return Some("jsonrpc field must be \"2.0\"");
        }
        if self.method.is_empty() {
            return Some("method field cannot be empty");
        }
        None
    }

    /// Deserialises `params` into `T`, treating absent params as `{}`.
    ///
    /// # Errors
    ///
    /// Returns an invalid-params error naming the method.
    pub fn parse_params<T: DeserializeOwned>(&self) -> Result<T, JsonRpcError> {
        let params = self
            .params
            .clone()
            .unwrap_or_else(|| Value::Object(serde_json::Map::new()));
        serde_json::from_value(params).map_err(|e| {
            JsonRpcError::invalid_params(
                self.id.clone(),
                format!("Invalid {} params: {e}", self.method),
            )
        })
    }
}

/// An incoming notification.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcNotification {
    /// Protocol marker, `"2.0"`.
    pub jsonrpc: String,
    /// Notification name.
    pub method: String,
    /// Notification parameters.
    #[serde(default)]
    pub params: Option<Value>,
}

/// A successful reply.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcResponse {
    /// Always `"2.0"`.
    pub jsonrpc: &'static str,
    /// ID of the request being answered.
    pub id: RequestId,
    /// Method result.
    pub result: Value,
}

impl JsonRpcResponse {
    /// Wraps `result` as the reply to `id`.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Value is not const-compatible
    pub fn success(id: RequestId, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result,
        }
    }
}

/// Error codes used by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// The line was not valid JSON.
    ParseError,
    /// The JSON was not a valid request.
    InvalidRequest,
    /// Unknown method.
    MethodNotFound,
    /// Parameters did not match the method.
    InvalidParams,
    /// The server failed to build a reply.
    InternalError,
    /// MCP: `resources/read` named an unknown URI.
    ResourceNotFound,
}

impl ErrorCode {
    /// Numeric code sent on the wire.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::ParseError => -32700,
            Self::InvalidRequest => -32600,
            Self::MethodNotFound => -32601,
            Self::InvalidParams => -32602,
            Self::InternalError => -32603,
            Self::ResourceNotFound => -32002,
        }
    }

    /// Message used when the caller has nothing more specific.
    #[must_use]
    pub const fn default_message(self) -> &'static str {
        match self {
            Self::ParseError => "Parse error",
            Self::InvalidRequest => "Invalid Request",
            Self::MethodNotFound => "Method not found",
            Self::InvalidParams => "Invalid params",
            Self::InternalError => "Internal error",
            Self::ResourceNotFound => "Resource not found",
        }
    }
}

/// The `error` member of an error reply.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcErrorData {
    /// Numeric code.
    pub code: i32,
    /// Human-readable description.
    pub message: String,
    /// Structured detail.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcErrorData {
    /// Error with the code's default message.
    #[must_use]
    pub fn from_code(code: ErrorCode) -> Self {
        Self::with_message(code, code.default_message())
    }

    /// Error with a custom message.
    #[must_use]
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: code.code(),
            message: message.into(),
            data: None,
        }
    }

    /// Attaches structured detail.
    #[must_use]
    pub fn with_data(mut self, data: Value) -> Self {
        self.data = Some(data);
        self
    }
}

/// An error reply.
#[derive(Debug, Clone, Serialize)]
pub struct JsonRpcError {
    /// Always `"2.0"`.
    pub jsonrpc: &'static str,
    /// ID of the failed request, when it could be read.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<RequestId>,
    /// Error details.
    pub error: JsonRpcErrorData,
}

impl JsonRpcError {
    /// Builds an error reply.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // JsonRpcErrorData contains String
    pub fn new(id: Option<RequestId>, error: JsonRpcErrorData) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            error,
        }
    }

    /// The line could not be parsed as JSON.
    #[must_use]
    pub fn parse_error() -> Self {
        Self::new(None, JsonRpcErrorData::from_code(ErrorCode::ParseError))
    }

    /// The message is not a valid request.
    #[must_use]
    pub fn invalid_request(id: Option<RequestId>) -> Self {
        Self::new(id, JsonRpcErrorData::from_code(ErrorCode::InvalidRequest))
    }

    /// The message is not valid in the current state.
    #[must_use]
    pub fn invalid_request_with(id: RequestId, message: impl Into<String>) -> Self {
        Self::new(
            Some(id),
            JsonRpcErrorData::with_message(ErrorCode::InvalidRequest, message),
        )
    }

    /// Unknown method.
    #[must_use]
    pub fn method_not_found(id: RequestId, method: &str) -> Self {
        Self::new(
            Some(id),
            JsonRpcErrorData::with_message(
                ErrorCode::MethodNotFound,
                format!("Method not found: {method}"),
            ),
        )
    }

    /// Parameters did not match the method.
    #[must_use]
    pub fn invalid_params(id: RequestId, message: impl Into<String>) -> Self {
        Self::new(
            Some(id),
            JsonRpcErrorData::with_message(ErrorCode::InvalidParams, message),
        )
    }

    /// Unknown resource URI, echoed in `data.uri`.
    #[must_use]
    pub fn resource_not_found(id: RequestId, uri: &str) -> Self {
        Self::new(
            Some(id),
            JsonRpcErrorData::from_code(ErrorCode::ResourceNotFound)
                .with_data(serde_json::json!({ "uri": uri })),
        )
    }

    /// The server could not build a reply.
    #[must_use]
    pub fn internal_error(id: RequestId, message: impl Into<String>) -> Self {
        Self::new(
            Some(id),
            JsonRpcErrorData::with_message(ErrorCode::InternalError, message),
        )
    }
}

/// A parsed incoming line.
#[derive(Debug, Clone)]
pub enum IncomingMessage {
    /// Expects a reply.
    Request(JsonRpcRequest),
    /// Expects nothing.
    Notification(JsonRpcNotification),
}

/// Parses one line from the client.
///
/// A message with an `id` member is a request, anything else a notification.
///
/// # Errors
///
/// Returns a parse error for malformed JSON and an invalid-request error for
/// well-formed JSON that is not a JSON-RPC 2.0 message.
pub fn parse_message(json: &str) -> Result<IncomingMessage, JsonRpcError> {
    let value: Value = serde_json::from_str(json).map_err(|_| JsonRpcError::parse_error())?;
    let obj = value.as_object().ok_or_else(JsonRpcError::parse_error)?;

    if obj.get("jsonrpc").and_then(Value::as_str) != Some("2.0") {
        return Err(JsonRpcError::invalid_request(None));
    }

    if obj.contains_key("id") {
        let request: JsonRpcRequest =
            serde_json::from_value(value).map_err(|_| JsonRpcError::invalid_request(None))?;
        if request.validate().is_some() {
            return Err(JsonRpcError::invalid_request(Some(request.id)));
        }
        Ok(IncomingMessage::Request(request))
    } else {
        let notification: JsonRpcNotification =
            serde_json::from_value(value).map_err(|_| JsonRpcError::invalid_request(None))?;
        Ok(IncomingMessage::Notification(notification))
    }
}
