//! MCP server for MTG card lookup and deck analysis.
//!
//! Lifecycle:
//!
//! 1. **Initialisation**: `initialize` request, then the
//!    `notifications/initialized` notification
//! 2. **Operation**: tools, resources and prompts
//! 3. **Shutdown**: stdin EOF or a termination signal
//!
//! Every tool reads cards through the injected [`CardDatabase`], so the same
//! server runs against Scryfall or an in-memory table.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use tracing::{debug, info, warn};

use crate::analysis::{
    analyze_card_types, analyze_color_identity, analyze_lands, analyze_mana_requirements,
    calculate_mana_curve, CommanderAnalyzer, ValidationReport,
};
use crate::deck::total_quantity;
use crate::mcp::guides::{self, PromptDefinition, ResourceDefinition};
use crate::mcp::protocol::{
    parse_message, IncomingMessage, JsonRpcError, JsonRpcNotification, JsonRpcRequest,
    JsonRpcResponse, RequestId, MCP_PROTOCOL_VERSION, SERVER_NAME,
};
use crate::mcp::transport::StdioTransport;
use crate::scryfall::{lookup_cards, search_cards, CardDatabase, SearchCriteria};

/// Server state in the MCP lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerState {
    /// Waiting for initialize request.
    AwaitingInit,
    /// Initialize received, waiting for initialized notification.
    Initialising,
    /// Ready for normal operation.
    Running,
    /// Shutdown in progress.
    ShuttingDown,
}

/// Server capabilities advertised during initialisation.
#[derive(Debug, Clone, Serialize)]
pub struct ServerCapabilities {
    /// Tool-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ListCapabilities>,
    /// Resource-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<ResourceCapabilities>,
    /// Prompt-related capabilities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompts: Option<ListCapabilities>,
}

impl Default for ServerCapabilities {
    fn default() -> Self {
        Self {
            tools: Some(ListCapabilities::default()),
            resources: Some(ResourceCapabilities::default()),
            prompts: Some(ListCapabilities::default()),
        }
    }
}

/// Capabilities of a fixed list (tools, prompts).
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListCapabilities {
    /// Whether the list can change during the session.
    #[serde(rename = "listChanged", skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

/// Resource capabilities.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceCapabilities {
    /// Whether clients may subscribe to resource updates.
    #[serde(skip_serializing_if = "is_false")]
    pub subscribe: bool,
    /// Whether the resource list can change during the session.
    #[serde(skip_serializing_if = "is_false")]
    pub list_changed: bool,
}

#[allow(clippy::trivially_copy_pass_by_ref)] // serde's skip_serializing_if requires a predicate fn(&T) -> bool, so we must take &bool here
const fn is_false(b: &bool) -> bool {
    !*b
}

/// Server information for initialisation response.
#[derive(Debug, Clone, Serialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Client information received during initialisation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientInfo {
    /// Client name.
    pub name: String,
    /// Client version.
    #[serde(default)]
    pub version: Option<String>,
}

/// Parameters for the initialize request.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Protocol version requested by client.
    pub protocol_version: String,
    /// Client capabilities.
    #[serde(default)]
    pub capabilities: Value,
    /// Client information.
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// A tool definition for tools/list response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// JSON Schema for the tool's input parameters.
    pub input_schema: Value,
}

/// Parameters for tools/call request.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    /// Name of the tool to call.
    pub name: String,
    /// Arguments for the tool.
    #[serde(default)]
    pub arguments: Value,
}

#[derive(Debug, Deserialize)]
struct ReadResourceParams {
    uri: String,
}

#[derive(Debug, Deserialize)]
struct GetPromptParams {
    name: String,
    #[serde(default)]
    arguments: Map<String, Value>,
}

/// Content item in a tool call response.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Text content.
    Text {
        /// The text content.
        text: String,
    },
}

/// Result of a tool call.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallResult {
    /// Content returned by the tool.
    pub content: Vec<ToolContent>,
    /// Whether the tool call resulted in an error.
    #[serde(skip_serializing_if = "is_false")]
    pub is_error: bool,
}

impl ToolCallResult {
    /// Creates a successful text result.
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text { text: text.into() }],
            is_error: false,
        }
    }

    /// Creates an error text result.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: message.into(),
            }],
            is_error: true,
        }
    }

    /// Pretty-prints `value` as a successful result.
    fn json<T: Serialize>(value: &T) -> Self {
        match serde_json::to_string_pretty(value) {
            Ok(text) => Self::text(text),
            Err(e) => Self::error(format!("Failed to serialise result: {e}")),
        }
    }

    /// The text of the first content item.
    #[must_use]
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|content| match content {
            ToolContent::Text { text } => text.as_str(),
        })
    }
}

/// The MCP server for MTG card lookup and deck analysis.
pub struct McpServer {
    /// Current server state.
    state: ServerState,
    /// The transport layer.
    transport: StdioTransport,
    /// Negotiated protocol version (set after initialisation).
    protocol_version: Option<String>,
    /// Card lookups for every tool.
    db: Arc<dyn CardDatabase>,
    /// Deck validation and Command Zone analysis.
    analyzer: CommanderAnalyzer,
}

impl McpServer {
    /// Creates a server over `db`.
    #[must_use]
    pub fn new(db: Arc<dyn CardDatabase>, analyzer: CommanderAnalyzer) -> Self {
        Self {
            state: ServerState::AwaitingInit,
            transport: StdioTransport::new(),
            protocol_version: None,
            db,
            analyzer,
        }
    }

    /// Returns the current server state.
    #[must_use]
    pub const fn state(&self) -> ServerState {
        self.state
    }

    /// Returns the negotiated protocol version, once initialised.
    #[must_use]
    pub fn protocol_version(&self) -> Option<&str> {
        self.protocol_version.as_deref()
    }

    /// Runs the MCP server main loop with graceful shutdown handling.
    ///
    /// # Errors
    ///
    /// Returns an error if transport I/O fails.
    pub async fn run(&mut self) -> std::io::Result<()> {
        self.run_with_shutdown().await
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(unix)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        use tokio::signal::unix::{signal, SignalKind};

        let mut sigint = signal(SignalKind::interrupt()).map_err(std::io::Error::other)?;
        let mut sigterm = signal(SignalKind::terminate()).map_err(std::io::Error::other)?;

        loop {
            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                _ = sigterm.recv() => {
                    info!("Received SIGTERM, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Runs the main loop and handles shutdown.
    #[cfg(windows)]
    async fn run_with_shutdown(&mut self) -> std::io::Result<()> {
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = &mut ctrl_c => {
                    info!("Received Ctrl+C, initiating graceful shutdown");
                    self.state = ServerState::ShuttingDown;
                    return Ok(());
                }

                line_result = self.transport.read_line() => {
                    if self.handle_transport_result(line_result).await? {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Handles the result from transport read.
    ///
    /// Returns `true` if the server should shut down.
    async fn handle_transport_result(
        &mut self,
        line_result: std::io::Result<Option<String>>,
    ) -> std::io::Result<bool> {
        let Some(line) = line_result? else {
            info!("stdin closed");
            self.state = ServerState::ShuttingDown;
            return Ok(true);
        };

        if line.trim().is_empty() {
            return Ok(false);
        }

        match parse_message(&line) {
            Ok(IncomingMessage::Request(req)) => {
                match self.handle_request(&req).await {
                    Ok(resp) => self.transport.write_response(&resp).await?,
                    Err(error) => self.transport.write_error(&error).await?,
                }
            }
            Ok(IncomingMessage::Notification(notif)) => self.handle_notification(&notif),
            Err(error) => {
                debug!(code = error.error.code, "Rejected malformed message");
                self.transport.write_error(&error).await?;
            }
        }

        Ok(self.state == ServerState::ShuttingDown)
    }

    /// Answers one request.
    ///
    /// # Errors
    ///
    /// Returns the JSON-RPC error to send back for unknown methods, bad
    /// parameters, or requests that arrive before initialisation.
    pub async fn handle_request(
        &mut self,
        req: &JsonRpcRequest,
    ) -> Result<JsonRpcResponse, JsonRpcError> {
        debug!(id = %req.id, method = %req.method, "Handling request");

        match req.method.as_str() {
            "initialize" => self.handle_initialize(req),
            "ping" => Ok(JsonRpcResponse::success(req.id.clone(), json!({}))),
            "tools/list" => self.handle_tools_list(req),
            "tools/call" => self.handle_tools_call(req).await,
            "resources/list" => self.handle_resources_list(req),
            "resources/read" => self.handle_resources_read(req),
            "prompts/list" => self.handle_prompts_list(req),
            "prompts/get" => self.handle_prompts_get(req),
            _ => Err(JsonRpcError::method_not_found(req.id.clone(), &req.method)),
        }
    }

    /// Handles an incoming notification.
    pub fn handle_notification(&mut self, notif: &JsonRpcNotification) {
        match notif.method.as_str() {
            "notifications/initialized" if self.state == ServerState::Initialising => {
                info!("Client initialised");
                self.state = ServerState::Running;
            }
            other => debug!(method = other, "Ignoring notification"),
        }
    }

    /// Handles the initialize request.
    fn handle_initialize(&mut self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        if self.state != ServerState::AwaitingInit {
            return Err(JsonRpcError::invalid_request_with(
                req.id.clone(),
                "Server already initialised",
            ));
        }
        if req.params.is_none() {
            return Err(JsonRpcError::invalid_params(
                req.id.clone(),
                "Missing initialize params",
            ));
        }

        let params: InitializeParams = req.parse_params()?;
        if params.protocol_version != MCP_PROTOCOL_VERSION {
            warn!(
                requested = %params.protocol_version,
                offered = MCP_PROTOCOL_VERSION,
                "Client requested a different protocol version"
            );
        }
        if let Some(client) = &params.client_info {
            info!(
                client = %client.name,
                version = client.version.as_deref().unwrap_or("unknown"),
                "Initialising session"
            );
        }

        self.protocol_version = Some(MCP_PROTOCOL_VERSION.to_string());
        self.state = ServerState::Initialising;

        let result = json!({
            "protocolVersion": MCP_PROTOCOL_VERSION,
            "capabilities": ServerCapabilities::default(),
            "serverInfo": ServerInfo::default(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/list request.
    fn handle_tools_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let result = json!({
            "tools": Self::get_tool_definitions(),
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Handles the tools/call request.
    async fn handle_tools_call(
        &self,
        req: &JsonRpcRequest,
    ) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;
        if req.params.is_none() {
            return Err(JsonRpcError::invalid_params(
                req.id.clone(),
                "Missing tool call params",
            ));
        }

        let params: ToolCallParams = req.parse_params()?;
        let result = self.call_tool(&params.name, &params.arguments).await;

        let result_value = serde_json::to_value(&result).map_err(|e| {
            tracing::error!(error = %e, "Failed to serialise tool call result");
            JsonRpcError::internal_error(
                req.id.clone(),
                "Internal error: failed to serialise result",
            )
        })?;

        Ok(JsonRpcResponse::success(req.id.clone(), result_value))
    }

    /// Handles the resources/list request.
    fn handle_resources_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let resources: Vec<ResourceDefinition> = guides::resource_definitions();
        Ok(JsonRpcResponse::success(
            req.id.clone(),
            json!({ "resources": resources }),
        ))
    }

    /// Handles the resources/read request.
    fn handle_resources_read(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: ReadResourceParams = req.parse_params()?;
        let contents = guides::read_resource(&params.uri, self.analyzer.targets())
            .ok_or_else(|| JsonRpcError::resource_not_found(req.id.clone(), &params.uri))?;

        Ok(JsonRpcResponse::success(
            req.id.clone(),
            json!({ "contents": [contents] }),
        ))
    }

    /// Handles the prompts/list request.
    fn handle_prompts_list(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let prompts: Vec<PromptDefinition> = guides::prompt_definitions();
        Ok(JsonRpcResponse::success(
            req.id.clone(),
            json!({ "prompts": prompts }),
        ))
    }

    /// Handles the prompts/get request.
    fn handle_prompts_get(&self, req: &JsonRpcRequest) -> Result<JsonRpcResponse, JsonRpcError> {
        self.require_running(&req.id)?;

        let params: GetPromptParams = req.parse_params()?;
        let text = guides::get_prompt(&params.name, &params.arguments)
            .map_err(|e| JsonRpcError::invalid_params(req.id.clone(), e.to_string()))?;
        let description = guides::prompt_definitions()
            .into_iter()
            .find(|prompt| prompt.name == params.name)
            .map(|prompt| prompt.description);

        let result = json!({
            "description": description,
            "messages": [{
                "role": "user",
                "content": { "type": "text", "text": text },
            }],
        });

        Ok(JsonRpcResponse::success(req.id.clone(), result))
    }

    /// Ensures the server is in the Running state.
    fn require_running(&self, id: &RequestId) -> Result<(), JsonRpcError> {
        if self.state != ServerState::Running {
            return Err(JsonRpcError::invalid_request_with(
                id.clone(),
                "Server not initialised",
            ));
        }
        Ok(())
    }

    /// Runs one tool.
    ///
    /// Unknown tools and bad arguments produce an error result, never a
    /// protocol error.
    pub async fn call_tool(&self, name: &str, arguments: &Value) -> ToolCallResult {
        debug!(tool = name, "Calling tool");

        match name {
            // Card database
            "scryfall_lookup_cards" => self.call_lookup_cards(arguments).await,
            "scryfall_search_cards_by_criteria" => self.call_search_cards(arguments).await,
            // Card statistics
            "analysis_calculate_mana_curve"
            | "analysis_analyze_lands"
            | "analysis_analyze_color_identity"
            | "analysis_analyze_mana_requirements"
            | "analysis_analyze_card_types" => self.call_statistics_tool(name, arguments).await,
            // Deck tools
            "analysis_analyze_commander_deck" => self.call_analyze_commander_deck(arguments).await,
            "analysis_validate_decklist" => self.call_validate_decklist(arguments),
            // Unknown tool
            _ => ToolCallResult::error(format!("Unknown tool: {name}")),
        }
    }

    /// Returns the list of available tools.
    #[allow(clippy::too_many_lines)]
    fn get_tool_definitions() -> Vec<ToolDefinition> {
        let card_names_schema = json!({
            "type": "object",
            "properties": {
                "card_names": {
                    "type": "array",
                    "items": { "type": "string" },
                    "description": "Card names, one per item"
                }
            },
            "required": ["card_names"]
        });
        let deck_schema = json!({
            "type": "object",
            "properties": {
                "commander": {
                    "type": "string",
                    "description": "The commander's card name"
                },
                "decklist": {
                    "oneOf": [
                        { "type": "array", "items": { "type": "string" } },
                        { "type": "string" }
                    ],
                    "description": "Deck list entries such as '1 Sol Ring' or '2x Forest', \
                                    as an array or one newline-separated string"
                }
            },
            "required": ["commander", "decklist"]
        });

        vec![
            // === Card database ===
            ToolDefinition {
                name: "scryfall_lookup_cards".to_string(),
                description: Some(
                    "Look up MTG cards by name with fuzzy matching. Use this first to \
                     validate card names before other analysis tools. Returns mana cost, \
                     type line, oracle text and price for each card, and lists names that \
                     did not match."
                        .to_string(),
                ),
                input_schema: card_names_schema.clone(),
            },
            ToolDefinition {
                name: "scryfall_search_cards_by_criteria".to_string(),
                description: Some(
                    "Search the MTG card database by name, color, type or mana value. \
                     At least one criterion is required."
                        .to_string(),
                ),
                input_schema: json!({
                    "type": "object",
                    "properties": {
                        "name": {
                            "type": "string",
                            "description": "Partial card name, e.g. 'dragon'"
                        },
                        "colors": {
                            "type": "string",
                            "description": "Color filter, e.g. 'red' or 'wu'"
                        },
                        "type_line": {
                            "type": "string",
                            "description": "Card type, e.g. 'creature' or 'instant'"
                        },
                        "mana_cost": {
                            "type": "integer",
                            "minimum": 0,
                            "description": "Exact mana value (CMC)"
                        },
                        "limit": {
                            "type": "integer",
                            "minimum": 1,
                            "maximum": 25,
                            "default": 10,
                            "description": "Maximum results to return"
                        }
                    }
                }),
            },
            // === Card statistics ===
            ToolDefinition {
                name: "analysis_calculate_mana_curve".to_string(),
                description: Some(
                    "Count cards per mana value. Use for questions about deck speed."
                        .to_string(),
                ),
                input_schema: card_names_schema.clone(),
            },
            ToolDefinition {
                name: "analysis_analyze_lands".to_string(),
                description: Some(
                    "Count lands and the colored mana sources they provide.".to_string(),
                ),
                input_schema: card_names_schema.clone(),
            },
            ToolDefinition {
                name: "analysis_analyze_color_identity".to_string(),
                description: Some(
                    "Break cards down by color identity and color combination. Returns JSON."
                        .to_string(),
                ),
                input_schema: card_names_schema.clone(),
            },
            ToolDefinition {
                name: "analysis_analyze_mana_requirements".to_string(),
                description: Some(
                    "Compare the colored pips spells need with the sources lands provide. \
                     Returns JSON with per-color status and recommendations."
                        .to_string(),
                ),
                input_schema: card_names_schema.clone(),
            },
            ToolDefinition {
                name: "analysis_analyze_card_types".to_string(),
                description: Some(
                    "Count card types and compare them with Commander guidelines.".to_string(),
                ),
                input_schema: card_names_schema,
            },
            // === Deck tools ===
            ToolDefinition {
                name: "analysis_analyze_commander_deck".to_string(),
                description: Some(
                    "Validate a Commander deck, categorize every card into the Command Zone \
                     template (ramp, card advantage, disruption, lands, plan cards) and \
                     report balance and recommendations. Returns JSON."
                        .to_string(),
                ),
                input_schema: deck_schema.clone(),
            },
            ToolDefinition {
                name: "analysis_validate_decklist".to_string(),
                description: Some(
                    "Parse and validate a Commander deck list without looking cards up. \
                     Reports every error and warning in one pass together with the \
                     aggregated card quantities. Returns JSON."
                        .to_string(),
                ),
                input_schema: deck_schema,
            },
        ]
    }

    // ==================== Tool Implementations ====================

    /// Calls scryfall_lookup_cards.
    async fn call_lookup_cards(&self, arguments: &Value) -> ToolCallResult {
        match string_list(arguments, "card_names") {
            Ok(names) => ToolCallResult::text(lookup_cards(self.db.as_ref(), &names).await),
            Err(error) => error,
        }
    }

    /// Calls scryfall_search_cards_by_criteria.
    async fn call_search_cards(&self, arguments: &Value) -> ToolCallResult {
        let arguments = if arguments.is_null() {
            json!({})
        } else {
            arguments.clone()
        };
        let criteria: SearchCriteria = match serde_json::from_value(arguments) {
            Ok(criteria) => criteria,
            Err(e) => return ToolCallResult::error(format!("Invalid search criteria: {e}")),
        };

        ToolCallResult::text(search_cards(self.db.as_ref(), &criteria).await)
    }

    /// Calls one of the card statistics tools, which all take `card_names`.
    async fn call_statistics_tool(&self, name: &str, arguments: &Value) -> ToolCallResult {
        let names = match string_list(arguments, "card_names") {
            Ok(names) => names,
            Err(error) => return error,
        };
        let db = self.db.as_ref();

        let text = match name {
            "analysis_calculate_mana_curve" => calculate_mana_curve(db, &names).await,
            "analysis_analyze_lands" => analyze_lands(db, &names).await,
            "analysis_analyze_color_identity" => analyze_color_identity(db, &names).await,
            "analysis_analyze_mana_requirements" => analyze_mana_requirements(db, &names).await,
            "analysis_analyze_card_types" => analyze_card_types(db, &names).await,
            _ => return ToolCallResult::error(format!("Unknown tool: {name}")),
        };
        ToolCallResult::text(text)
    }

    /// Calls analysis_analyze_commander_deck.
    async fn call_analyze_commander_deck(&self, arguments: &Value) -> ToolCallResult {
        let (commander, decklist) = match deck_arguments(arguments) {
            Ok(args) => args,
            Err(error) => return error,
        };

        match self
            .analyzer
            .analyze(self.db.as_ref(), &commander, &decklist)
            .await
        {
            Ok(report) => ToolCallResult::json(&report),
            Err(e) => {
                debug!(error = %e, "Commander analysis rejected");
                ToolCallResult::error(e.to_string())
            }
        }
    }

    /// Calls analysis_validate_decklist.
    fn call_validate_decklist(&self, arguments: &Value) -> ToolCallResult {
        let (commander, decklist) = match deck_arguments(arguments) {
            Ok(args) => args,
            Err(error) => return error,
        };

        let validator = self.analyzer.validator();
        let (cards, parse_result) = validator.aggregate(&decklist);
        let result = validator.validate_aggregated(&commander, &cards, parse_result, 0);

        let output = json!({
            "format": validator.format_name(),
            "commander": commander.trim(),
            "validation": ValidationReport::new(&result, self.analyzer.include_warnings()),
            "deck": {
                "deck_cards": total_quantity(&cards),
                "unique_cards": cards.len(),
            },
            "cards": &cards,
        });

        ToolCallResult::json(&output)
    }
}

/// Reads a required array-of-strings argument.
fn string_list(arguments: &Value, key: &str) -> Result<Vec<String>, ToolCallResult> {
    let Some(value) = arguments.get(key) else {
        return Err(ToolCallResult::error(format!(
            "Missing required parameter: {key}"
        )));
    };

    value
        .as_array()
        .and_then(|items| {
            items
                .iter()
                .map(|item| item.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        })
        .ok_or_else(|| {
            ToolCallResult::error(format!("Parameter '{key}' must be an array of strings"))
        })
}

/// Reads `commander` and `decklist`.
///
/// The deck list may be an array of lines or one string, which is split on
/// newlines.
fn deck_arguments(arguments: &Value) -> Result<(String, Vec<String>), ToolCallResult> {
    let commander = match arguments.get("commander") {
        Some(Value::String(name)) => name.clone(),
        Some(Value::Null) | None => String::new(),
        Some(_) => {
            return Err(ToolCallResult::error(
                "Parameter 'commander' must be a string",
            ))
        }
    };

    let decklist = match arguments.get("decklist") {
        Some(Value::String(text)) => text.lines().map(str::to_string).collect(),
        Some(Value::Null) | None => Vec::new(),
        Some(_) => string_list(arguments, "decklist")?,
    };

    Ok((commander, decklist))
}
