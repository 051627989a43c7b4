//! Tool registry used by agent integrations to list and execute tools.

use std::collections::HashMap;
use std::sync::Arc;

use faxplus::FaxApi;
use proto::{ToolCall, ToolDefinition, ToolResult};
use tracing::debug;

use crate::{FaxHistoryTool, FaxSendTool, FaxStatusTool, Tool};

/// Registry of available tools
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Creates a registry pre-populated with the three fax tools, all
    /// sharing the given fax service client.
    pub fn with_fax_tools(api: Arc<dyn FaxApi>) -> Self {
        let mut registry = Self::new();
        registry.register(FaxSendTool::new(api.clone()));
        registry.register(FaxStatusTool::new(api.clone()));
        registry.register(FaxHistoryTool::new(api));
        registry
    }

    /// Register a tool
    pub fn register(&mut self, tool: impl Tool + 'static) {
        let name = tool.name().to_string();
        debug!("Registering tool: {name}");
        self.tools.insert(name, Arc::new(tool));
    }

    /// Get tool definitions for the LLM
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .values()
            .map(|t| ToolDefinition::new(t.name(), t.description(), t.parameters_schema()))
            .collect()
    }

    /// Execute a tool call
    pub async fn execute(&self, call_id: &str, name: &str, args: serde_json::Value) -> ToolResult {
        if let Some(tool) = self.tools.get(name) {
            debug!("Executing tool: {name} (call_id: {call_id})");
            tool.execute(call_id, args).await
        } else {
            ToolResult::error(call_id, name, format!("Tool '{name}' not found"))
        }
    }

    /// Execute a structured tool call
    pub async fn dispatch(&self, call: ToolCall) -> ToolResult {
        self.execute(&call.id, &call.name, call.arguments).await
    }

    /// Returns the list of registered tool names.
    pub fn tool_names(&self) -> Vec<&str> {
        self.tools.keys().map(|s| s.as_str()).collect()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
