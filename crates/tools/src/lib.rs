//! Tool trait and fax tool implementations.
//!
//! Agent integrations use this crate to expose the Fax.Plus operations
//! (send, status, history) as named tools with JSON argument schemas.

pub mod history;
mod input;
pub mod registry;
pub mod send;
pub mod status;
#[cfg(test)]
mod test_support;

pub use history::FaxHistoryTool;
pub use registry::ToolRegistry;
pub use send::FaxSendTool;
pub use status::FaxStatusTool;

use async_trait::async_trait;
use proto::ToolResult;

/// Trait that all tools must implement
#[async_trait]
pub trait Tool: Send + Sync {
    /// Unique tool name exposed to the LLM.
    fn name(&self) -> &str;
    /// Human-readable description for tool selection.
    fn description(&self) -> &str;
    /// JSON schema for accepted tool arguments.
    fn parameters_schema(&self) -> serde_json::Value;
    /// Executes the tool with the given call id and JSON args.
    async fn execute(&self, call_id: &str, args: serde_json::Value) -> ToolResult;
}
