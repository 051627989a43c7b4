//! Shared protocol types for the fax tools and their integrations.
//!
//! This crate defines serializable tool call/result structures and
//! strongly-typed error enums shared across the workspace.

pub mod error;
pub mod tool;

/// Re-export of all protocol error types.
pub use error::*;
/// Re-export of tool call definition and result types.
pub use tool::{FailureKind, ToolCall, ToolDefinition, ToolOutcome, ToolResult};
