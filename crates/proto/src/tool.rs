use serde::{Deserialize, Serialize};

/// A tool invocation requested by an agent
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    /// Caller-assigned call id, echoed back in the result.
    pub id: String,
    /// Name of the tool to invoke.
    pub name: String,
    /// JSON arguments for the tool.
    pub arguments: serde_json::Value,
}

/// Tool metadata advertised to the LLM
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Unique tool name.
    pub name: String,
    /// Human-readable description for tool selection.
    pub description: String,
    /// JSON schema for accepted arguments.
    pub parameters: serde_json::Value,
}

impl ToolDefinition {
    /// Creates a definition from name, description, and parameter schema.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: serde_json::Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }
}

/// Classification of a failed tool invocation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// Caller-supplied input was rejected before any remote call.
    Validation,
    /// The remote service (or transport to it) failed.
    Remote,
    /// Any other failure (unknown tool, execution fault).
    Other,
}

/// Tagged outcome of one tool invocation.
///
/// The variants carry the full rendered message text, so text-only
/// consumers read `render()` unchanged while integrations branch on the
/// variant instead of substring-matching the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolOutcome {
    /// Operation succeeded; message describes the result.
    Success(String),
    /// Input rejected; message starts with the `Error:` prefix.
    ValidationError(String),
    /// Remote service failed; message carries the operation-specific prefix.
    RemoteError(String),
}

impl ToolOutcome {
    /// Creates a success outcome.
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    /// Creates a validation-failure outcome.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }

    /// Creates a remote-failure outcome.
    pub fn remote(message: impl Into<String>) -> Self {
        Self::RemoteError(message.into())
    }

    /// Returns the plain-text serialization of this outcome.
    pub fn render(&self) -> &str {
        match self {
            Self::Success(msg) | Self::ValidationError(msg) | Self::RemoteError(msg) => msg,
        }
    }

    /// Returns `true` for either failure variant.
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Success(_))
    }

    /// Returns the failure classification, if this outcome is a failure.
    pub fn failure_kind(&self) -> Option<FailureKind> {
        match self {
            Self::Success(_) => None,
            Self::ValidationError(_) => Some(FailureKind::Validation),
            Self::RemoteError(_) => Some(FailureKind::Remote),
        }
    }
}

/// Result of executing a tool call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    /// Call id this result answers.
    pub call_id: String,
    /// Name of the tool that produced the result.
    pub tool_name: String,
    /// Plain-text output payload.
    pub output: String,
    /// Whether the invocation failed.
    pub is_error: bool,
    /// Failure classification when `is_error` is set.
    pub failure: Option<FailureKind>,
}

impl ToolResult {
    /// Creates a successful result.
    pub fn success(call_id: &str, tool_name: &str, output: impl Into<String>) -> Self {
        Self {
            call_id: call_id.to_string(),
            tool_name: tool_name.to_string(),
            output: output.into(),
            is_error: false,
            failure: None,
        }
    }

    /// Creates an error result with an unclassified failure.
    pub fn error(call_id: &str, tool_name: &str, output: impl Into<String>) -> Self {
        Self {
            call_id: call_id.to_string(),
            tool_name: tool_name.to_string(),
            output: output.into(),
            is_error: true,
            failure: Some(FailureKind::Other),
        }
    }

    /// Converts a tagged outcome into a result for the given call.
    pub fn from_outcome(call_id: &str, tool_name: &str, outcome: ToolOutcome) -> Self {
        let is_error = outcome.is_error();
        let failure = outcome.failure_kind();
        let output = match outcome {
            ToolOutcome::Success(msg)
            | ToolOutcome::ValidationError(msg)
            | ToolOutcome::RemoteError(msg) => msg,
        };
        Self {
            call_id: call_id.to_string(),
            tool_name: tool_name.to_string(),
            output,
            is_error,
            failure,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_new_stores_all_fields() {
        let def = ToolDefinition::new(
            "fax.send",
            "Sends a fax",
            serde_json::json!({"type":"object"}),
        );
        assert_eq!(def.name, "fax.send");
        assert_eq!(def.description, "Sends a fax");
        assert_eq!(def.parameters["type"], "object");
    }

    #[test]
    fn success_result_has_no_failure() {
        let result = ToolResult::success("c1", "fax.send", "ok");
        assert!(!result.is_error);
        assert_eq!(result.failure, None);
        assert_eq!(result.output, "ok");
    }

    #[test]
    fn error_result_is_classified_other() {
        let result = ToolResult::error("c1", "fax.send", "boom");
        assert!(result.is_error);
        assert_eq!(result.failure, Some(FailureKind::Other));
    }

    #[test]
    fn outcome_render_returns_message_verbatim() {
        let outcome = ToolOutcome::validation("Error: Subject is required");
        assert_eq!(outcome.render(), "Error: Subject is required");
        assert!(outcome.is_error());
    }

    #[test]
    fn outcome_kinds_map_to_failure_kinds() {
        assert_eq!(ToolOutcome::success("ok").failure_kind(), None);
        assert_eq!(
            ToolOutcome::validation("Error: x").failure_kind(),
            Some(FailureKind::Validation)
        );
        assert_eq!(
            ToolOutcome::remote("Error sending fax: y").failure_kind(),
            Some(FailureKind::Remote)
        );
    }

    #[test]
    fn from_outcome_preserves_text_and_tag() {
        let result = ToolResult::from_outcome(
            "c2",
            "fax.status",
            ToolOutcome::remote("Error checking fax status: timeout"),
        );
        assert!(result.is_error);
        assert_eq!(result.failure, Some(FailureKind::Remote));
        assert_eq!(result.output, "Error checking fax status: timeout");
        assert_eq!(result.tool_name, "fax.status");
        assert_eq!(result.call_id, "c2");
    }

    #[test]
    fn from_outcome_success_round_trips_message() {
        let result = ToolResult::from_outcome(
            "c3",
            "fax.send",
            ToolOutcome::success("Fax successfully queued. Fax ID: f1"),
        );
        assert!(!result.is_error);
        assert_eq!(result.failure, None);
        assert_eq!(result.output, "Fax successfully queued. Fax ID: f1");
    }

    #[test]
    fn tool_result_serializes_failure_tag_lowercase() {
        let result = ToolResult::error("c4", "fax.send", "boom");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["failure"], "other");
        assert_eq!(json["is_error"], true);
    }
}
