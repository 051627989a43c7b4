//! Fax history tool implementation.

use std::sync::Arc;

use async_trait::async_trait;
use faxplus::{FaxApi, FaxRecord};
use proto::{ToolOutcome, ToolResult};
use serde::Deserialize;
use tracing::debug;

use crate::{Tool, input};

#[derive(Debug, Deserialize)]
struct HistoryArgs {
    limit: Option<u32>,
}

/// Tool that lists recently sent faxes
pub struct FaxHistoryTool {
    api: Arc<dyn FaxApi>,
}

impl FaxHistoryTool {
    /// Creates a history tool backed by the given fax service.
    pub fn new(api: Arc<dyn FaxApi>) -> Self {
        Self { api }
    }

    // Remote faults are contained here exactly as in the send/status
    // tools: every call yields one result, never a propagated fault.
    async fn run(&self, args: serde_json::Value) -> ToolOutcome {
        let args: HistoryArgs = match input::parse_args(args) {
            Ok(a) => a,
            Err(outcome) => return outcome,
        };

        match self.api.list_faxes(args.limit).await {
            Ok(records) if records.is_empty() => ToolOutcome::success("No faxes found."),
            Ok(records) => ToolOutcome::success(render_history(&records)),
            Err(e) => ToolOutcome::remote(format!("Error retrieving fax history: {e}")),
        }
    }
}

#[async_trait]
impl Tool for FaxHistoryTool {
    fn name(&self) -> &str {
        "fax.history"
    }

    fn description(&self) -> &str {
        "List recently sent faxes, most recent first. \
         Arguments: limit (optional maximum number of records to return). \
         Each line shows the fax id, status, recipient, and date."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "limit": {
                    "type": "integer",
                    "description": "Maximum number of records to return"
                }
            },
            "required": []
        })
    }

    async fn execute(&self, call_id: &str, args: serde_json::Value) -> ToolResult {
        debug!("Executing fax history listing (call_id: {call_id})");
        let outcome = self.run(args).await;
        ToolResult::from_outcome(call_id, self.name(), outcome)
    }
}

/// Renders one summary line per record.
fn render_history(records: &[FaxRecord]) -> String {
    records
        .iter()
        .map(|record| {
            let to = record.to.as_deref().unwrap_or("unknown");
            format!(
                "{} [{}] to {} on {}",
                record.id,
                record.status,
                to,
                record.created_at.to_rfc3339()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
