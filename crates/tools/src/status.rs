//! Fax status tool implementation.

use std::sync::Arc;

use async_trait::async_trait;
use faxplus::FaxApi;
use proto::{ToolOutcome, ToolResult};
use serde::Deserialize;
use tracing::debug;

use crate::{Tool, input};

#[derive(Debug, Deserialize)]
struct StatusArgs {
    fax_id: Option<String>,
}

/// Tool that reports the delivery status of a previously sent fax
pub struct FaxStatusTool {
    api: Arc<dyn FaxApi>,
}

impl FaxStatusTool {
    /// Creates a status tool backed by the given fax service.
    pub fn new(api: Arc<dyn FaxApi>) -> Self {
        Self { api }
    }

    async fn run(&self, args: serde_json::Value) -> ToolOutcome {
        let args: StatusArgs = match input::parse_args(args) {
            Ok(a) => a,
            Err(outcome) => return outcome,
        };

        let Some(fax_id) = input::present(&args.fax_id) else {
            return ToolOutcome::validation("Error: Fax ID is required");
        };

        match self.api.get_fax(fax_id).await {
            Ok(record) => {
                let info = serde_json::json!({
                    "fax_id": record.id,
                    "status": record.status,
                    "completed": record.completed,
                    "cost": record.cost,
                    "page_count": record.page_count,
                    "created_at": record.created_at,
                });
                match serde_json::to_string_pretty(&info) {
                    Ok(text) => ToolOutcome::success(text),
                    Err(e) => ToolOutcome::remote(format!("Error checking fax status: {e}")),
                }
            }
            Err(e) => ToolOutcome::remote(format!("Error checking fax status: {e}")),
        }
    }
}

#[async_trait]
impl Tool for FaxStatusTool {
    fn name(&self) -> &str {
        "fax.status"
    }

    fn description(&self) -> &str {
        "Check the status of a previously sent fax. \
         Arguments: fax_id (the ID returned when the fax was queued). \
         Returns status, completion, cost, page count, and creation time."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "fax_id": {
                    "type": "string",
                    "description": "The ID of the fax to check"
                }
            },
            "required": ["fax_id"]
        })
    }

    async fn execute(&self, call_id: &str, args: serde_json::Value) -> ToolResult {
        debug!("Executing fax status check (call_id: {call_id})");
        let outcome = self.run(args).await;
        ToolResult::from_outcome(call_id, self.name(), outcome)
    }
}
