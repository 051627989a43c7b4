//! Fax send tool implementation.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use faxplus::{FaxApi, OutboxPayload};
use proto::{ToolOutcome, ToolResult};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::{Tool, input};

#[derive(Debug, Deserialize)]
struct SendArgs {
    fax_number: Option<String>,
    subject: Option<String>,
    file_path: Option<String>,
    comment: Option<String>,
}

/// Tool that uploads a local document and queues an outbound fax
pub struct FaxSendTool {
    api: Arc<dyn FaxApi>,
}

impl FaxSendTool {
    /// Creates a send tool backed by the given fax service.
    pub fn new(api: Arc<dyn FaxApi>) -> Self {
        Self { api }
    }

    async fn run(&self, args: serde_json::Value) -> ToolOutcome {
        let args: SendArgs = match input::parse_args(args) {
            Ok(a) => a,
            Err(outcome) => return outcome,
        };

        let Some(fax_number) = input::present(&args.fax_number) else {
            return ToolOutcome::validation("Error: Recipient fax number is required");
        };
        let Some(subject) = input::present(&args.subject) else {
            return ToolOutcome::validation("Error: Subject is required");
        };
        let Some(file_path) = input::present(&args.file_path) else {
            return ToolOutcome::validation("Error: File path is required");
        };

        let path = Path::new(file_path);
        if !path.exists() {
            return ToolOutcome::validation(format!("Error: File not found at {file_path}"));
        }

        let comment = args.comment.unwrap_or_default();
        match self.transmit(path, fax_number, subject, &comment).await {
            Ok(fax_id) => {
                ToolOutcome::success(format!("Fax successfully queued. Fax ID: {fax_id}"))
            }
            Err(message) => {
                warn!(fax_number, "Fax submission failed: {message}");
                ToolOutcome::remote(format!("Error sending fax: {message}"))
            }
        }
    }

    /// Reads the document, uploads it, and submits the outbound fax.
    async fn transmit(
        &self,
        path: &Path,
        to: &str,
        subject: &str,
        comment: &str,
    ) -> Result<String, String> {
        let bytes = tokio::fs::read(path).await.map_err(|e| e.to_string())?;

        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "document".to_string());
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_default();
        let content_type = mime_type_for(&extension);

        debug!(%filename, content_type, size = bytes.len(), "Uploading fax document");
        let uploaded = self
            .api
            .upload_file(&filename, bytes, content_type)
            .await
            .map_err(|e| e.to_string())?;

        let payload = OutboxPayload::outbound(to, subject, comment, uploaded.id);
        let confirmation = self.api.send_fax(payload).await.map_err(|e| e.to_string())?;
        Ok(confirmation.id)
    }
}

#[async_trait]
impl Tool for FaxSendTool {
    fn name(&self) -> &str {
        "fax.send"
    }

    fn description(&self) -> &str {
        "Send a fax to a recipient number via the Fax.Plus service. \
         Arguments: fax_number (E.164 format, e.g. +14155552671), subject, \
         file_path (local document: PDF, TIFF, or other supported format), \
         and an optional comment."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "fax_number": {
                    "type": "string",
                    "description": "Recipient fax number in E.164 format"
                },
                "subject": {
                    "type": "string",
                    "description": "Subject of the fax"
                },
                "file_path": {
                    "type": "string",
                    "description": "Path to the file to be faxed"
                },
                "comment": {
                    "type": "string",
                    "description": "Optional comment for the fax"
                }
            },
            "required": ["fax_number", "subject", "file_path"]
        })
    }

    async fn execute(&self, call_id: &str, args: serde_json::Value) -> ToolResult {
        debug!("Executing fax send (call_id: {call_id})");
        let outcome = self.run(args).await;
        ToolResult::from_outcome(call_id, self.name(), outcome)
    }
}

/// Maps a file extension to the content type sent with the upload.
///
/// Extensions are matched case-insensitively; anything outside the fixed
/// table falls back to `application/octet-stream`.
pub fn mime_type_for(extension: &str) -> &'static str {
    match extension.to_ascii_lowercase().as_str() {
        "pdf" => "application/pdf",
        "tiff" | "tif" => "image/tiff",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        "doc" => "application/msword",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "txt" => "text/plain",
        _ => "application/octet-stream",
    }
}
