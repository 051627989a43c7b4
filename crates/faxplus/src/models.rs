//! Wire models for the Fax.Plus operations the tools consume.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reference to a document stored by the service after upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadedFile {
    /// Opaque file identifier used when submitting a fax.
    pub id: String,
    /// Content type the service recorded for the upload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,
}

/// Outbound fax description inside a submission payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxFax {
    /// Recipient number, E.164-like string.
    pub to: String,
    /// Fax subject line.
    pub subject: String,
    /// Free-form comment, empty when the caller supplied none.
    pub comment: String,
    /// Identifier of the previously uploaded document.
    pub file_id: String,
    /// Direction marker, always `outbound` for submissions.
    pub direction: String,
    /// Category marker, always `general` for submissions.
    pub category: String,
}

/// Submission payload wrapping one outbound fax
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutboxPayload {
    /// The fax to submit.
    pub fax: OutboxFax,
}

impl OutboxPayload {
    /// Builds an outbound submission with the fixed direction/category markers.
    pub fn outbound(
        to: impl Into<String>,
        subject: impl Into<String>,
        comment: impl Into<String>,
        file_id: impl Into<String>,
    ) -> Self {
        Self {
            fax: OutboxFax {
                to: to.into(),
                subject: subject.into(),
                comment: comment.into(),
                file_id: file_id.into(),
                direction: "outbound".to_string(),
                category: "general".to_string(),
            },
        }
    }
}

/// Acknowledgement returned when a fax is queued
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendConfirmation {
    /// Identifier of the queued fax.
    pub id: String,
}

/// One fax record as reported by the service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaxRecord {
    /// Opaque fax identifier.
    pub id: String,
    /// Service-defined status string (e.g. pending/success/failed).
    pub status: String,
    /// Whether transmission has finished.
    #[serde(default)]
    pub completed: bool,
    /// Transmission cost in account credits.
    #[serde(default)]
    pub cost: f64,
    /// Number of transmitted pages.
    #[serde(default)]
    pub page_count: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Direction reported by the service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub direction: Option<String>,
    /// Recipient number, present on outbound records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
}

/// Paged fax listing envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaxListing {
    /// Records in service-defined order (most recent first).
    pub data: Vec<FaxRecord>,
}
