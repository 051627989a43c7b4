//! Fax.Plus REST client implementation.

use async_trait::async_trait;
use proto::FaxApiError;
use reqwest::multipart;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::config::FaxConfig;
use crate::models::{FaxListing, FaxRecord, OutboxPayload, SendConfirmation, UploadedFile};

/// Remote fax operations consumed by the tools.
///
/// The tools hold this trait object rather than the concrete client so
/// tests can substitute an in-memory fake.
#[async_trait]
pub trait FaxApi: Send + Sync {
    /// Uploads a document and returns its service-side reference.
    async fn upload_file(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedFile, FaxApiError>;

    /// Submits an outbound fax referencing an uploaded document.
    async fn send_fax(&self, payload: OutboxPayload) -> Result<SendConfirmation, FaxApiError>;

    /// Fetches the record for a single fax.
    async fn get_fax(&self, fax_id: &str) -> Result<FaxRecord, FaxApiError>;

    /// Lists fax records, most recent first, up to `limit` when given.
    async fn list_faxes(&self, limit: Option<u32>) -> Result<Vec<FaxRecord>, FaxApiError>;
}

/// HTTP client for the Fax.Plus v3 REST API
pub struct FaxClient {
    client: reqwest::Client,
    config: FaxConfig,
}

impl FaxClient {
    /// Creates a client from the given configuration.
    pub fn new(config: FaxConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn account_url(&self, suffix: &str) -> String {
        format!(
            "{}/accounts/{}/{suffix}",
            self.config.base_url, self.config.user_id
        )
    }
}

#[async_trait]
impl FaxApi for FaxClient {
    async fn upload_file(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedFile, FaxApiError> {
        let url = self.account_url("files");
        debug!(filename, content_type, size = bytes.len(), "Uploading file");

        let part = multipart::Part::bytes(bytes)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| FaxApiError::Transport(e.to_string()))?;
        let form = multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| FaxApiError::Transport(e.to_string()))?;

        read_json(response).await
    }

    async fn send_fax(&self, payload: OutboxPayload) -> Result<SendConfirmation, FaxApiError> {
        let url = self.account_url("outbox");
        debug!(to = %payload.fax.to, file_id = %payload.fax.file_id, "Submitting fax");

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.config.access_token)
            .json(&payload)
            .send()
            .await
            .map_err(|e| FaxApiError::Transport(e.to_string()))?;

        read_json(response).await
    }

    async fn get_fax(&self, fax_id: &str) -> Result<FaxRecord, FaxApiError> {
        let url = self.account_url(&format!("outbox/{fax_id}"));
        debug!(fax_id, "Fetching fax record");

        let response = self
            .client
            .get(&url)
            .bearer_auth(&self.config.access_token)
            .send()
            .await
            .map_err(|e| FaxApiError::Transport(e.to_string()))?;

        read_json(response).await
    }

    async fn list_faxes(&self, limit: Option<u32>) -> Result<Vec<FaxRecord>, FaxApiError> {
        let url = self.account_url("faxes");
        debug!(?limit, "Listing faxes");

        let mut request = self.client.get(&url).bearer_auth(&self.config.access_token);
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let response = request
            .send()
            .await
            .map_err(|e| FaxApiError::Transport(e.to_string()))?;

        let listing: FaxListing = read_json(response).await?;
        Ok(listing.data)
    }
}

/// Reads the response body, mapping non-success statuses and decode
/// failures to the corresponding error variant.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FaxApiError> {
    let status = response.status();
    debug!(status = %status.as_u16(), "Fax service response received");

    let body = response
        .text()
        .await
        .map_err(|e| FaxApiError::Transport(e.to_string()))?;

    if !status.is_success() {
        let preview: String = body.chars().take(500).collect();
        return Err(FaxApiError::Status {
            status: status.as_u16(),
            body: preview,
        });
    }

    serde_json::from_str(&body).map_err(|e| {
        FaxApiError::InvalidResponse(format!(
            "Deserialization error: {e}; body: {}",
            body.chars().take(200).collect::<String>()
        ))
    })
}
