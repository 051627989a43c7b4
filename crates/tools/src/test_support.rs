//! In-memory fax service fake shared by the tool unit tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use faxplus::{FaxApi, FaxRecord, OutboxPayload, SendConfirmation, UploadedFile};
use proto::FaxApiError;

/// Fake remote service recording every call it receives.
pub(crate) struct RecordingFaxApi {
    pub upload_calls: AtomicUsize,
    pub send_calls: AtomicUsize,
    pub status_calls: AtomicUsize,
    pub list_calls: AtomicUsize,
    /// When set, every operation fails with this transport message.
    pub fail_with: Option<String>,
    pub record: FaxRecord,
    pub records: Vec<FaxRecord>,
    pub last_upload: Mutex<Option<(String, String)>>,
    pub last_payload: Mutex<Option<OutboxPayload>>,
    pub last_limit: Mutex<Option<Option<u32>>>,
}

impl RecordingFaxApi {
    pub fn new() -> Self {
        Self {
            upload_calls: AtomicUsize::new(0),
            send_calls: AtomicUsize::new(0),
            status_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            fail_with: None,
            record: sample_record("fax-1", "success"),
            records: Vec::new(),
            last_upload: Mutex::new(None),
            last_payload: Mutex::new(None),
            last_limit: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            fail_with: Some(message.to_string()),
            ..Self::new()
        }
    }

    pub fn with_record(record: FaxRecord) -> Self {
        Self {
            record,
            ..Self::new()
        }
    }

    pub fn with_records(records: Vec<FaxRecord>) -> Self {
        Self {
            records,
            ..Self::new()
        }
    }

    fn check_failure(&self) -> Result<(), FaxApiError> {
        match &self.fail_with {
            Some(message) => Err(FaxApiError::Transport(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FaxApi for RecordingFaxApi {
    async fn upload_file(
        &self,
        filename: &str,
        _bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<UploadedFile, FaxApiError> {
        self.upload_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        *self.last_upload.lock().unwrap() =
            Some((filename.to_string(), content_type.to_string()));
        Ok(UploadedFile {
            id: "file-1".to_string(),
            mime_type: Some(content_type.to_string()),
        })
    }

    async fn send_fax(&self, payload: OutboxPayload) -> Result<SendConfirmation, FaxApiError> {
        self.send_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        *self.last_payload.lock().unwrap() = Some(payload);
        Ok(SendConfirmation {
            id: "mock_fax_id".to_string(),
        })
    }

    async fn get_fax(&self, _fax_id: &str) -> Result<FaxRecord, FaxApiError> {
        self.status_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        Ok(self.record.clone())
    }

    async fn list_faxes(&self, limit: Option<u32>) -> Result<Vec<FaxRecord>, FaxApiError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.check_failure()?;
        *self.last_limit.lock().unwrap() = Some(limit);
        let mut records = self.records.clone();
        if let Some(limit) = limit {
            records.truncate(limit as usize);
        }
        Ok(records)
    }
}

/// Builds a plausible outbound fax record for tests.
pub(crate) fn sample_record(id: &str, status: &str) -> FaxRecord {
    FaxRecord {
        id: id.to_string(),
        status: status.to_string(),
        completed: status != "pending",
        cost: 1.0,
        page_count: 2,
        created_at: Utc.with_ymd_and_hms(2023, 1, 1, 12, 0, 0).unwrap(),
        direction: Some("outbound".to_string()),
        to: Some("+12025550123".to_string()),
    }
}
