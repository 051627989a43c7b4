//! Fax.Plus REST client.
//!
//! The fax tools use this crate to upload documents, submit outbound
//! faxes, and query fax status/history. The wire format belongs to the
//! remote service; this crate only models the fields the tools consume.

pub mod client;
pub mod config;
pub mod models;

pub use client::{FaxApi, FaxClient};
pub use config::FaxConfig;
pub use models::{FaxListing, FaxRecord, OutboxFax, OutboxPayload, SendConfirmation, UploadedFile};
