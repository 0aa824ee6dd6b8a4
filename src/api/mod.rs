//! API Client Layer - authenticated access to the accounting web API
//!
//! This module provides:
//! - ApiClient wrapping reqwest with bearer auth
//! - AttachmentApi trait for the attachment endpoints
//! - Transaction kinds and opaque payload types

pub mod attachments;
pub mod client;
pub mod types;

pub use attachments::{AttachmentSource, TransactionKind};
pub use client::{ApiClient, ApiConfig, AttachmentApi};
pub use types::{Attachment, AttachmentTable};
