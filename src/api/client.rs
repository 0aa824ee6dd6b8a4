//! HTTP client for the accounting API
//!
//! This module provides:
//! - ApiConfig for base URL and timeout settings
//! - AttachmentApi trait for API abstraction
//! - ApiClient wrapping reqwest with bearer auth

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::Form;
use serde_json::Value;

use crate::api::attachments::{AttachmentSource, TransactionKind};
use crate::api::types::{Attachment, AttachmentTable};
use crate::error::{LedgrError, Result};

/// Environment variable holding the API token
const API_TOKEN_ENV: &str = "LEDGR_API_TOKEN";

/// Default API base URL
const DEFAULT_BASE_URL: &str = "https://api.ledgr.app";

/// Default request timeout
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the API client
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Create a config pointing at a specific base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// Attachment operations against the remote API
///
/// Trait seam so command handlers can run against a stub in tests. Errors
/// from the transport are surfaced as-is; no retry or recovery happens at
/// this layer.
#[async_trait]
pub trait AttachmentApi: Send + Sync {
    /// List attachments on a business transaction
    async fn list_attachments(&self, kind: TransactionKind, id: &str) -> Result<Vec<Attachment>>;

    /// Attach a file or link to a business transaction
    async fn add_attachment(
        &self,
        kind: TransactionKind,
        id: &str,
        source: &AttachmentSource,
    ) -> Result<Attachment>;

    /// Fetch extracted table data for an attachment
    async fn attachment_table(&self, attachment_id: &str) -> Result<AttachmentTable>;
}

/// Authenticated client for the accounting API
pub struct ApiClient {
    client: Client,
    api_token: String,
    config: ApiConfig,
}

impl ApiClient {
    /// Create a new client
    ///
    /// Reads LEDGR_API_TOKEN from environment
    pub fn new(config: ApiConfig) -> Result<Self> {
        let api_token = std::env::var(API_TOKEN_ENV)
            .map_err(|_| LedgrError::Config(format!("{} not set", API_TOKEN_ENV)))?;

        Self::with_token(api_token, config)
    }

    /// Create a client with an explicit API token
    pub fn with_token(api_token: String, config: ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LedgrError::Api(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_token,
            config,
        })
    }

    /// Absolute URL for an API path
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Send an authenticated GET and decode the JSON body
    pub(crate) async fn get_json(&self, path: &str) -> Result<Value> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.api_token)
            .send()
            .await
            .map_err(|e| LedgrError::Api(format!("Request failed: {}", e)))?;

        Self::decode(response).await
    }

    /// Send an authenticated multipart POST and decode the JSON body
    pub(crate) async fn post_multipart(&self, path: &str, form: Form) -> Result<Value> {
        let response = self
            .client
            .post(self.url(path))
            .bearer_auth(&self.api_token)
            .multipart(form)
            .send()
            .await
            .map_err(|e| LedgrError::Api(format!("Request failed: {}", e)))?;

        Self::decode(response).await
    }

    async fn decode(response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        if !status.is_success() {
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(LedgrError::Api(format!("API error {}: {}", status, error_body)));
        }

        response
            .json()
            .await
            .map_err(|e| LedgrError::Api(format!("Failed to parse response: {}", e)))
    }

    /// Whether the client has a token to authenticate with
    pub fn is_ready(&self) -> bool {
        !self.api_token.is_empty()
    }

    /// Base URL this client talks to
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

// Keep the token out of debug output
impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.config.base_url)
            .field("timeout", &self.config.timeout)
            .finish()
    }
}
