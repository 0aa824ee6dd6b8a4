//! Attachment operations on business transactions
//!
//! Thin translation from typed calls to the remote resource hierarchy:
//! `/api/v1/{kind}/{id}/attachments` and `/api/v1/attachments/{id}/table`.
//! All failure handling beyond status checking stays with the HTTP layer.

use async_trait::async_trait;
use reqwest::multipart::Form;
use serde::{Deserialize, Serialize};

use crate::api::client::{ApiClient, AttachmentApi};
use crate::api::types::{Attachment, AttachmentTable, parse_attachment_list};
use crate::error::{LedgrError, Result};

/// The business transaction families attachments can be linked to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransactionKind {
    Invoices,
    Bills,
    Journals,
    ScheduledJournals,
    CustomerCreditNotes,
    SupplierCreditNotes,
}

impl TransactionKind {
    /// Parse from the URL path spelling used by the remote API
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "invoices" => Some(Self::Invoices),
            "bills" => Some(Self::Bills),
            "journals" => Some(Self::Journals),
            "scheduled_journals" | "scheduled-journals" => Some(Self::ScheduledJournals),
            "customer-credit-notes" => Some(Self::CustomerCreditNotes),
            "supplier-credit-notes" => Some(Self::SupplierCreditNotes),
            _ => None,
        }
    }

    /// Path segment used by the remote API
    ///
    /// Spellings are mixed (snake_case for scheduled journals, kebab-case
    /// for credit notes); they follow the upstream routes exactly.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Self::Invoices => "invoices",
            Self::Bills => "bills",
            Self::Journals => "journals",
            Self::ScheduledJournals => "scheduled_journals",
            Self::CustomerCreditNotes => "customer-credit-notes",
            Self::SupplierCreditNotes => "supplier-credit-notes",
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path_segment())
    }
}

/// What to attach: an already-uploaded file and/or an external link
///
/// The remote endpoint accepts either field, or both. An empty source is
/// rejected locally before any request is built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttachmentSource {
    pub attachment_id: Option<String>,
    pub source_url: Option<String>,
}

impl AttachmentSource {
    /// Reference an existing uploaded file by id
    pub fn from_id(attachment_id: impl Into<String>) -> Self {
        Self {
            attachment_id: Some(attachment_id.into()),
            source_url: None,
        }
    }

    /// Reference an external document by URL
    pub fn from_url(source_url: impl Into<String>) -> Self {
        Self {
            attachment_id: None,
            source_url: Some(source_url.into()),
        }
    }

    /// Set the source URL alongside an id reference
    pub fn with_url(mut self, source_url: impl Into<String>) -> Self {
        self.source_url = Some(source_url.into());
        self
    }

    fn validate(&self) -> Result<()> {
        if self.attachment_id.is_none() && self.source_url.is_none() {
            return Err(LedgrError::InvalidRequest(
                "attachment source needs an attachment id or a source url".to_string(),
            ));
        }
        Ok(())
    }

    /// Build the multipart form the remote endpoint expects
    fn to_form(&self) -> Form {
        let mut form = Form::new();
        if let Some(id) = &self.attachment_id {
            form = form.text("attachmentId", id.clone());
        }
        if let Some(url) = &self.source_url {
            form = form.text("sourceUrl", url.clone());
        }
        form
    }
}

/// Path for the attachment collection on a transaction
pub(crate) fn attachments_path(kind: TransactionKind, id: &str) -> String {
    format!("/api/v1/{}/{}/attachments", kind.path_segment(), id)
}

/// Path for the extracted-table resource of an attachment
pub(crate) fn table_path(attachment_id: &str) -> String {
    format!("/api/v1/attachments/{}/table", attachment_id)
}

#[async_trait]
impl AttachmentApi for ApiClient {
    async fn list_attachments(&self, kind: TransactionKind, id: &str) -> Result<Vec<Attachment>> {
        let body = self.get_json(&attachments_path(kind, id)).await?;
        parse_attachment_list(body)
    }

    async fn add_attachment(
        &self,
        kind: TransactionKind,
        id: &str,
        source: &AttachmentSource,
    ) -> Result<Attachment> {
        source.validate()?;
        let body = self.post_multipart(&attachments_path(kind, id), source.to_form()).await?;
        Ok(serde_json::from_value(body)?)
    }

    async fn attachment_table(&self, attachment_id: &str) -> Result<AttachmentTable> {
        let body = self.get_json(&table_path(attachment_id)).await?;
        Ok(AttachmentTable(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_path_segments() {
        assert_eq!(TransactionKind::Invoices.path_segment(), "invoices");
        assert_eq!(TransactionKind::ScheduledJournals.path_segment(), "scheduled_journals");
        assert_eq!(TransactionKind::CustomerCreditNotes.path_segment(), "customer-credit-notes");
        assert_eq!(TransactionKind::SupplierCreditNotes.path_segment(), "supplier-credit-notes");
    }

    #[test]
    fn test_kind_from_str_roundtrip() {
        let kinds = [
            TransactionKind::Invoices,
            TransactionKind::Bills,
            TransactionKind::Journals,
            TransactionKind::ScheduledJournals,
            TransactionKind::CustomerCreditNotes,
            TransactionKind::SupplierCreditNotes,
        ];
        for kind in kinds {
            assert_eq!(TransactionKind::from_str(kind.path_segment()), Some(kind));
        }
        assert_eq!(TransactionKind::from_str("receipts"), None);
    }

    #[test]
    fn test_attachments_path() {
        assert_eq!(
            attachments_path(TransactionKind::Bills, "bill-42"),
            "/api/v1/bills/bill-42/attachments"
        );
        assert_eq!(
            attachments_path(TransactionKind::CustomerCreditNotes, "ccn-1"),
            "/api/v1/customer-credit-notes/ccn-1/attachments"
        );
    }

    #[test]
    fn test_table_path() {
        assert_eq!(table_path("att-9"), "/api/v1/attachments/att-9/table");
    }

    #[test]
    fn test_source_constructors() {
        let by_id = AttachmentSource::from_id("att-1");
        assert_eq!(by_id.attachment_id.as_deref(), Some("att-1"));
        assert!(by_id.source_url.is_none());

        let by_url = AttachmentSource::from_url("https://docs.example/receipt.pdf");
        assert!(by_url.attachment_id.is_none());
        assert_eq!(by_url.source_url.as_deref(), Some("https://docs.example/receipt.pdf"));

        let both = AttachmentSource::from_id("att-1").with_url("https://docs.example/a.pdf");
        assert!(both.attachment_id.is_some());
        assert!(both.source_url.is_some());
    }

    #[test]
    fn test_empty_source_rejected() {
        let err = AttachmentSource::default().validate().unwrap_err();
        assert!(matches!(err, LedgrError::InvalidRequest(_)));
    }

    #[test]
    fn test_populated_sources_validate() {
        assert!(AttachmentSource::from_id("a").validate().is_ok());
        assert!(AttachmentSource::from_url("https://x").validate().is_ok());
    }
}
