//! Tool definitions and read/write classification
//!
//! Static descriptors for the commands exposed by the CLI surface. Each tool
//! has a unique name, a functional group, and a read-only flag used to split
//! the surface into query and mutation halves.

use serde::{Deserialize, Serialize};

/// Functional group a tool belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolGroup {
    /// Sales invoices
    Invoices,
    /// Purchase bills
    Bills,
    /// Manual and scheduled journals
    Journals,
    /// Customer and supplier credit notes
    CreditNotes,
    /// Files and links on business transactions
    Attachments,
    /// Customers and suppliers
    Contacts,
    /// Financial reports
    Reports,
}

impl ToolGroup {
    /// Parse from string representation
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "invoices" => Some(Self::Invoices),
            "bills" => Some(Self::Bills),
            "journals" => Some(Self::Journals),
            "credit-notes" | "credit_notes" | "creditnotes" => Some(Self::CreditNotes),
            "attachments" => Some(Self::Attachments),
            "contacts" => Some(Self::Contacts),
            "reports" => Some(Self::Reports),
            _ => None,
        }
    }

    /// Canonical string form, matching the serde kebab-case spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Invoices => "invoices",
            Self::Bills => "bills",
            Self::Journals => "journals",
            Self::CreditNotes => "credit-notes",
            Self::Attachments => "attachments",
            Self::Contacts => "contacts",
            Self::Reports => "reports",
        }
    }
}

impl std::fmt::Display for ToolGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A static tool descriptor
///
/// The full set of definitions is fixed at compile time and never mutated;
/// `name` is the unique key across the whole catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolDefinition {
    /// Tool name (e.g., "list_invoices", "create_invoice")
    pub name: &'static str,
    /// Functional group used for filtered listings
    pub group: ToolGroup,
    /// True for tools that never mutate remote data
    pub read_only: bool,
    /// One-line description for help output
    pub description: &'static str,
}

impl ToolDefinition {
    /// A non-mutating tool (listing, lookup, report generation)
    pub const fn read(name: &'static str, group: ToolGroup, description: &'static str) -> Self {
        Self {
            name,
            group,
            read_only: true,
            description,
        }
    }

    /// A mutating tool (creation, update, upload)
    pub const fn write(name: &'static str, group: ToolGroup, description: &'static str) -> Self {
        Self {
            name,
            group,
            read_only: false,
            description,
        }
    }
}
