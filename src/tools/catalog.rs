//! Built-in tool catalog
//!
//! The fixed dataset behind [`crate::tools::ToolRegistry::builtin`]. Order is
//! significant: listings preserve declaration order. Names must be unique;
//! `ToolRegistry::new` rejects duplicates and a test below pins it.

use super::definition::{ToolDefinition, ToolGroup};

use ToolGroup::*;

/// Every tool exposed by the command surface, in display order.
pub const BUILTIN_TOOLS: &[ToolDefinition] = &[
    // Invoices
    ToolDefinition::read("list_invoices", Invoices, "List sales invoices"),
    ToolDefinition::read("get_invoice", Invoices, "Fetch a single sales invoice"),
    ToolDefinition::write("create_invoice", Invoices, "Create a sales invoice"),
    ToolDefinition::write("email_invoice", Invoices, "Email an invoice to its customer"),
    // Bills
    ToolDefinition::read("list_bills", Bills, "List purchase bills"),
    ToolDefinition::read("get_bill", Bills, "Fetch a single purchase bill"),
    ToolDefinition::write("create_bill", Bills, "Create a purchase bill"),
    // Journals
    ToolDefinition::read("list_journals", Journals, "List manual journals"),
    ToolDefinition::read("list_scheduled_journals", Journals, "List scheduled journals"),
    ToolDefinition::write("create_journal", Journals, "Create a manual journal"),
    ToolDefinition::write("create_scheduled_journal", Journals, "Create a scheduled journal"),
    // Credit notes
    ToolDefinition::read("list_customer_credit_notes", CreditNotes, "List customer credit notes"),
    ToolDefinition::read("list_supplier_credit_notes", CreditNotes, "List supplier credit notes"),
    ToolDefinition::write("create_customer_credit_note", CreditNotes, "Create a customer credit note"),
    ToolDefinition::write("create_supplier_credit_note", CreditNotes, "Create a supplier credit note"),
    // Attachments
    ToolDefinition::read("list_attachments", Attachments, "List attachments on a transaction"),
    ToolDefinition::write("add_attachment", Attachments, "Attach a file or link to a transaction"),
    ToolDefinition::read("get_attachment_table", Attachments, "Fetch extracted table data from an attachment"),
    // Contacts
    ToolDefinition::read("list_customers", Contacts, "List customers"),
    ToolDefinition::read("list_suppliers", Contacts, "List suppliers"),
    ToolDefinition::write("create_contact", Contacts, "Create a customer or supplier"),
    // Reports
    ToolDefinition::read("profit_and_loss", Reports, "Generate a profit and loss report"),
    ToolDefinition::read("balance_sheet", Reports, "Generate a balance sheet"),
    ToolDefinition::read("trial_balance", Reports, "Generate a trial balance"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_names_unique() {
        let mut seen = HashSet::new();
        for tool in BUILTIN_TOOLS {
            assert!(seen.insert(tool.name), "duplicate tool name: {}", tool.name);
        }
    }

    #[test]
    fn test_every_group_populated() {
        let groups: HashSet<_> = BUILTIN_TOOLS.iter().map(|t| t.group).collect();
        assert_eq!(groups.len(), 7);
    }

    #[test]
    fn test_descriptions_present() {
        for tool in BUILTIN_TOOLS {
            assert!(!tool.description.is_empty(), "{} has no description", tool.name);
        }
    }

    #[test]
    fn test_naming_convention() {
        for tool in BUILTIN_TOOLS {
            assert!(
                tool.name.chars().all(|c| c.is_ascii_lowercase() || c == '_'),
                "{} is not snake_case",
                tool.name
            );
        }
    }
}
