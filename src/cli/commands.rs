//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - tools: list and inspect the tool catalog
//! - attachments: list/add attachments and fetch extracted tables

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ledgr - accounting API client and tool catalog
#[derive(Parser, Debug)]
#[command(name = "ledgr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse the tool catalog
    Tools {
        #[command(subcommand)]
        command: ToolCommands,
    },

    /// Work with attachments on business transactions
    Attachments {
        #[command(subcommand)]
        command: AttachmentCommands,
    },
}

/// Tool catalog subcommands
#[derive(Subcommand, Debug)]
pub enum ToolCommands {
    /// List tools, optionally filtered
    List {
        /// Only tools in this group (invoices, bills, journals, credit-notes,
        /// attachments, contacts, reports)
        #[arg(short, long)]
        group: Option<String>,

        /// Only non-mutating tools
        #[arg(long, conflicts_with = "write")]
        read_only: bool,

        /// Only mutating tools
        #[arg(long)]
        write: bool,
    },

    /// Show one tool definition
    Info {
        /// Tool name (e.g., "list_invoices")
        name: String,
    },
}

/// Attachment subcommands
#[derive(Subcommand, Debug)]
pub enum AttachmentCommands {
    /// List attachments on a transaction
    List {
        /// Transaction kind (invoices, bills, journals, scheduled_journals,
        /// customer-credit-notes, supplier-credit-notes)
        kind: String,

        /// Transaction id
        id: String,
    },

    /// Attach an uploaded file or an external link to a transaction
    Add {
        /// Transaction kind
        kind: String,

        /// Transaction id
        id: String,

        /// Id of an already-uploaded attachment
        #[arg(short, long)]
        attachment_id: Option<String>,

        /// URL of an external document
        #[arg(short, long)]
        source_url: Option<String>,
    },

    /// Fetch extracted table data from an attachment
    Table {
        /// Attachment id
        attachment_id: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_structure_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_tools_list_with_group() {
        let cli = Cli::try_parse_from(["ledgr", "tools", "list", "--group", "invoices"]).unwrap();
        match cli.command {
            Commands::Tools {
                command: ToolCommands::List { group, read_only, write },
            } => {
                assert_eq!(group.as_deref(), Some("invoices"));
                assert!(!read_only);
                assert!(!write);
            }
            _ => panic!("expected tools list"),
        }
    }

    #[test]
    fn test_read_only_conflicts_with_write() {
        assert!(Cli::try_parse_from(["ledgr", "tools", "list", "--read-only", "--write"]).is_err());
    }

    #[test]
    fn test_parse_attachments_add() {
        let cli = Cli::try_parse_from([
            "ledgr",
            "attachments",
            "add",
            "invoices",
            "inv-1",
            "--source-url",
            "https://docs.example/receipt.pdf",
        ])
        .unwrap();

        match cli.command {
            Commands::Attachments {
                command: AttachmentCommands::Add { kind, id, attachment_id, source_url },
            } => {
                assert_eq!(kind, "invoices");
                assert_eq!(id, "inv-1");
                assert!(attachment_id.is_none());
                assert_eq!(source_url.as_deref(), Some("https://docs.example/receipt.pdf"));
            }
            _ => panic!("expected attachments add"),
        }
    }
}
