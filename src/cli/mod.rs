//! CLI module for ledgr - command-line interface and subcommands.
//!
//! Provides the main entry point with subcommands for browsing the tool
//! catalog and working with attachments on business transactions.

pub mod commands;

pub use commands::Cli;
