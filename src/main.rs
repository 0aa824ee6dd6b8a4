use clap::Parser;
use colored::*;
use eyre::{Context, Result, eyre};
use log::info;
use std::fs;
use std::path::PathBuf;

mod cli;

use cli::Cli;
use cli::commands::{AttachmentCommands, Commands, ToolCommands};
use ledgr::api::{ApiClient, AttachmentApi, AttachmentSource, TransactionKind};
use ledgr::config::Config;
use ledgr::tools::{ToolDefinition, ToolGroup, ToolRegistry};

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ledgr")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("ledgr.log");

    // Setup env_logger with file output
    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

async fn run_application(cli: &Cli, config: &Config) -> Result<()> {
    info!("Starting application");

    if cli.is_verbose() {
        println!("{}", "Verbose mode enabled".yellow());
    }

    match &cli.command {
        Commands::Tools { command } => handle_tools_command(command),
        Commands::Attachments { command } => handle_attachments_command(command, config).await,
    }
}

fn handle_tools_command(command: &ToolCommands) -> Result<()> {
    let registry = ToolRegistry::builtin();

    match command {
        ToolCommands::List { group, read_only, write } => {
            let tools: Vec<&ToolDefinition> = if let Some(name) = group {
                let group = ToolGroup::from_str(name)
                    .ok_or_else(|| eyre!("Unknown group: {}", name))?;
                registry.by_group(group)
            } else if *read_only {
                registry.read_only()
            } else if *write {
                registry.write()
            } else {
                registry.all().iter().collect()
            };

            for tool in &tools {
                print_tool_line(tool);
            }
            println!("{} of {} tools", tools.len(), registry.len());
            Ok(())
        }
        ToolCommands::Info { name } => match registry.get(name) {
            Some(tool) => {
                println!("{}", tool.name.cyan().bold());
                println!("  group:     {}", tool.group);
                println!("  access:    {}", access_label(tool));
                println!("  {}", tool.description);
                Ok(())
            }
            None => Err(eyre!("Tool not found: {}", name)),
        },
    }
}

fn print_tool_line(tool: &ToolDefinition) {
    println!(
        "{:<30} {:<14} {:<6} {}",
        tool.name.cyan(),
        tool.group.to_string(),
        access_label(tool),
        tool.description
    );
}

fn access_label(tool: &ToolDefinition) -> ColoredString {
    if tool.read_only { "read".green() } else { "write".yellow() }
}

async fn handle_attachments_command(command: &AttachmentCommands, config: &Config) -> Result<()> {
    let client = ApiClient::new(config.api_config())?;

    match command {
        AttachmentCommands::List { kind, id } => {
            let kind = parse_kind(kind)?;
            let attachments = client.list_attachments(kind, id).await?;
            println!("{}", serde_json::to_string_pretty(&attachments)?);
            info!("Listed {} attachments on {}/{}", attachments.len(), kind, id);
        }
        AttachmentCommands::Add { kind, id, attachment_id, source_url } => {
            let kind = parse_kind(kind)?;
            let source = AttachmentSource {
                attachment_id: attachment_id.clone(),
                source_url: source_url.clone(),
            };
            let attachment = client.add_attachment(kind, id, &source).await?;
            println!("{}", serde_json::to_string_pretty(&attachment)?);
            info!("Added attachment to {}/{}", kind, id);
        }
        AttachmentCommands::Table { attachment_id } => {
            let table = client.attachment_table(attachment_id).await?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
    }

    Ok(())
}

fn parse_kind(s: &str) -> Result<TransactionKind> {
    TransactionKind::from_str(s).ok_or_else(|| {
        eyre!(
            "Unknown transaction kind '{}' (expected one of: invoices, bills, journals, \
             scheduled_journals, customer-credit-notes, supplier-credit-notes)",
            s
        )
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref())?;

    if let Err(e) = run_application(&cli, &config).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(1);
    }

    Ok(())
}
