//! CLI entrypoint and subcommand orchestration.
//!
//! Each invocation builds the fax client, registers the fax tools, runs
//! one tool call the way an agent integration would, and prints the
//! result text.

mod config;

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use faxplus::FaxClient;
use proto::ToolCall;
use tools::ToolRegistry;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Top-level command-line arguments for the faxagent binary.
#[derive(Parser, Debug)]
#[command(name = "faxagent")]
#[command(about = "Fax.Plus tools for agent integrations", version = "0.1.0")]
struct Cli {
    /// Path to config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

/// CLI subcommands available in the application.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Queue an outbound fax
    Send {
        /// Recipient fax number in E.164 format
        #[arg(short, long)]
        to: String,

        /// Subject of the fax
        #[arg(short, long)]
        subject: String,

        /// Path to the document to transmit
        #[arg(short, long)]
        file: PathBuf,

        /// Optional comment attached to the fax
        #[arg(long)]
        comment: Option<String>,
    },

    /// Check the status of a sent fax
    Status {
        /// The fax id returned when the fax was queued
        fax_id: String,
    },

    /// List recently sent faxes
    History {
        /// Maximum number of records to return
        #[arg(short = 'n', long)]
        limit: Option<u32>,
    },

    /// Run a named tool with raw JSON arguments, as an agent would
    Run {
        /// Tool name (see `tools`)
        tool: String,

        /// JSON argument object
        args: String,
    },

    /// List registered tools and their descriptions
    Tools,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let registry = build_registry(cli.config.as_deref())?;

    if matches!(cli.command, Commands::Tools) {
        let mut definitions = registry.definitions();
        definitions.sort_by(|a, b| a.name.cmp(&b.name));
        for definition in definitions {
            println!("{}\n    {}", definition.name, definition.description);
        }
        return Ok(());
    }

    let (tool, args) = tool_invocation(&cli.command);
    let call = ToolCall {
        id: uuid::Uuid::new_v4().to_string(),
        name: tool,
        arguments: args,
    };
    debug!(tool = %call.name, call_id = %call.id, "Dispatching tool call");

    let result = registry.dispatch(call).await;
    println!("{}", result.output);
    if result.is_error {
        std::process::exit(1);
    }
    Ok(())
}

/// Maps a subcommand to the tool name and JSON arguments it drives.
fn tool_invocation(command: &Commands) -> (String, serde_json::Value) {
    match command {
        Commands::Send {
            to,
            subject,
            file,
            comment,
        } => (
            "fax.send".to_string(),
            serde_json::json!({
                "fax_number": to,
                "subject": subject,
                "file_path": file.to_string_lossy(),
                "comment": comment.clone().unwrap_or_default(),
            }),
        ),
        Commands::Status { fax_id } => (
            "fax.status".to_string(),
            serde_json::json!({"fax_id": fax_id}),
        ),
        Commands::History { limit } => (
            "fax.history".to_string(),
            match limit {
                Some(limit) => serde_json::json!({"limit": limit}),
                None => serde_json::json!({}),
            },
        ),
        // Raw arguments stay a string so the tools exercise the same
        // parse path an agent payload takes.
        Commands::Run { tool, args } => (tool.clone(), serde_json::Value::String(args.clone())),
        Commands::Tools => unreachable!("handled before dispatch"),
    }
}

/// Builds the registry with an eagerly constructed fax client.
fn build_registry(config_path: Option<&std::path::Path>) -> anyhow::Result<ToolRegistry> {
    let fax_config = config::resolve(config_path)?;
    let client = Arc::new(FaxClient::new(fax_config));
    Ok(ToolRegistry::with_fax_tools(client))
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
