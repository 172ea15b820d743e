use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use hxglue::config::Config;
use hxglue::events::{Event, EventBus, SseCloseReason};
use hxglue::responses::ResponseTable;
use hxglue::{logging, timefmt, toast};

#[derive(Parser)]
#[command(name = "hxglue")]
#[command(about = "Client-side helpers for the server-rendered UI", long_about = None)]
struct Cli {
    /// Path to a TOML config file (defaults to ./hxglue.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Describe how long ago a server timestamp (YYYY-MM-DD HH:MM:SS[.ffffff], UTC) was
    Ago {
        timestamp: String,
        /// Reference time as RFC 3339 (defaults to now)
        #[arg(long)]
        now: Option<String>,
        /// Fail on unparsable timestamps instead of printing "on Invalid Date"
        #[arg(long)]
        strict: bool,
    },
    /// Build the error toast for a failed response
    Toast {
        #[arg(long)]
        status: u16,
        /// Raw response body
        #[arg(long, default_value = "")]
        body: String,
        /// Print the toast as JSON instead of its title
        #[arg(long)]
        json: bool,
    },
    /// Show whether a response status swaps content and/or counts as an error
    Respond { status: u16 },
    /// Show the actions taken when an event stream closes (nodeMissing, nodeReplaced, message)
    SseClose { reason: String },
    /// Show the configured theme attribute
    Theme,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    logging::init_logging(config.log_dir.as_deref(), &config.log_filter)?;
    tracing::debug!("Loaded config: {:?}", config);

    match cli.command {
        Commands::Ago {
            timestamp,
            now,
            strict,
        } => {
            let now = match now {
                Some(raw) => DateTime::parse_from_rfc3339(&raw)
                    .with_context(|| format!("Invalid --now value: {}", raw))?
                    .with_timezone(&Utc),
                None => Utc::now(),
            };
            let phrase = if strict {
                timefmt::try_time_ago_at(&timestamp, now)?
            } else {
                timefmt::time_ago_at(&timestamp, now)
            };
            println!("{}", phrase);
        }
        Commands::Toast { status, body, json } => {
            let toast = toast::response_error_toast(status, &body);
            if json {
                println!("{}", serde_json::to_string_pretty(&toast)?);
            } else {
                println!("{}", toast.title);
            }
        }
        Commands::Respond { status } => {
            let table = ResponseTable::standard()?;
            let disposition = table.resolve(status);
            match table.matching_rule(status) {
                Some(rule) => println!("rule: {}", rule.code()),
                None => println!("rule: (none, default)"),
            }
            println!("{}", serde_json::to_string(&disposition)?);
        }
        Commands::SseClose { reason } => {
            let reason: SseCloseReason = reason.parse()?;
            let actions = EventBus::with_default_handlers().dispatch(&Event::SseClose(reason));
            println!("{}", serde_json::to_string_pretty(&actions)?);
        }
        Commands::Theme => match config.theme {
            Some(theme) => {
                let (name, value) = theme.document_attribute();
                println!("{}=\"{}\"", name, value);
            }
            None => println!("No theme configured."),
        },
    }

    Ok(())
}
