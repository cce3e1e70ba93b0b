//! guestbook - Netlify Forms guestbook relay
//!
//! CLI binary for running the guestbook pipeline locally and for invoking
//! the serverless handler with a function event.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

mod cli;

#[derive(Parser)]
#[command(name = "guestbook")]
#[command(about = "Guestbook entries from Netlify Forms")]
#[command(version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the current guestbook entries
    Entries {
        /// Include submissions marked as spam
        #[arg(long)]
        include_spam: bool,

        /// Print rows as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// List forms visible to the token and show which one is the guestbook
    Forms,

    /// Invoke the function handler with an event and print the response
    Invoke {
        /// Event JSON file (reads stdin when omitted)
        #[arg(long)]
        event: Option<PathBuf>,

        /// Site id from the invoking runtime, used when SITE_ID is unset
        #[arg(long)]
        site_id: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Entries { include_spam, json } => {
            cli::run_entries(include_spam, json).await?;
        }
        Commands::Forms => {
            cli::run_forms().await?;
        }
        Commands::Invoke { event, site_id } => {
            cli::run_invoke(event.as_deref(), site_id.as_deref()).await?;
        }
    }

    Ok(())
}
