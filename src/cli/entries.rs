//! Entries command - print the guestbook as the widget would see it

use crate::cli::style::{Stylize, entry, spam_tag};
use anstream::println;
use chrono::DateTime;
use guestbook_relay::config::Settings;
use guestbook_relay::error::Result;
use guestbook_relay::forms::create_forms_service;
use guestbook_relay::pipeline::fetch_guestbook;
use guestbook_relay::types::{ModerationState, OutputRow};

/// Run the entries command
pub async fn run_entries(include_spam: bool, json: bool) -> Result<()> {
    let settings = Settings::from_env(None)?;
    let service = create_forms_service(&settings)?;

    let rows = fetch_guestbook(service.as_ref(), &settings.credential, include_spam).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", "No guestbook entries".muted());
        return Ok(());
    }

    println!("{}", format!("Guestbook ({} entries)", rows.len()).emphasis());
    println!();

    for row in &rows {
        print_row(row);
    }

    Ok(())
}

fn print_row(row: &OutputRow) {
    let name = if row.name.is_empty() {
        "(anonymous)"
    } else {
        row.name.as_str()
    };

    let mut header = format!("{} {}", entry(), name.accent());
    if !row.from.is_empty() && row.from != row.name {
        header.push_str(&format!(" {}", format!("from {}", row.from).muted()));
    }
    if let Some(created_at) = &row.created_at {
        header.push_str(&format!(" {}", display_timestamp(created_at).muted()));
    }
    if row.state == Some(ModerationState::Spam) {
        header.push_str(&format!(" {}", spam_tag()));
    }

    println!("{header}");
    for line in row.message.lines() {
        println!("    {line}");
    }
}

/// Shorten RFC 3339 timestamps for display; anything else is shown as-is
fn display_timestamp(raw: &str) -> String {
    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return ts.format("%Y-%m-%d %H:%M").to_string();
    }
    raw.to_string()
}
