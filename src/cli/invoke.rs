//! Invoke command - run the function handler on a single event

use guestbook_relay::config::Settings;
use guestbook_relay::error::Result;
use guestbook_relay::handler::{FunctionEvent, invoke};
use std::io::{IsTerminal, Read};
use std::path::Path;

/// Run the invoke command
///
/// Reads the event from `event_path` or stdin (an empty or interactive stdin
/// means a plain GET) and prints the function response as JSON.
pub async fn run_invoke(event_path: Option<&Path>, site_id: Option<&str>) -> Result<()> {
    let raw = match event_path {
        Some(path) => std::fs::read_to_string(path)?,
        None if std::io::stdin().is_terminal() => String::new(),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let event: FunctionEvent = if raw.trim().is_empty() {
        FunctionEvent::default()
    } else {
        serde_json::from_str(&raw)?
    };

    let settings = Settings::from_env(site_id);
    let response = invoke(event, settings).await;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
