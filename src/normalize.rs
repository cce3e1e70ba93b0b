//! Submission normalization
//!
//! Filters submissions by moderation state and maps them to [`OutputRow`]s.

use crate::types::{ModerationState, OutputRow, Submission};
use std::collections::BTreeMap;

/// Normalize submissions into output rows, preserving order
///
/// Spam is dropped unless `include_spam` is set. Never fails.
pub fn normalize_submissions(submissions: Vec<Submission>, include_spam: bool) -> Vec<OutputRow> {
    submissions
        .into_iter()
        .filter(|sub| include_spam || sub.state != Some(ModerationState::Spam))
        .map(to_output_row)
        .collect()
}

/// Map one submission to an output row
///
/// `name` and `message` default to empty; `from` falls back to `name`.
pub fn to_output_row(submission: Submission) -> OutputRow {
    let data = &submission.data;
    let name = field(data, "name").unwrap_or_default();
    let from = field(data, "from").unwrap_or(name);

    OutputRow {
        name: name.to_string(),
        message: field(data, "message").unwrap_or_default().to_string(),
        from: from.to_string(),
        created_at: submission.created_at,
        state: submission.state,
    }
}

fn field<'a>(data: &'a BTreeMap<String, String>, key: &str) -> Option<&'a str> {
    data.get(key).map(String::as_str).filter(|v| !v.is_empty())
}
