//! Core types for guestbook-relay

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Name of the form whose submissions make up the guestbook
pub const GUESTBOOK_FORM_NAME: &str = "guestbook";

/// Credential and optional site scope for the forms backend
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    /// Bearer token for the upstream API
    pub token: String,
    /// Site to scope form listing to (None = account-wide)
    pub site_scope: Option<String>,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("token", &"<redacted>")
            .field("site_scope", &self.site_scope)
            .finish()
    }
}

/// A form defined on the upstream forms backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormSummary {
    /// Form ID
    pub id: String,
    /// Form name as configured on the site
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Site the form belongs to
    #[serde(default)]
    pub site_id: Option<String>,
}

/// Moderation state assigned to a submission by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ModerationState {
    /// Accepted submission
    Verified,
    /// Classified as spam
    Spam,
    /// Any other state, kept verbatim
    Other(String),
}

impl ModerationState {
    /// Wire representation of this state
    pub fn as_str(&self) -> &str {
        match self {
            Self::Verified => "verified",
            Self::Spam => "spam",
            Self::Other(s) => s,
        }
    }
}

impl From<String> for ModerationState {
    fn from(s: String) -> Self {
        match s.as_str() {
            "verified" => Self::Verified,
            "spam" => Self::Spam,
            _ => Self::Other(s),
        }
    }
}

impl From<ModerationState> for String {
    fn from(state: ModerationState) -> Self {
        match state {
            ModerationState::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for ModerationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single submission to a form
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Submission {
    /// Submitted field values
    #[serde(default, deserialize_with = "data_bag")]
    pub data: BTreeMap<String, String>,
    /// Creation timestamp, verbatim from upstream
    #[serde(default, deserialize_with = "loose_string")]
    pub created_at: Option<String>,
    /// Moderation state
    #[serde(default, deserialize_with = "loose_state")]
    pub state: Option<ModerationState>,
}

/// A normalized guestbook entry, as returned to the widget
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutputRow {
    /// Author name
    pub name: String,
    /// Message body
    pub message: String,
    /// Where the author is from (defaults to name)
    pub from: String,
    /// Creation timestamp
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Moderation state
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<ModerationState>,
}

fn null_as_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Scalar JSON value as a string; `None` for null, false, arrays and objects
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

fn loose_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(scalar_to_string(Value::deserialize(deserializer)?))
}

/// Only string states are recognized; anything else is treated as absent.
fn loose_state<'de, D>(deserializer: D) -> Result<Option<ModerationState>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(ModerationState::from(s))),
        _ => Ok(None),
    }
}

/// Decode the submitter-supplied data bag.
///
/// Anything that isn't an object becomes an empty bag. Strings are kept,
/// numbers and `true` are stringified, everything else is dropped.
fn data_bag<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Object(map) = Value::deserialize(deserializer)? else {
        return Ok(BTreeMap::new());
    };

    Ok(map
        .into_iter()
        .filter_map(|(key, value)| scalar_to_string(value).map(|v| (key, v)))
        .collect())
}
