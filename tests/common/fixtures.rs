//! Test data factories for guestbook-relay types
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use guestbook_relay::types::{Credential, FormSummary, ModerationState, Submission};

/// Create a form with no site
pub fn make_form(id: &str, name: &str) -> FormSummary {
    FormSummary {
        id: id.to_string(),
        name: name.to_string(),
        site_id: None,
    }
}

/// Create a form belonging to a site
pub fn make_site_form(id: &str, name: &str, site_id: &str) -> FormSummary {
    FormSummary {
        site_id: Some(site_id.to_string()),
        ..make_form(id, name)
    }
}

/// Create a submission with the given data and state
pub fn make_submission(
    pairs: &[(&str, &str)],
    created_at: &str,
    state: Option<ModerationState>,
) -> Submission {
    Submission {
        data: pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect(),
        created_at: Some(created_at.to_string()),
        state,
    }
}

/// Create a verified submission from a name and message
pub fn make_verified(name: &str, message: &str) -> Submission {
    make_submission(
        &[("name", name), ("message", message)],
        "2024-01-01",
        Some(ModerationState::Verified),
    )
}

/// Create a spam submission from a name and message
pub fn make_spam(name: &str, message: &str) -> Submission {
    make_submission(
        &[("name", name), ("message", message)],
        "2024-01-02",
        Some(ModerationState::Spam),
    )
}

/// Credential without site scope
pub fn make_credential() -> Credential {
    Credential {
        token: "test-token".to_string(),
        site_scope: None,
    }
}

/// Credential scoped to a site
pub fn make_scoped_credential(site_id: &str) -> Credential {
    Credential {
        site_scope: Some(site_id.to_string()),
        ..make_credential()
    }
}
