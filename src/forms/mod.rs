//! Forms backend services
//!
//! Provides the upstream operations the guestbook pipeline depends on.

mod factory;
mod netlify;

pub use factory::create_forms_service;
pub use netlify::{NetlifyService, SUBMISSIONS_PAGE_SIZE};

use crate::error::Result;
use crate::types::{FormSummary, Submission};
use async_trait::async_trait;

/// Forms backend service trait
///
/// Abstracts the two read operations the pipeline performs, so it can run
/// against the real API or a substitute returning canned data.
#[async_trait]
pub trait FormsService: Send + Sync {
    /// List forms, scoped to a site when `site_id` is given
    async fn list_forms(&self, site_id: Option<&str>) -> Result<Vec<FormSummary>>;

    /// List submissions for a form
    async fn list_submissions(&self, form_id: &str) -> Result<Vec<Submission>>;
}
