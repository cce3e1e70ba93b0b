//! Guestbook resolution pipeline
//!
//! Runs the stages in order, failing fast:
//! 1. List forms (site-scoped when a scope is configured)
//! 2. Resolve the guestbook form (absence yields an empty result)
//! 3. Fetch its submissions
//! 4. Normalize them into output rows

use crate::error::Result;
use crate::forms::FormsService;
use crate::normalize::normalize_submissions;
use crate::resolve::find_guestbook_form;
use crate::types::{Credential, OutputRow};
use tracing::{debug, info};

/// Fetch and normalize guestbook entries
///
/// Returns an empty list when no guestbook form exists. Upstream failures
/// abort the run; no partial results are returned.
pub async fn fetch_guestbook(
    service: &dyn FormsService,
    credential: &Credential,
    include_spam: bool,
) -> Result<Vec<OutputRow>> {
    let site_scope = credential.site_scope.as_deref();

    let forms = service.list_forms(site_scope).await?;
    debug!(count = forms.len(), site_scope = ?site_scope, "listed forms");

    let Some(form) = find_guestbook_form(&forms, site_scope) else {
        info!("no guestbook form found");
        return Ok(Vec::new());
    };
    debug!(form_id = %form.id, site_id = ?form.site_id, "resolved guestbook form");

    let submissions = service.list_submissions(&form.id).await?;
    let fetched = submissions.len();

    let rows = normalize_submissions(submissions, include_spam);
    info!(fetched, returned = rows.len(), include_spam, "guestbook entries resolved");

    Ok(rows)
}
