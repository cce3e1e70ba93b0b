//! Guestbook form resolution
//!
//! Picks the single form the guestbook reads from out of a form listing.

use crate::types::{FormSummary, GUESTBOOK_FORM_NAME};

/// Whether a form is the guestbook form (case-insensitive name match)
pub fn is_guestbook(form: &FormSummary) -> bool {
    form.name.to_lowercase() == GUESTBOOK_FORM_NAME
}

/// Find the guestbook form in a listing
///
/// With a site scope, a match on that site wins; otherwise any name match is
/// accepted. Without a site scope, the first match in listing order wins.
/// Returns `None` when no form is named "guestbook".
pub fn find_guestbook_form<'a>(
    forms: &'a [FormSummary],
    site_scope: Option<&str>,
) -> Option<&'a FormSummary> {
    let mut matches = forms.iter().filter(|form| is_guestbook(form));

    match site_scope {
        Some(site) => {
            let first = matches.clone().next();
            matches
                .find(|form| form.site_id.as_deref() == Some(site))
                .or(first)
        }
        None => matches.next(),
    }
}
