//! Forms service factory

use crate::config::Settings;
use crate::error::Result;
use crate::forms::{FormsService, NetlifyService};

/// Create a forms service from resolved settings
pub fn create_forms_service(settings: &Settings) -> Result<Box<dyn FormsService>> {
    Ok(Box::new(NetlifyService::with_base_url(
        settings.credential.token.clone(),
        settings.api_base.clone(),
    )?))
}
