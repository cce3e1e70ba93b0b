//! Forms command - show the form listing and the resolved guestbook form

use crate::cli::style::{Stylize, entry, selected};
use anstream::println;
use guestbook_relay::config::Settings;
use guestbook_relay::error::Result;
use guestbook_relay::forms::create_forms_service;
use guestbook_relay::resolve::find_guestbook_form;

/// Run the forms command
pub async fn run_forms() -> Result<()> {
    let settings = Settings::from_env(None)?;
    let service = create_forms_service(&settings)?;
    let site_scope = settings.credential.site_scope.as_deref();

    let forms = service.list_forms(site_scope).await?;

    match site_scope {
        Some(site) => println!("{} {}", "Forms for site".emphasis(), site.accent()),
        None => println!("{}", "Forms (all sites)".emphasis()),
    }
    println!();

    if forms.is_empty() {
        println!("{}", "No forms found".muted());
        return Ok(());
    }

    let resolved_id = find_guestbook_form(&forms, site_scope).map(|f| f.id.as_str());

    for form in &forms {
        let site = form.site_id.as_deref().unwrap_or("-");
        if Some(form.id.as_str()) == resolved_id {
            println!(
                "{} {} {} {}",
                selected(),
                form.name.accent(),
                form.id.muted(),
                format!("site {site}").muted()
            );
        } else {
            println!(
                "{} {} {} {}",
                entry(),
                form.name,
                form.id.muted(),
                format!("site {site}").muted()
            );
        }
    }

    println!();
    if resolved_id.is_none() {
        println!(
            "{}",
            "No form named \"guestbook\"; the endpoint will return an empty list".muted()
        );
    }

    Ok(())
}
