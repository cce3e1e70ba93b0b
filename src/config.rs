//! Configuration resolution
//!
//! Reads the credential and optional site scope once per request and hands
//! them to the pipeline as an explicit value.

use crate::error::{Error, Result};
use crate::types::Credential;
use std::env;

/// Default Netlify REST API base URL
pub const DEFAULT_API_BASE: &str = "https://api.netlify.com/api/v1";

const TOKEN_VARS: [&str; 2] = ["NETLIFY_AUTH_TOKEN", "NETLIFY_TOKEN"];
const SITE_VARS: [&str; 2] = ["SITE_ID", "NETLIFY_SITE_ID"];
const API_BASE_VAR: &str = "NETLIFY_API_URL";

/// Resolved configuration for one request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Token and site scope
    pub credential: Credential,
    /// Forms API base URL, without trailing slash
    pub api_base: String,
}

impl Settings {
    /// Resolve settings from the process environment
    ///
    /// `context_site_id` is the site id supplied by the invoking runtime, used
    /// when neither `SITE_ID` nor `NETLIFY_SITE_ID` is set.
    pub fn from_env(context_site_id: Option<&str>) -> Result<Self> {
        Self::from_lookup(|name| env::var(name).ok(), context_site_id)
    }

    /// Resolve settings from an arbitrary variable lookup
    ///
    /// Priority:
    /// 1. Token: `NETLIFY_AUTH_TOKEN`, then `NETLIFY_TOKEN` (required)
    /// 2. Site scope: `SITE_ID`, then `NETLIFY_SITE_ID`, then the runtime context
    /// 3. API base: `NETLIFY_API_URL`, then the public Netlify API
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F, context_site_id: Option<&str>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let first_set = |names: &[&str]| {
            names
                .iter()
                .filter_map(|&name| lookup(name))
                .find(|value| !value.is_empty())
        };

        let token = first_set(&TOKEN_VARS).ok_or_else(|| {
            Error::Config("Missing NETLIFY_AUTH_TOKEN (or NETLIFY_TOKEN)".to_string())
        })?;

        let site_scope = first_set(&SITE_VARS).or_else(|| {
            context_site_id
                .filter(|id| !id.is_empty())
                .map(ToString::to_string)
        });

        let api_base = first_set(&[API_BASE_VAR])
            .map_or_else(|| DEFAULT_API_BASE.to_string(), |base| {
                base.trim_end_matches('/').to_string()
            });

        Ok(Self {
            credential: Credential { token, site_scope },
            api_base,
        })
    }
}
