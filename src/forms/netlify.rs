//! Netlify Forms service implementation

use crate::error::{Error, Result, UpstreamCall};
use crate::forms::FormsService;
use crate::types::{FormSummary, Submission};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Submissions requested per call. Only the first page is fetched.
pub const SUBMISSIONS_PAGE_SIZE: usize = 200;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Netlify Forms service using reqwest
pub struct NetlifyService {
    client: Client,
    token: String,
    api_base: String,
}

impl NetlifyService {
    /// Create a new service against the given API base URL
    pub fn with_base_url(token: String, api_base: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            token,
            api_base: api_base.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
        call: UpstreamCall,
    ) -> Result<T> {
        debug!(%url, "requesting");

        let response = self
            .client
            .get(url)
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;

        let body = check_status(response, call).await?.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Turn a non-success response into [`Error::Upstream`], keeping the body verbatim
async fn check_status(response: Response, call: UpstreamCall) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    warn!(status = status.as_u16(), "{call}");
    Err(Error::Upstream {
        call,
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl FormsService for NetlifyService {
    async fn list_forms(&self, site_id: Option<&str>) -> Result<Vec<FormSummary>> {
        let url = match site_id {
            Some(site) => self.api_url(&format!("/sites/{}/forms", urlencoding::encode(site))),
            None => self.api_url("/forms"),
        };

        self.get_json(&url, &[], UpstreamCall::ListForms).await
    }

    async fn list_submissions(&self, form_id: &str) -> Result<Vec<Submission>> {
        let url = self.api_url(&format!(
            "/forms/{}/submissions",
            urlencoding::encode(form_id)
        ));

        let submissions: Vec<Submission> = self
            .get_json(
                &url,
                &[("per_page", SUBMISSIONS_PAGE_SIZE.to_string())],
                UpstreamCall::ListSubmissions,
            )
            .await?;

        if submissions.len() >= SUBMISSIONS_PAGE_SIZE {
            warn!(
                form_id,
                page_size = SUBMISSIONS_PAGE_SIZE,
                "submission page is full; older entries are not fetched"
            );
        }

        Ok(submissions)
    }
}
