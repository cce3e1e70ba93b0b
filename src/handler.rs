//! Serverless function handler
//!
//! Translates a function event into a pipeline run and wraps the outcome in a
//! function response (status, headers, JSON body) the widget can consume.

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::forms::{FormsService, create_forms_service};
use crate::pipeline::fetch_guestbook;
use crate::types::{Credential, OutputRow};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::future::Future;
use tracing::{error, warn};

/// Query parameter that opts in to spam-state submissions
pub const INCLUDE_SPAM_PARAM: &str = "includeSpam";

const ALLOWED_METHODS: &str = "GET, OPTIONS";

/// Incoming function invocation
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    /// HTTP method (GET when absent)
    #[serde(default)]
    pub http_method: Option<String>,
    /// Decoded query string parameters
    #[serde(default)]
    pub query_string_parameters: Option<HashMap<String, String>>,
}

impl FunctionEvent {
    /// A plain GET with the given query parameters
    pub fn get(query: &[(&str, &str)]) -> Self {
        Self {
            http_method: Some("GET".to_string()),
            query_string_parameters: Some(
                query
                    .iter()
                    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                    .collect(),
            ),
        }
    }

    fn method(&self) -> &str {
        self.http_method.as_deref().unwrap_or("GET")
    }

    /// Whether the caller asked for spam-state submissions (`includeSpam=true`)
    pub fn include_spam(&self) -> bool {
        self.query_string_parameters
            .as_ref()
            .and_then(|q| q.get(INCLUDE_SPAM_PARAM))
            .is_some_and(|v| v == "true")
    }
}

/// Function response: status, headers, serialized body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResponse {
    /// HTTP status code
    pub status_code: u16,
    /// Response headers (lowercase names)
    pub headers: BTreeMap<String, String>,
    /// Response body
    pub body: String,
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<&'a str>,
}

fn base_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        (
            "content-type".to_string(),
            "application/json; charset=utf-8".to_string(),
        ),
        ("access-control-allow-origin".to_string(), "*".to_string()),
    ])
}

impl FunctionResponse {
    /// 200 with the rows as a JSON array and `cache-control: no-store`
    pub fn from_rows(rows: &[OutputRow]) -> Self {
        match serde_json::to_string(rows) {
            Ok(body) => {
                let mut headers = base_headers();
                headers.insert("cache-control".to_string(), "no-store".to_string());
                Self {
                    status_code: 200,
                    headers,
                    body,
                }
            }
            Err(e) => Self::from_error(&Error::Json(e)),
        }
    }

    /// Error response: `{ "error": .. }`, plus `details` for upstream failures
    pub fn from_error(err: &Error) -> Self {
        let body = ErrorBody {
            error: err.to_string(),
            details: err.details(),
        };

        Self {
            status_code: err.status_code(),
            headers: base_headers(),
            body: serde_json::to_string(&body)
                .unwrap_or_else(|_| r#"{"error":"Internal error"}"#.to_string()),
        }
    }

    /// Preflight answer: no body, permissive CORS
    pub fn preflight() -> Self {
        let mut headers = base_headers();
        headers.insert(
            "access-control-allow-methods".to_string(),
            ALLOWED_METHODS.to_string(),
        );
        headers.insert(
            "access-control-allow-headers".to_string(),
            "Content-Type".to_string(),
        );
        Self {
            status_code: 204,
            headers,
            body: String::new(),
        }
    }

    /// 405 for anything other than GET, HEAD or OPTIONS
    pub fn method_not_allowed() -> Self {
        let mut headers = base_headers();
        headers.insert("allow".to_string(), ALLOWED_METHODS.to_string());
        Self {
            status_code: 405,
            headers,
            body: r#"{"error":"Method not allowed"}"#.to_string(),
        }
    }

    /// Wrap a pipeline outcome
    pub fn from_result(result: &Result<Vec<OutputRow>>) -> Self {
        match result {
            Ok(rows) => Self::from_rows(rows),
            Err(err) => Self::from_error(err),
        }
    }
}

/// Handle a function event end to end
///
/// Preflight and method checks happen before configuration is consulted, so
/// an `OPTIONS` request succeeds even when the credential is missing.
/// `HEAD` gets the same status and headers as `GET` with an empty body.
pub async fn handle_event(event: &FunctionEvent, settings: Result<Settings>) -> FunctionResponse {
    let head_only = match event.method().to_ascii_uppercase().as_str() {
        "OPTIONS" => return FunctionResponse::preflight(),
        "GET" => false,
        "HEAD" => true,
        other => {
            warn!(method = other, "rejected method");
            return FunctionResponse::method_not_allowed();
        }
    };

    let mut response = handle_get(event, settings).await;
    if head_only {
        response.body.clear();
    }
    response
}

async fn handle_get(event: &FunctionEvent, settings: Result<Settings>) -> FunctionResponse {
    let settings = match settings {
        Ok(settings) => settings,
        Err(err) => {
            error!(%err, "configuration error");
            return FunctionResponse::from_error(&err);
        }
    };

    let service = match create_forms_service(&settings) {
        Ok(service) => service,
        Err(err) => return FunctionResponse::from_error(&err),
    };

    serve_entries(event, &settings.credential, service.as_ref()).await
}

/// Run the pipeline for a GET event against the given service
pub async fn serve_entries(
    event: &FunctionEvent,
    credential: &Credential,
    service: &dyn FormsService,
) -> FunctionResponse {
    let result = fetch_guestbook(service, credential, event.include_spam()).await;
    if let Err(err) = &result {
        error!(%err, "guestbook request failed");
    }
    FunctionResponse::from_result(&result)
}

/// Handle an event on its own task, turning a panic into a 500 response
pub async fn invoke(event: FunctionEvent, settings: Result<Settings>) -> FunctionResponse {
    run_guarded(async move { handle_event(&event, settings).await }).await
}

/// Run a handler future on its own task; a panic becomes a 500 response
pub async fn run_guarded<F>(handler: F) -> FunctionResponse
where
    F: Future<Output = FunctionResponse> + Send + 'static,
{
    match tokio::spawn(handler).await {
        Ok(response) => response,
        Err(join_err) => {
            error!(%join_err, "handler task failed");
            FunctionResponse::from_error(&Error::Internal(join_err.to_string()))
        }
    }
}
