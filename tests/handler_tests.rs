//! Handler tests: status codes, headers and bodies seen by the widget

mod common;

use async_trait::async_trait;
use common::fixtures::{make_credential, make_form, make_spam, make_verified};
use common::mock_forms::MockFormsService;
use guestbook_relay::config::Settings;
use guestbook_relay::error::Error;
use guestbook_relay::forms::FormsService;
use guestbook_relay::handler::{
    FunctionEvent, FunctionResponse, handle_event, invoke, run_guarded, serve_entries,
};
use guestbook_relay::types::{FormSummary, Submission};
use serde_json::{Value, json};

/// Service that panics on every call
struct PanickingService;

#[async_trait]
impl FormsService for PanickingService {
    async fn list_forms(&self, _site_id: Option<&str>) -> guestbook_relay::Result<Vec<FormSummary>> {
        panic!("forms backend exploded");
    }

    async fn list_submissions(&self, _form_id: &str) -> guestbook_relay::Result<Vec<Submission>> {
        panic!("forms backend exploded");
    }
}

fn body_json(response: &FunctionResponse) -> Value {
    serde_json::from_str(&response.body).unwrap()
}

fn missing_token() -> guestbook_relay::Result<Settings> {
    Settings::from_lookup(|_| None, Some("site-a"))
}

#[tokio::test]
async fn test_scenario_verified_entry() {
    let mock = MockFormsService::with_forms(vec![make_form("f1", "Guestbook")]);
    mock.set_submissions("f1", vec![make_verified("Ann", "Hi")]);

    let response = serve_entries(&FunctionEvent::get(&[]), &make_credential(), &mock).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.headers["cache-control"], "no-store");
    assert_eq!(response.headers["access-control-allow-origin"], "*");
    assert_eq!(
        body_json(&response),
        json!([{
            "name": "Ann",
            "message": "Hi",
            "from": "Ann",
            "created_at": "2024-01-01",
            "state": "verified"
        }])
    );
}

#[tokio::test]
async fn test_scenario_spam_hidden_by_default() {
    let mock = MockFormsService::with_forms(vec![make_form("f1", "Guestbook")]);
    mock.set_submissions("f1", vec![make_spam("Ann", "Hi")]);

    let response = serve_entries(&FunctionEvent::get(&[]), &make_credential(), &mock).await;
    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "[]");

    let response = serve_entries(
        &FunctionEvent::get(&[("includeSpam", "yes")]),
        &make_credential(),
        &mock,
    )
    .await;
    assert_eq!(response.body, "[]");

    let response = serve_entries(
        &FunctionEvent::get(&[("includeSpam", "true")]),
        &make_credential(),
        &mock,
    )
    .await;
    assert_eq!(body_json(&response)[0]["state"], "spam");
}

#[tokio::test]
async fn test_scenario_no_guestbook_form() {
    let mock = MockFormsService::with_forms(vec![make_form("f2", "contact")]);

    let response = serve_entries(&FunctionEvent::get(&[]), &make_credential(), &mock).await;

    assert_eq!(response.status_code, 200);
    assert_eq!(response.body, "[]");
    assert_eq!(response.headers["cache-control"], "no-store");
}

#[tokio::test]
async fn test_scenario_forms_listing_forbidden() {
    let mock = MockFormsService::with_forms(vec![]);
    mock.fail_list_forms(403, r#"{"code":403,"message":"Access Denied"}"#);

    let response = serve_entries(&FunctionEvent::get(&[]), &make_credential(), &mock).await;

    assert_eq!(response.status_code, 403);
    assert_eq!(
        body_json(&response),
        json!({
            "error": "Failed to list forms",
            "details": r#"{"code":403,"message":"Access Denied"}"#
        })
    );
}

#[tokio::test]
async fn test_missing_credential_is_500_regardless_of_query() {
    for event in [
        FunctionEvent::get(&[]),
        FunctionEvent::get(&[("includeSpam", "true")]),
        FunctionEvent::default(),
    ] {
        let response = handle_event(&event, missing_token()).await;
        assert_eq!(response.status_code, 500);
        let error = body_json(&response)["error"].as_str().unwrap().to_string();
        assert!(error.contains("NETLIFY_AUTH_TOKEN"), "got: {error}");
    }
}

#[tokio::test]
async fn test_preflight_does_not_need_configuration() {
    let event = FunctionEvent {
        http_method: Some("OPTIONS".to_string()),
        query_string_parameters: None,
    };

    let response = handle_event(&event, missing_token()).await;

    assert_eq!(response.status_code, 204);
    assert!(response.body.is_empty());
    assert_eq!(response.headers["access-control-allow-methods"], "GET, OPTIONS");
    assert_eq!(response.headers["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn test_unsupported_method_rejected() {
    let event = FunctionEvent {
        http_method: Some("POST".to_string()),
        query_string_parameters: None,
    };

    let response = handle_event(&event, missing_token()).await;

    assert_eq!(response.status_code, 405);
    assert_eq!(response.headers["allow"], "GET, OPTIONS");
}

#[test]
fn test_unexpected_error_is_500_with_description() {
    let err: Error = serde_json::from_str::<Vec<u8>>("not json").unwrap_err().into();

    let response = FunctionResponse::from_error(&err);

    assert_eq!(response.status_code, 500);
    let body = body_json(&response);
    assert!(body["error"].as_str().unwrap().starts_with("JSON error:"));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_panicking_handler_becomes_500() {
    let response = run_guarded(async {
        serve_entries(&FunctionEvent::get(&[]), &make_credential(), &PanickingService).await
    })
    .await;

    assert_eq!(response.status_code, 500);
    assert_eq!(response.headers["access-control-allow-origin"], "*");
    let body = body_json(&response);
    assert!(body["error"].as_str().unwrap().starts_with("Internal error:"));
    assert!(body.get("details").is_none());
}

#[tokio::test]
async fn test_invoke_returns_handler_response() {
    let response = invoke(FunctionEvent::default(), missing_token()).await;
    assert_eq!(response.status_code, 500);
    assert!(body_json(&response)["error"]
        .as_str()
        .unwrap()
        .contains("NETLIFY_AUTH_TOKEN"));

    let preflight = FunctionEvent {
        http_method: Some("options".to_string()),
        query_string_parameters: None,
    };
    let response = invoke(preflight, missing_token()).await;
    assert_eq!(response.status_code, 204);
}
