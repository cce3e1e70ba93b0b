//! Mock forms service for testing
//!
//! These are test utilities - not all may be used in every test binary.

#![allow(dead_code)]

use async_trait::async_trait;
use guestbook_relay::error::{Error, Result, UpstreamCall};
use guestbook_relay::forms::FormsService;
use guestbook_relay::types::{FormSummary, Submission};
use std::collections::HashMap;
use std::sync::Mutex;

/// Injected upstream failure
#[derive(Debug, Clone)]
struct InjectedFailure {
    status: u16,
    body: String,
}

/// Simple mock forms service for testing
///
/// Features:
/// - Canned form listing and per-form submissions
/// - Call tracking for verification
/// - Upstream error injection per call
#[derive(Default)]
pub struct MockFormsService {
    forms: Mutex<Vec<FormSummary>>,
    submissions: Mutex<HashMap<String, Vec<Submission>>>,
    // Call tracking
    list_forms_calls: Mutex<Vec<Option<String>>>,
    list_submissions_calls: Mutex<Vec<String>>,
    // Error injection
    error_on_list_forms: Mutex<Option<InjectedFailure>>,
    error_on_list_submissions: Mutex<Option<InjectedFailure>>,
}

impl MockFormsService {
    /// Create a mock returning the given forms
    pub fn with_forms(forms: Vec<FormSummary>) -> Self {
        let mock = Self::default();
        *mock.forms.lock().unwrap() = forms;
        mock
    }

    /// Set the submissions returned for a form
    pub fn set_submissions(&self, form_id: &str, submissions: Vec<Submission>) {
        self.submissions
            .lock()
            .unwrap()
            .insert(form_id.to_string(), submissions);
    }

    // === Error injection methods ===

    /// Make `list_forms` fail with an upstream status and body
    pub fn fail_list_forms(&self, status: u16, body: &str) {
        *self.error_on_list_forms.lock().unwrap() = Some(InjectedFailure {
            status,
            body: body.to_string(),
        });
    }

    /// Make `list_submissions` fail with an upstream status and body
    pub fn fail_list_submissions(&self, status: u16, body: &str) {
        *self.error_on_list_submissions.lock().unwrap() = Some(InjectedFailure {
            status,
            body: body.to_string(),
        });
    }

    // === Call verification methods ===

    /// Site scopes `list_forms` was called with
    pub fn get_list_forms_calls(&self) -> Vec<Option<String>> {
        self.list_forms_calls.lock().unwrap().clone()
    }

    /// Form ids `list_submissions` was called with
    pub fn get_list_submissions_calls(&self) -> Vec<String> {
        self.list_submissions_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl FormsService for MockFormsService {
    async fn list_forms(&self, site_id: Option<&str>) -> Result<Vec<FormSummary>> {
        self.list_forms_calls
            .lock()
            .unwrap()
            .push(site_id.map(ToString::to_string));

        if let Some(f) = self.error_on_list_forms.lock().unwrap().as_ref() {
            return Err(Error::Upstream {
                call: UpstreamCall::ListForms,
                status: f.status,
                body: f.body.clone(),
            });
        }

        Ok(self.forms.lock().unwrap().clone())
    }

    async fn list_submissions(&self, form_id: &str) -> Result<Vec<Submission>> {
        self.list_submissions_calls
            .lock()
            .unwrap()
            .push(form_id.to_string());

        if let Some(f) = self.error_on_list_submissions.lock().unwrap().as_ref() {
            return Err(Error::Upstream {
                call: UpstreamCall::ListSubmissions,
                status: f.status,
                body: f.body.clone(),
            });
        }

        Ok(self
            .submissions
            .lock()
            .unwrap()
            .get(form_id)
            .cloned()
            .unwrap_or_default())
    }
}
