//! Router and sink helpers shared by the HTTP integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use contact_form::{AppState, Config};
use contact_form_contact::{Command, ContactRequest, Receipt, SubmissionSink, bail};
use http_body_util::BodyExt;
use tower::ServiceExt;

#[derive(Default)]
pub struct RecordingSink {
    requests: Mutex<Vec<ContactRequest>>,
}

impl RecordingSink {
    pub fn requests(&self) -> Vec<ContactRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl SubmissionSink for RecordingSink {
    fn submit(&self, request: &ContactRequest) -> contact_form_contact::Result<Receipt> {
        self.requests.lock().unwrap().push(request.clone());

        Ok(Receipt {
            id: "01HZXK7Q3VYJ9M2W4T6R8P0ABC".to_owned(),
        })
    }
}

pub struct FailingSink;

impl SubmissionSink for FailingSink {
    fn submit(&self, _request: &ContactRequest) -> contact_form_contact::Result<Receipt> {
        bail!("sink unavailable")
    }
}

pub fn create_test_app(sink: Arc<dyn SubmissionSink>) -> Router {
    contact_form::router(AppState {
        config: Config::default(),
        command: Command::new(sink),
    })
}

pub fn valid_form() -> Vec<(&'static str, &'static str)> {
    vec![
        ("firstName", "Ada"),
        ("lastName", "Lovelace"),
        ("email", "ada@example.com"),
        ("queryType", "System Request"),
        ("message", "The engine needs a new punched card reader."),
        ("consent", "on"),
    ]
}

pub async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
    let response = router
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    read(response).await
}

pub async fn post_form(router: &Router, fields: &[(&str, &str)]) -> (StatusCode, String) {
    let body = serde_urlencoded::to_string(fields).unwrap();

    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/contact")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    read(response).await
}

async fn read(response: axum::response::Response) -> (StatusCode, String) {
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();

    (status, String::from_utf8(body.to_vec()).unwrap())
}
