use axum::{
    body::Body,
    http::{header, Request},
    Router,
};
use rsvp_shared::config::SmtpConfig;
use rsvp_shared::test_utils::mock_mailer::MockMailer;
use rsvp_shared::test_utils::test_logging::init_test_logging;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

use crate::config::RsvpConfig;
use crate::routes::create_router_with_mailer;

pub const RECIPIENT: &str = "host@example.com";
pub const SENDER: &str = "rsvp@example.com";

/// Config with both addresses set; SMTP settings are irrelevant to the mock
pub fn test_config() -> RsvpConfig {
    RsvpConfig {
        smtp: SmtpConfig::default(),
        recipient: Some(RECIPIENT.to_string()),
        sender: Some(SENDER.to_string()),
        honeypot_delay: Duration::ZERO,
    }
}

/// Router wired to the given mock mailer, no route prefix
pub fn create_test_app(mailer: Arc<MockMailer>, config: RsvpConfig) -> Router {
    init_test_logging();
    create_router_with_mailer(mailer, config, "")
}

pub fn json_request(uri: &str, payload: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn form_request(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}
