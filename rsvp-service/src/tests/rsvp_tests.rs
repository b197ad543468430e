use axum::body::Body;
use axum::http::{Request, StatusCode};
use rsvp_shared::test_utils::http_test_utils::response_to_json;
use rsvp_shared::test_utils::mock_mailer::MockMailer;
use log::Level;
use rsvp_shared::test_utils::test_logging::logged;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use super::utils::{create_test_app, json_request, test_config, RECIPIENT, SENDER};
use crate::config::RsvpConfig;
use crate::handlers::rsvp_handlers::compose_mail;
use crate::routes::create_router_with_mailer;
use rsvp_shared::models::RsvpSubmission;

#[tokio::test]
async fn test_valid_rsvp_is_sent_once() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "attendees": 2
    });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_to_json(response).await, json!({ "ok": true }));

    let calls = mailer.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].subject, "New Soul Collage RSVP — Jane Doe (2)");
    assert_eq!(calls[0].reply_to, "jane@example.com");
    assert_eq!(calls[0].to, RECIPIENT);
    assert_eq!(calls[0].from, SENDER);
}

#[tokio::test]
async fn test_mail_body_lists_all_fields() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({
        "name": "Jane Doe",
        "email": "jane@example.com",
        "phone": "503-555-0100",
        "attendees": 4,
        "notes": "Vegetarian snacks please"
    });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let text = mailer.calls().remove(0).text;
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "Name: Jane Doe");
    assert_eq!(lines[1], "Email: jane@example.com");
    assert_eq!(lines[2], "Phone: 503-555-0100");
    assert_eq!(lines[3], "Attendees: 4");
    assert_eq!(lines[4], "Notes: Vegetarian snacks please");
    assert!(lines[5].starts_with("Submitted: "));
    assert!(lines[5].len() > "Submitted: ".len());
}

#[tokio::test]
async fn test_defaults_fill_missing_optional_fields() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({ "name": "Sam", "email": "sam@example.com" });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let mail = mailer.calls().remove(0);
    assert_eq!(mail.subject, "New Soul Collage RSVP — Sam (1)");
    assert!(mail.text.contains("Phone: \n"));
    assert!(mail.text.contains("Notes: \n"));
}

#[tokio::test]
async fn test_missing_name_is_rejected() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({ "name": "", "email": "jane@example.com" });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response_to_json(response).await,
        json!({ "ok": false, "error": "Missing fields" })
    );
    assert_eq!(mailer.call_count(), 0);
}

#[tokio::test]
async fn test_missing_null_and_blank_required_fields_are_rejected() {
    let payloads = [
        json!({ "email": "jane@example.com" }),
        json!({ "name": "Jane Doe" }),
        json!({ "name": null, "email": "jane@example.com" }),
        json!({ "name": "Jane Doe", "email": "   " }),
        json!({ "name": "  \t", "email": "jane@example.com" }),
        json!({}),
    ];

    for payload in payloads {
        let mailer = Arc::new(MockMailer::new());
        let app = create_test_app(mailer.clone(), test_config());

        let response = app
            .oneshot(json_request("/api/rsvp", &payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(
            response_to_json(response).await,
            json!({ "ok": false, "error": "Missing fields" })
        );
        assert_eq!(mailer.call_count(), 0, "payload: {}", payload);
    }
}

#[tokio::test]
async fn test_honeypot_looks_like_success_and_sends_nothing() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({
        "name": "Bot",
        "email": "bot@spam.com",
        "company": "Acme"
    });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_to_json(response).await, json!({ "ok": true }));
    assert_eq!(mailer.call_count(), 0);
}

#[tokio::test]
async fn test_honeypot_wins_over_missing_fields() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({ "company": "Acme" });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_to_json(response).await, json!({ "ok": true }));
    assert_eq!(mailer.call_count(), 0);
}

#[tokio::test]
async fn test_non_string_honeypot_values_look_like_success() {
    for company in [json!(1), json!(true), json!(["x"])] {
        let mailer = Arc::new(MockMailer::new());
        let app = create_test_app(mailer.clone(), test_config());

        let payload = json!({ "name": "Bot", "email": "bot@spam.com", "company": company });

        let response = app
            .oneshot(json_request("/api/rsvp", &payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "company: {}", company);
        assert_eq!(response_to_json(response).await, json!({ "ok": true }));
        assert_eq!(mailer.call_count(), 0, "company: {}", company);
    }
}

#[tokio::test]
async fn test_honeypot_wins_over_badly_typed_fields() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({ "name": 5, "email": false, "attendees": "lots", "company": "Acme" });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_to_json(response).await, json!({ "ok": true }));
    assert_eq!(mailer.call_count(), 0);
}

#[tokio::test]
async fn test_empty_honeypot_values_still_send() {
    for company in [json!(0), json!(false), json!(""), json!(null)] {
        let mailer = Arc::new(MockMailer::new());
        let app = create_test_app(mailer.clone(), test_config());

        let payload = json!({ "name": "Jane Doe", "email": "jane@example.com", "company": company });

        let response = app
            .oneshot(json_request("/api/rsvp", &payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "company: {}", company);
        assert_eq!(mailer.call_count(), 1, "company: {}", company);
    }
}

#[tokio::test(start_paused = true)]
async fn test_honeypot_waits_before_answering() {
    let mailer = Arc::new(MockMailer::new());
    let config = RsvpConfig {
        honeypot_delay: Duration::from_secs(2),
        ..test_config()
    };
    let app = create_test_app(mailer.clone(), config);

    let payload = json!({ "name": "Bot", "email": "bot@spam.com", "company": "Acme" });

    let started = tokio::time::Instant::now();
    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert!(started.elapsed() >= Duration::from_secs(2));
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_to_json(response).await, json!({ "ok": true }));
    assert_eq!(mailer.call_count(), 0);
}

#[tokio::test]
async fn test_honeypot_response_matches_genuine_success() {
    let spam_mailer = Arc::new(MockMailer::new());
    let spam = create_test_app(spam_mailer, test_config())
        .oneshot(json_request(
            "/api/rsvp",
            &json!({ "name": "Bot", "email": "bot@spam.com", "company": "Acme" }),
        ))
        .await
        .unwrap();

    let real_mailer = Arc::new(MockMailer::new());
    let real = create_test_app(real_mailer, test_config())
        .oneshot(json_request(
            "/api/rsvp",
            &json!({ "name": "Jane", "email": "jane@example.com" }),
        ))
        .await
        .unwrap();

    assert_eq!(spam.status(), real.status());
    assert_eq!(
        spam.headers().get("content-type"),
        real.headers().get("content-type")
    );
    assert_eq!(response_to_json(spam).await, response_to_json(real).await);
}

#[tokio::test]
async fn test_transport_failure_returns_opaque_500() {
    let mailer = Arc::new(MockMailer::failing("535 authentication failed for user secret"));
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({ "name": "Jane Doe", "email": "jane@example.com" });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response_to_json(response).await, json!({ "ok": false }));
    assert_eq!(mailer.call_count(), 1);
}

#[tokio::test]
async fn test_transport_failure_is_logged_at_error_level() {
    let reason = "421 relay closed connection mid-send";
    let mailer = Arc::new(MockMailer::failing(reason));
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({ "name": "Jane Doe", "email": "jane@example.com" });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let errors = logged(Level::Error, reason);
    assert_eq!(errors.len(), 1, "expected one error line mentioning the failure");
    assert!(errors[0].message.starts_with("RSVP error:"));
    assert!(logged(Level::Warn, reason).is_empty());
}

#[tokio::test]
async fn test_missing_recipient_returns_500() {
    let mailer = Arc::new(MockMailer::new());
    let config = RsvpConfig {
        recipient: None,
        ..test_config()
    };
    let app = create_test_app(mailer.clone(), config);

    let payload = json!({ "name": "Jane Doe", "email": "jane@example.com" });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response_to_json(response).await, json!({ "ok": false }));
    assert_eq!(mailer.call_count(), 0);
}

#[tokio::test]
async fn test_malformed_body_returns_500() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let request = Request::builder()
        .method("POST")
        .uri("/api/rsvp")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response_to_json(response).await, json!({ "ok": false }));
    assert_eq!(mailer.call_count(), 0);
}

#[tokio::test]
async fn test_identical_submissions_send_twice() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({ "name": "Jane Doe", "email": "jane@example.com" });

    for _ in 0..2 {
        let response = app
            .clone()
            .oneshot(json_request("/api/rsvp", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(mailer.call_count(), 2);
}

#[tokio::test]
async fn test_attendee_count_is_not_range_checked() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({ "name": "Jane Doe", "email": "jane@example.com", "attendees": 25 });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mailer.calls()[0].subject, "New Soul Collage RSVP — Jane Doe (25)");
}

#[tokio::test]
async fn test_integral_attendees_from_any_json_type_are_sent() {
    for (attendees, expected) in [(json!(2.0), 2), (json!("2"), 2), (json!(""), 1)] {
        let mailer = Arc::new(MockMailer::new());
        let app = create_test_app(mailer.clone(), test_config());

        let payload = json!({ "name": "Jane Doe", "email": "jane@example.com", "attendees": attendees });

        let response = app
            .oneshot(json_request("/api/rsvp", &payload))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK, "attendees: {}", attendees);
        assert_eq!(
            mailer.calls()[0].subject,
            format!("New Soul Collage RSVP — Jane Doe ({})", expected)
        );
    }
}

#[tokio::test]
async fn test_fractional_attendees_return_500() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_test_app(mailer.clone(), test_config());

    let payload = json!({ "name": "Jane Doe", "email": "jane@example.com", "attendees": 2.5 });

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response_to_json(response).await, json!({ "ok": false }));
    assert_eq!(mailer.call_count(), 0);
}

#[tokio::test]
async fn test_routes_nest_under_prefix() {
    let mailer = Arc::new(MockMailer::new());
    let app = create_router_with_mailer(mailer.clone(), test_config(), "/Prod");

    let payload = json!({ "name": "Jane Doe", "email": "jane@example.com" });

    let response = app
        .clone()
        .oneshot(json_request("/Prod/api/rsvp", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(mailer.call_count(), 1);

    let response = app
        .oneshot(json_request("/api/rsvp", &payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_and_fallback() {
    let app = create_test_app(Arc::new(MockMailer::new()), test_config());

    let response = app
        .clone()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response_to_json(response).await, json!({ "status": "ok" }));

    let response = app
        .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_compose_mail_falls_back_to_smtp_user() {
    let mut config = RsvpConfig {
        sender: None,
        ..test_config()
    };
    config.smtp.username = Some("smtp-user@example.com".into());

    let submission = RsvpSubmission {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        ..RsvpSubmission::default()
    };

    let mail = compose_mail(&submission, &config, "9/1/2025, 10:00:00 AM").unwrap();

    assert_eq!(mail.from, "smtp-user@example.com");
    assert_eq!(mail.to, RECIPIENT);
    assert_eq!(mail.reply_to, "jane@example.com");
    assert!(mail.text.ends_with("Submitted: 9/1/2025, 10:00:00 AM"));
}

#[test]
fn test_compose_mail_needs_a_sender() {
    let config = RsvpConfig {
        sender: None,
        ..test_config()
    };

    let submission = RsvpSubmission {
        name: "Jane Doe".into(),
        email: "jane@example.com".into(),
        ..RsvpSubmission::default()
    };

    assert!(compose_mail(&submission, &config, "now").is_err());
}
