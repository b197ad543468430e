//! How the page reaches the submission endpoint.

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use rsvp_shared::models::RsvpSubmission;
use thiserror::Error;
use tower::ServiceExt;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Request failed: {0}")]
    Request(String),
}

/// Sends one submission and reports the HTTP status it got back.
#[async_trait]
pub trait RsvpClient: Send + Sync + 'static {
    async fn submit(&self, submission: &RsvpSubmission) -> Result<StatusCode, ClientError>;
}

/// Client that drives an axum router in-process with a real JSON POST.
pub struct RouterClient {
    router: Router,
    path: String,
}

impl RouterClient {
    pub fn new(router: Router, path: impl Into<String>) -> Self {
        Self {
            router,
            path: path.into(),
        }
    }
}

#[async_trait]
impl RsvpClient for RouterClient {
    async fn submit(&self, submission: &RsvpSubmission) -> Result<StatusCode, ClientError> {
        let body = serde_json::to_vec(submission)?;

        let request = Request::builder()
            .method(Method::POST)
            .uri(self.path.as_str())
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .map_err(|e| ClientError::Request(e.to_string()))?;

        let response = match self.router.clone().oneshot(request).await {
            Ok(response) => response,
            Err(never) => match never {},
        };

        let status = response.status();
        // Drain the body so a broken response counts as a failed request
        response
            .into_body()
            .collect()
            .await
            .map_err(|e| ClientError::Request(e.to_string()))?;

        Ok(status)
    }
}
