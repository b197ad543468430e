use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use rsvp_shared::error::MailError;
use thiserror::Error;

use crate::models::RsvpResponse;

pub const MISSING_FIELDS: &str = "Missing fields";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing fields")]
    MissingFields,

    #[error("Malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("Mail delivery failed: {0}")]
    Mail(#[from] MailError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Only the missing-fields case tells the caller anything
        let (status, body) = match &self {
            AppError::MissingFields => {
                log::warn!("Rejecting RSVP: {}", self);
                (StatusCode::BAD_REQUEST, RsvpResponse::rejected(MISSING_FIELDS))
            }
            AppError::Malformed(_) | AppError::Mail(_) => {
                log::error!("RSVP error: {}", self);
                (StatusCode::INTERNAL_SERVER_ERROR, RsvpResponse::failed())
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
