use axum::{body::Bytes, extract::State, Json};
use log::{debug, info};

use rsvp_shared::{
    error::MailError,
    mail::Mailer,
    models::{honeypot_filled, submitted_at_str, OutgoingMail, RsvpSubmission},
};
use serde_json::Value;

use crate::{
    config::RsvpConfig,
    error::{AppError, Result},
    handlers::RsvpState,
    models::RsvpResponse,
};

// POST /api/rsvp - Validate one RSVP and relay it by email
pub async fn submit_rsvp<M: Mailer + ?Sized>(
    State(state): State<RsvpState<M>>,
    body: Bytes,
) -> Result<Json<RsvpResponse>> {
    // Decode by hand so a bad body takes the same path as any other failure
    let raw: Value = serde_json::from_slice(&body)?;

    // Honeypot: answer exactly like a real success, send nothing. Checked on
    // the raw value so a badly typed bot body can't fall into the 500 path.
    if honeypot_filled(&raw) {
        debug!("Honeypot field filled, discarding submission");
        tokio::time::sleep(state.config.honeypot_delay).await;
        return Ok(Json(RsvpResponse::ok()));
    }

    let submission: RsvpSubmission = serde_json::from_value(raw)?;

    if !submission.has_required_fields() {
        return Err(AppError::MissingFields);
    }

    let mail = compose_mail(&submission, &state.config, &submitted_at_str())?;
    state.mailer.send(mail).await?;

    info!("RSVP relayed for {} attendee(s)", submission.attendees);
    Ok(Json(RsvpResponse::ok()))
}

/// Address and render the notification for one submission.
pub fn compose_mail(
    submission: &RsvpSubmission,
    config: &RsvpConfig,
    submitted_at: &str,
) -> std::result::Result<OutgoingMail, MailError> {
    Ok(OutgoingMail {
        to: config.recipient()?.to_string(),
        from: config.sender()?.to_string(),
        reply_to: submission.email.clone(),
        subject: submission.subject(),
        text: submission.text_body(submitted_at),
    })
}
