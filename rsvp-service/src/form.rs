//! State of the RSVP form between page renders.
//!
//! All operations take a state and hand back a new one; nothing is mutated
//! in place.

use std::str::FromStr;

use log::{debug, warn};
use rsvp_shared::models::{RsvpSubmission, DEFAULT_ATTENDEES};

use crate::client::RsvpClient;

pub const VALIDATION_MESSAGE: &str = "Please enter your name and email.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";
pub const SUCCESS_MESSAGE: &str = "Thanks! Your RSVP has been received.";

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FormStatus {
    #[default]
    Idle,
    Success(String),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Phone,
    Attendees,
    Notes,
    Company,
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Field::Name),
            "email" => Ok(Field::Email),
            "phone" => Ok(Field::Phone),
            "attendees" => Ok(Field::Attendees),
            "notes" => Ok(Field::Notes),
            "company" => Ok(Field::Company),
            other => Err(format!("unknown form field '{}'", other)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub attendees: i64,
    pub notes: String,
    pub company: String,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            attendees: DEFAULT_ATTENDEES,
            notes: String::new(),
            company: String::new(),
        }
    }
}

impl FormDraft {
    /// Merge one raw input value. Attendees must parse as an integer,
    /// otherwise the previous count is kept.
    pub fn with_field(self, field: Field, raw: &str) -> Self {
        match field {
            Field::Name => Self {
                name: raw.to_string(),
                ..self
            },
            Field::Email => Self {
                email: raw.to_string(),
                ..self
            },
            Field::Phone => Self {
                phone: raw.to_string(),
                ..self
            },
            Field::Attendees => match raw.trim().parse::<i64>() {
                Ok(attendees) => Self { attendees, ..self },
                Err(_) => self,
            },
            Field::Notes => Self {
                notes: raw.to_string(),
                ..self
            },
            Field::Company => Self {
                company: raw.to_string(),
                ..self
            },
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }
}

impl From<&FormDraft> for RsvpSubmission {
    fn from(draft: &FormDraft) -> Self {
        RsvpSubmission {
            name: draft.name.clone(),
            email: draft.email.clone(),
            phone: draft.phone.clone(),
            attendees: draft.attendees,
            notes: draft.notes.clone(),
            company: draft.company.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FormState {
    pub draft: FormDraft,
    pub status: FormStatus,
}

impl FormState {
    /// Apply a named input change; unknown names leave the state untouched.
    pub fn with_field(self, name: &str, raw: &str) -> Self {
        match name.parse::<Field>() {
            Ok(field) => Self {
                draft: self.draft.with_field(field, raw),
                ..self
            },
            Err(err) => {
                debug!("Ignoring input: {}", err);
                self
            }
        }
    }

    /// Replay a sequence of input changes onto a fresh form.
    pub fn from_fields<I, K, V>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        fields
            .into_iter()
            .fold(Self::default(), |state, (name, value)| {
                state.with_field(name.as_ref(), value.as_ref())
            })
    }

    fn with_status(self, status: FormStatus) -> Self {
        Self { status, ..self }
    }
}

/// Validate the draft and, if it passes, send it once through `client`.
///
/// Success resets the draft; any failure keeps it for another attempt.
pub async fn submit<C: RsvpClient + ?Sized>(state: FormState, client: &C) -> FormState {
    let state = state.with_status(FormStatus::Idle);

    if !state.draft.is_complete() {
        return state.with_status(FormStatus::Error(VALIDATION_MESSAGE.to_string()));
    }

    let submission = RsvpSubmission::from(&state.draft);
    match client.submit(&submission).await {
        Ok(status) if status.is_success() => FormState {
            draft: FormDraft::default(),
            status: FormStatus::Success(SUCCESS_MESSAGE.to_string()),
        },
        Ok(status) => {
            warn!("RSVP submission returned status {}", status);
            state.with_status(FormStatus::Error(FAILURE_MESSAGE.to_string()))
        }
        Err(err) => {
            warn!("RSVP submission failed: {}", err);
            state.with_status(FormStatus::Error(FAILURE_MESSAGE.to_string()))
        }
    }
}
