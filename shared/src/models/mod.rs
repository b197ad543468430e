use chrono::Local;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const DEFAULT_ATTENDEES: i64 = 1;

/// A single RSVP as it travels from the page to the submission endpoint.
///
/// Missing and `null` values decode to their defaults, so a partial body
/// still yields a submission and the required-field check decides.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RsvpSubmission {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub phone: String,
    #[serde(default = "default_attendees", deserialize_with = "attendees_or_default")]
    pub attendees: i64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: String,
    // Honeypot: hidden from people, filled in by bots. Any JSON type is
    // accepted so a bot's value never fails decoding.
    #[serde(default, deserialize_with = "honeypot_text")]
    pub company: String,
}

impl Default for RsvpSubmission {
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

impl RsvpSubmission {
    pub fn has_required_fields(&self) -> bool {
        !self.name.trim().is_empty() && !self.email.trim().is_empty()
    }

    pub fn subject(&self) -> String {
        format!("New Soul Collage RSVP — {} ({})", self.name, self.attendees)
    }

    /// Plain-text body listing every field plus the submission time.
    pub fn text_body(&self, submitted_at: &str) -> String {
        [
            format!("Name: {}", self.name),
            format!("Email: {}", self.email),
            format!("Phone: {}", self.phone),
            format!("Attendees: {}", self.attendees),
            format!("Notes: {}", self.notes),
            format!("Submitted: {}", submitted_at),
        ]
        .join("\n")
    }
}

/// A fully addressed plain-text message handed to a [`Mailer`](crate::mail::Mailer).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutgoingMail {
    pub to: String,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub text: String,
}

fn default_attendees() -> i64 {
    DEFAULT_ATTENDEES
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// True when a raw body's `company` field holds anything truthy.
///
/// Runs before typed decoding, so a bot whose other fields are the wrong
/// type still gets the quiet success.
pub fn honeypot_filled(body: &Value) -> bool {
    body.get("company").is_some_and(is_truthy)
}

// JavaScript truthiness: null, false, 0 and "" are empty
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn honeypot_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        other if is_truthy(&other) => other.to_string(),
        _ => String::new(),
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum AttendeesInput {
    Whole(i64),
    Fractional(f64),
    Text(String),
}

// Accepts 2, 2.0 and "2"; null and "" mean the default
fn attendees_or_default<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<AttendeesInput>::deserialize(deserializer)? {
        None => Ok(DEFAULT_ATTENDEES),
        Some(AttendeesInput::Whole(n)) => Ok(n),
        Some(AttendeesInput::Fractional(f)) => whole_number(f)
            .ok_or_else(|| D::Error::custom(format!("attendees must be a whole number, got {}", f))),
        Some(AttendeesInput::Text(text)) => {
            let text = text.trim();
            if text.is_empty() {
                return Ok(DEFAULT_ATTENDEES);
            }
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(whole_number))
                .ok_or_else(|| D::Error::custom(format!("attendees is not a number: {:?}", text)))
        }
    }
}

fn whole_number(f: f64) -> Option<i64> {
    let in_range = f >= i64::MIN as f64 && f <= i64::MAX as f64;
    (f.is_finite() && f.fract() == 0.0 && in_range).then(|| f as i64)
}

// Helper function to get the submission timestamp in server local time
pub fn submitted_at_str() -> String {
    Local::now().format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
