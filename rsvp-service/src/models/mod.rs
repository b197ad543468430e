use serde::{Deserialize, Serialize};

// Response DTOs

/// Body returned by the submission endpoint.
///
/// `error` is only present for caller-correctable rejections.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RsvpResponse {
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RsvpResponse {
    pub fn ok() -> Self {
        Self {
            ok: true,
            error: None,
        }
    }

    pub fn rejected(reason: &str) -> Self {
        Self {
            ok: false,
            error: Some(reason.to_string()),
        }
    }

    pub fn failed() -> Self {
        Self {
            ok: false,
            error: None,
        }
    }
}

#[derive(Serialize, Debug)]
pub struct HealthResponse {
    pub status: &'static str,
}
