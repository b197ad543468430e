use std::env;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use rsvp_shared::config::{non_empty, SmtpConfig};
use rsvp_shared::error::{missing_setting, MailError};

pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_HONEYPOT_DELAY: Duration = Duration::from_millis(1000);

/// Everything the submission handler needs to address and send a message.
#[derive(Clone, Debug)]
pub struct RsvpConfig {
    pub smtp: SmtpConfig,
    /// Where RSVPs are delivered (`RSVP_TO`)
    pub recipient: Option<String>,
    /// Sender override (`RSVP_FROM`); the SMTP username is used otherwise
    pub sender: Option<String>,
    /// How long a honeypot hit waits before answering, roughly the time a
    /// real SMTP send takes (`RSVP_HONEYPOT_DELAY_MS`)
    pub honeypot_delay: Duration,
}

impl Default for RsvpConfig {
    fn default() -> Self {
        Self {
            smtp: SmtpConfig::default(),
            recipient: None,
            sender: None,
            honeypot_delay: DEFAULT_HONEYPOT_DELAY,
        }
    }
}

impl RsvpConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let honeypot_delay = match lookup("RSVP_HONEYPOT_DELAY_MS").map(|raw| raw.trim().parse::<u64>()) {
            Some(Ok(millis)) => Duration::from_millis(millis),
            Some(Err(err)) => {
                log::warn!("Ignoring invalid RSVP_HONEYPOT_DELAY_MS: {}", err);
                DEFAULT_HONEYPOT_DELAY
            }
            None => DEFAULT_HONEYPOT_DELAY,
        };

        Self {
            recipient: non_empty(lookup("RSVP_TO")),
            sender: non_empty(lookup("RSVP_FROM")),
            honeypot_delay,
            smtp: SmtpConfig::from_lookup(lookup),
        }
    }

    pub fn recipient(&self) -> Result<&str, MailError> {
        self.recipient
            .as_deref()
            .ok_or_else(|| missing_setting("RSVP_TO"))
    }

    pub fn sender(&self) -> Result<&str, MailError> {
        self.sender
            .as_deref()
            .or(self.smtp.username.as_deref())
            .ok_or_else(|| missing_setting("RSVP_FROM or SMTP_USER"))
    }
}

/// Process-level settings for the HTTP service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Prefix all routes are nested under, e.g. an API Gateway stage
    pub base_path: String,
    pub bind_addr: IpAddr,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            bind_addr: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let base_path = non_empty(lookup("BASE_PATH"))
            .map(|p| normalize_base_path(&p))
            .unwrap_or(defaults.base_path);

        let bind_addr = match lookup("BIND_ADDR").map(|raw| raw.parse::<IpAddr>()) {
            Some(Ok(addr)) => addr,
            Some(Err(err)) => {
                log::warn!("Ignoring invalid BIND_ADDR: {}", err);
                defaults.bind_addr
            }
            None => defaults.bind_addr,
        };

        let port = match lookup("PORT").map(|raw| raw.parse::<u16>()) {
            Some(Ok(port)) => port,
            Some(Err(err)) => {
                log::warn!("Ignoring invalid PORT: {}", err);
                defaults.port
            }
            None => defaults.port,
        };

        Self {
            base_path,
            bind_addr,
            port,
        }
    }
}

// "prod/" and "/prod" both become "/prod"; "/" becomes ""
fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}
