use std::env;
use std::str::FromStr;

pub const DEFAULT_SMTP_PORT: u16 = 465;

/// How the SMTP connection is secured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Encryption {
    /// Implicit TLS (SMTPS), usually port 465
    #[default]
    Tls,
    /// Opportunistic STARTTLS, usually port 587
    StartTls,
    /// Plain text, local development only
    None,
}

impl FromStr for Encryption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tls" => Ok(Encryption::Tls),
            "starttls" => Ok(Encryption::StartTls),
            "none" => Ok(Encryption::None),
            other => Err(format!("unknown SMTP encryption mode '{}'", other)),
        }
    }
}

/// Outbound SMTP settings.
///
/// Every value is optional here; missing pieces are reported when a
/// message is sent rather than at start-up.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SmtpConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub encryption: Encryption,
}

impl SmtpConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the config from any key lookup, so tests don't have to touch
    /// the process environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("SMTP_PORT") {
            Some(raw) => raw.trim().parse().ok(),
            None => Some(DEFAULT_SMTP_PORT),
        };

        let encryption = match lookup("SMTP_ENCRYPTION") {
            Some(raw) => raw.parse::<Encryption>().unwrap_or_else(|err| {
                log::warn!("{}, falling back to implicit TLS", err);
                Encryption::Tls
            }),
            None => Encryption::default(),
        };

        Self {
            host: non_empty(lookup("SMTP_HOST")),
            port,
            username: non_empty(lookup("SMTP_USER")),
            password: non_empty(lookup("SMTP_PASS")),
            encryption,
        }
    }
}

pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
