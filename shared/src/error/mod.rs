use thiserror::Error;

pub type Result<T> = std::result::Result<T, MailError>;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("Mail configuration error: {0}")]
    Config(String),

    #[error("Invalid address for {field}: {reason}")]
    InvalidAddress { field: &'static str, reason: String },

    #[error("Failed to build message: {0}")]
    Build(String),

    #[error("Mail transport error: {0}")]
    Transport(String),
}

// Helper function to map a missing configuration value
pub fn missing_setting(name: &str) -> MailError {
    MailError::Config(format!("{} is not set", name))
}

impl From<lettre::error::Error> for MailError {
    fn from(err: lettre::error::Error) -> Self {
        MailError::Build(err.to_string())
    }
}

impl From<lettre::transport::smtp::Error> for MailError {
    fn from(err: lettre::transport::smtp::Error) -> Self {
        MailError::Transport(err.to_string())
    }
}
