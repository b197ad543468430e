use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{MailError, Result};
use crate::mail::Mailer;
use crate::models::OutgoingMail;

/// MockMailer is an in-memory implementation of Mailer for testing
///
/// Every call is recorded, including calls that are made to fail.
pub struct MockMailer {
    calls: Mutex<Vec<OutgoingMail>>,
    failure: Option<String>,
}

impl MockMailer {
    /// Create a mailer that accepts every message
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    /// Create a mailer whose every send fails with a transport error
    pub fn failing(reason: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failure: Some(reason.to_string()),
        }
    }

    /// All messages passed to `send`, in call order
    pub fn calls(&self) -> Vec<OutgoingMail> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<()> {
        self.calls.lock().unwrap().push(mail);

        match &self.failure {
            Some(reason) => Err(MailError::Transport(reason.clone())),
            None => Ok(()),
        }
    }
}
