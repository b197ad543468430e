use async_trait::async_trait;

use crate::error::Result;
use crate::models::OutgoingMail;

// Expose the SMTP transport module
pub mod smtp;

/// Mailer trait defining the interface for outbound mail implementations
#[async_trait]
pub trait Mailer: Send + Sync + 'static {
    /// Sends one message, returning once the transport has accepted or
    /// rejected it
    async fn send(&self, mail: OutgoingMail) -> Result<()>;
}
