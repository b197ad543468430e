//! SMTP delivery through lettre.

use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use log::{debug, warn};

use crate::config::{Encryption, SmtpConfig};
use crate::error::{missing_setting, MailError, Result};
use crate::mail::Mailer;
use crate::models::OutgoingMail;

/// Mailer backed by an SMTP relay.
///
/// The transport is built from the config on every send, so a missing host
/// or port turns into a [`MailError::Config`] for that request instead of a
/// start-up failure.
pub struct SmtpMailer {
    config: SmtpConfig,
}

impl SmtpMailer {
    pub fn new(config: SmtpConfig) -> Self {
        Self { config }
    }

    fn transport(&self) -> Result<AsyncSmtpTransport<Tokio1Executor>> {
        let host = self
            .config
            .host
            .as_deref()
            .ok_or_else(|| missing_setting("SMTP_HOST"))?;
        let port = self
            .config
            .port
            .ok_or_else(|| MailError::Config("SMTP_PORT is missing or invalid".into()))?;

        let mut builder = match self.config.encryption {
            Encryption::Tls => AsyncSmtpTransport::<Tokio1Executor>::relay(host)
                .map_err(|e| MailError::Config(format!("SMTP relay {}: {}", host, e)))?
                .port(port),
            Encryption::StartTls => AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(host)
                .map_err(|e| MailError::Config(format!("SMTP STARTTLS relay {}: {}", host, e)))?
                .port(port),
            Encryption::None => {
                AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(host).port(port)
            }
        };

        if let (Some(user), Some(pass)) = (&self.config.username, &self.config.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(builder.build())
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, mail: OutgoingMail) -> Result<()> {
        let transport = self.transport()?;
        let message = build_message(&mail)?;

        debug!("Sending mail via SMTP: subject={:?}", mail.subject);
        transport.send(message).await?;

        Ok(())
    }
}

/// Turn an [`OutgoingMail`] into a lettre message.
///
/// An unparseable reply-to is dropped rather than failing the send; the
/// sender and recipient must be valid.
pub fn build_message(mail: &OutgoingMail) -> Result<Message> {
    let mut builder = Message::builder()
        .from(parse_mailbox("from", &mail.from)?)
        .to(parse_mailbox("to", &mail.to)?)
        .subject(mail.subject.as_str())
        .header(ContentType::TEXT_PLAIN);

    match parse_mailbox("replyTo", &mail.reply_to) {
        Ok(reply_to) => builder = builder.reply_to(reply_to),
        Err(err) => warn!("Omitting reply-to header: {}", err),
    }

    Ok(builder.body(mail.text.clone())?)
}

fn parse_mailbox(field: &'static str, raw: &str) -> Result<Mailbox> {
    raw.trim()
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress {
            field,
            reason: e.to_string(),
        })
}
