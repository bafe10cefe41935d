use anyhow::Context;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use secrecy::ExposeSecret;

use crate::configuration::{SmtpSettings, TlsMode};
use crate::utils::error_chain_fmt;

pub const ORGANIZATION_NAME: &str = "DykesWhoTech";
const WEBSITE_SENDER_NAME: &str = "DykesWhoTech Website";

/// An HTML email ready to hand to a relay.
///
/// Recipient addresses are kept as the submitter typed them; turning them
/// into SMTP mailboxes is the relay's job and may fail there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub from: Mailbox,
    pub to: String,
    pub reply_to: Option<String>,
    pub subject: String,
    pub html_body: String,
}

fn mailbox(address: &str) -> Result<Mailbox, SendEmailError> {
    address
        .parse::<Address>()
        .map(|address| Mailbox::new(None, address))
        .map_err(|e| SendEmailError::InvalidAddress(address.to_string(), e))
}

impl EmailMessage {
    fn into_message(self) -> Result<Message, SendEmailError> {
        let mut builder = Message::builder().from(self.from).to(mailbox(&self.to)?);
        if let Some(reply_to) = &self.reply_to {
            builder = builder.reply_to(mailbox(reply_to)?);
        }
        let message = builder
            .subject(self.subject)
            .header(ContentType::TEXT_HTML)
            .body(self.html_body)?;
        Ok(message)
    }
}

/// Something that accepts outgoing email, usually an SMTP relay.
#[async_trait::async_trait]
pub trait MailRelay: Send + Sync {
    /// Resolves once the relay accepted the message.
    async fn send(&self, message: EmailMessage) -> Result<(), anyhow::Error>;
}

#[derive(thiserror::Error)]
pub enum SendEmailError {
    #[error("`{0}` cannot be used as an SMTP mailbox.")]
    InvalidAddress(String, #[source] lettre::address::AddressError),
    #[error("Could not assemble the email message.")]
    Build(#[from] lettre::error::Error),
    #[error("Could not send email through SMTP.")]
    Transport(#[from] lettre::transport::smtp::Error),
}

impl std::fmt::Debug for SendEmailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Sender and recipient mailboxes derived from the relay account.
///
/// The account is both the address we send from and the organization inbox
/// that receives notifications.
#[derive(Debug, Clone)]
pub struct Outbox {
    account: Address,
}

impl Outbox {
    pub fn new(account: Address) -> Self {
        Self { account }
    }

    /// `"DykesWhoTech" <account>`, used for mail going to submitters.
    pub fn organization_sender(&self) -> Mailbox {
        Mailbox::new(Some(ORGANIZATION_NAME.to_string()), self.account.clone())
    }

    /// `"DykesWhoTech Website" <account>`, used for internal notifications.
    pub fn website_sender(&self) -> Mailbox {
        Mailbox::new(Some(WEBSITE_SENDER_NAME.to_string()), self.account.clone())
    }

    pub fn inbox(&self) -> String {
        self.account.to_string()
    }
}

/// Pooled SMTP client, built once at startup and shared by every worker.
#[derive(Clone)]
pub struct EmailClient {
    mailer: AsyncSmtpTransport<Tokio1Executor>,
}

impl EmailClient {
    pub fn from_settings(
        settings: &SmtpSettings,
    ) -> Result<Self, lettre::transport::smtp::Error> {
        let credentials = Credentials::new(
            settings.username.trim().to_string(),
            settings.password.expose_secret().clone(),
        );

        let builder = match settings.tls {
            TlsMode::Wrapper => AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)?,
            TlsMode::Starttls => {
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)?
            }
            TlsMode::None => AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&settings.host),
        };
        let builder = builder.port(settings.port).credentials(credentials);
        // Leave lettre's default in place unless a timeout is configured.
        let builder = match settings.timeout() {
            Some(timeout) => builder.timeout(Some(timeout)),
            None => builder,
        };

        Ok(Self {
            mailer: builder.build(),
        })
    }
}

#[async_trait::async_trait]
impl MailRelay for EmailClient {
    #[tracing::instrument(
        name = "Sending email through SMTP",
        skip(self, message),
        fields(recipient = %message.to, subject = %message.subject)
    )]
    async fn send(&self, message: EmailMessage) -> Result<(), anyhow::Error> {
        let message = message.into_message()?;
        self.mailer
            .send(message)
            .await
            .map_err(SendEmailError::Transport)?;
        tracing::info!("The relay accepted the message");
        Ok(())
    }
}

/// Sends two messages concurrently and waits for both of them.
///
/// A failure of one send does not stop the other one. The result is an error
/// if either failed, so a caller cannot tell a partial failure from a total
/// one; the submitter may still get their copy when this returns `Err`.
pub async fn send_both(
    relay: &dyn MailRelay,
    first: EmailMessage,
    second: EmailMessage,
) -> Result<(), anyhow::Error> {
    let first_recipient = first.to.clone();
    let second_recipient = second.to.clone();

    let (first_outcome, second_outcome) = tokio::join!(relay.send(first), relay.send(second));
    let first_outcome =
        first_outcome.with_context(|| format!("Failed to send email to {}", first_recipient));
    let second_outcome =
        second_outcome.with_context(|| format!("Failed to send email to {}", second_recipient));

    match (first_outcome, second_outcome) {
        (Ok(()), Ok(())) => Ok(()),
        (Err(e), Ok(())) | (Ok(()), Err(e)) => Err(e),
        (Err(first_error), Err(second_error)) => {
            tracing::error!(
                error.cause_chain = ?second_error,
                error.message = %second_error,
                "Both emails failed; reporting the first"
            );
            Err(first_error)
        }
    }
}
