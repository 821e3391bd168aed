pub mod resend;

use async_trait::async_trait;

pub use resend::ResendTransport;

/// One message bound for one recipient
#[derive(Debug, Clone, PartialEq)]
pub struct OutboundMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Mail transport abstraction (currently backed by the Resend API).
///
/// Returns the transport-assigned message id on success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailTransport: Send + Sync {
    async fn send(&self, message: OutboundMessage) -> Result<Option<String>, MailError>;
}

#[derive(Debug, thiserror::Error)]
pub enum MailError {
    #[error("Mail send failed: {0}")]
    Request(String),

    #[error("Mail API error: {0}")]
    Api(String),
}
