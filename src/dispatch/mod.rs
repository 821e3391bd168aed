use std::sync::Arc;

use futures::future::join_all;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::mail::{MailTransport, OutboundMessage};
use crate::models::{DispatchOutcome, InvitationRequest, InvitationResponse};

pub const INVITE_SUBJECT: &str = "Invitation to Participate in a Test";

/// Renders the fixed invitation body. The link and code are interpolated
/// verbatim, without HTML escaping, matching the upstream email contract.
pub fn invite_html(test_link: &str, test_code: &str) -> String {
    format!(
        "<h2>You're Invited to Take a Test</h2>\
         <p>You have been invited to participate in a test. \
         Use the link below to begin, and enter your test code when prompted.</p>\
         <p><a href=\"{link}\">{link}</a></p>\
         <p>Your test code: <strong>{code}</strong></p>",
        link = test_link,
        code = test_code,
    )
}

/// Orchestrates one invitation dispatch: validate the payload, check the
/// process configuration, fan out one send per recipient, aggregate.
#[derive(Clone)]
pub struct InvitationDispatcher {
    config: Arc<Config>,
    transport: Arc<dyn MailTransport>,
}

impl InvitationDispatcher {
    pub fn new(config: Arc<Config>, transport: Arc<dyn MailTransport>) -> Self {
        Self { config, transport }
    }

    /// Validate and dispatch. Precondition failures return an error with
    /// zero sends performed; once dispatch starts, every recipient resolves
    /// to an outcome and the request as a whole cannot fail.
    pub async fn dispatch(&self, body: &str) -> Result<InvitationResponse> {
        let request = InvitationRequest::parse(body)?;

        let missing = self.config.missing_dispatch_values();
        if !missing.is_empty() {
            tracing::error!(missing = ?missing, "Dispatch configuration incomplete");
            return Err(AppError::MissingConfiguration(missing.join(", ")));
        }

        // Presence was checked just above
        let from = self.config.mail_from.clone().unwrap_or_default();

        tracing::info!(
            recipients = request.emails.len(),
            "Dispatching invitations"
        );

        let sends = request.emails.iter().map(|email| {
            let message = OutboundMessage {
                from: from.clone(),
                to: email.clone(),
                subject: INVITE_SUBJECT.to_string(),
                html: invite_html(&request.test_link, &request.test_code),
            };
            self.send_one(email.clone(), message)
        });

        // Full barrier: the response is assembled only after every send has
        // resolved. One recipient's failure never aborts the others.
        let outcomes = join_all(sends).await;

        let response = InvitationResponse::from_outcomes(outcomes);
        tracing::info!(
            success = response.success,
            message = %response.message,
            "Dispatch complete"
        );

        Ok(response)
    }

    async fn send_one(&self, email: String, message: OutboundMessage) -> DispatchOutcome {
        match self.transport.send(message).await {
            Ok(message_id) => {
                tracing::debug!(recipient = %email, "Invitation sent");
                DispatchOutcome::sent(email, message_id)
            }
            Err(e) => {
                tracing::warn!(recipient = %email, error = %e, "Invitation send failed");
                DispatchOutcome::failed(email, e.to_string())
            }
        }
    }
}
