use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{MailError, MailTransport, OutboundMessage};

const RESEND_ENDPOINT: &str = "https://api.resend.com/emails";

#[derive(Clone)]
pub struct ResendTransport {
    client: Client,
    api_key: String,
}

impl ResendTransport {
    /// `send_timeout` bounds each send attempt; a timed-out send surfaces
    /// as a per-recipient failure like any other transport error.
    pub fn new(api_key: String, send_timeout: Duration) -> Result<Self, MailError> {
        let client = Client::builder()
            .timeout(send_timeout)
            .build()
            .map_err(|e| MailError::Request(e.to_string()))?;

        Ok(Self { client, api_key })
    }
}

#[derive(Serialize)]
struct SendPayload<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}

#[derive(Deserialize)]
struct SendResponse {
    id: Option<String>,
}

#[async_trait]
impl MailTransport for ResendTransport {
    async fn send(&self, message: OutboundMessage) -> Result<Option<String>, MailError> {
        let payload = SendPayload {
            from: &message.from,
            to: vec![&message.to],
            subject: &message.subject,
            html: &message.html,
        };

        let res = self
            .client
            .post(RESEND_ENDPOINT)
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| MailError::Request(e.to_string()))?;

        if !res.status().is_success() {
            let body = res.text().await.unwrap_or_default();
            return Err(MailError::Api(body));
        }

        let parsed: SendResponse = res
            .json()
            .await
            .map_err(|e| MailError::Request(e.to_string()))?;

        Ok(parsed.id)
    }
}
