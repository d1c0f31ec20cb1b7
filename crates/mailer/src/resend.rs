use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use shared::{domain::OutboundEmail, error::DeliveryError};
use tracing::{debug, warn};
use url::Url;

use crate::{DeliveryReceipt, EmailSender};

pub const DEFAULT_RESEND_BASE_URL: &str = "https://api.resend.com";

const REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Serialize)]
struct SendEmailPayload<'a> {
    from: &'a str,
    to: [&'a str; 1],
    subject: &'a str,
    html: &'a str,
}

#[derive(Debug, Deserialize)]
struct SendEmailAck {
    id: String,
}

#[derive(Debug, Clone)]
pub struct ResendClient {
    endpoint: String,
    http_client: reqwest::Client,
}

impl ResendClient {
    pub fn new(base_url: &str) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid Resend base url '{base_url}'"))?;
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build HTTP client for Resend")?;

        Ok(Self {
            endpoint: format!("{}/emails", base_url.as_str().trim_end_matches('/')),
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailSender for ResendClient {
    async fn send(
        &self,
        api_key: &str,
        email: &OutboundEmail,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let payload = SendEmailPayload {
            from: &email.from,
            to: [&email.to],
            subject: &email.subject,
            html: &email.html,
        };

        let response = self
            .http_client
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| DeliveryError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DeliveryError::Transport(format!("failed to read response body: {e}")))?;

        if !status.is_success() {
            warn!(
                status = status.as_u16(),
                body_len = body.len(),
                "resend rejected message"
            );
            let body = serde_json::from_str::<serde_json::Value>(&body)
                .unwrap_or_else(|_| serde_json::json!({ "message": body }));
            return Err(DeliveryError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let ack: SendEmailAck = serde_json::from_str(&body).map_err(|e| {
            DeliveryError::Transport(format!("unexpected Resend response: {e}"))
        })?;
        debug!(id = %ack.id, "resend accepted message");

        Ok(DeliveryReceipt { id: ack.id })
    }
}

#[cfg(test)]
#[path = "tests/resend_tests.rs"]
mod tests;
