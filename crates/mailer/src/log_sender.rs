use async_trait::async_trait;
use shared::{domain::OutboundEmail, error::DeliveryError};
use tracing::info;
use uuid::Uuid;

use crate::{DeliveryReceipt, EmailSender};

/// Dry-run sender for local development: logs the envelope and accepts it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSender;

#[async_trait]
impl EmailSender for LogSender {
    async fn send(
        &self,
        _api_key: &str,
        email: &OutboundEmail,
    ) -> Result<DeliveryReceipt, DeliveryError> {
        let id = format!("log-{}", Uuid::new_v4());
        info!(
            target: "email_simulator",
            %id,
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            html_len = email.html.len(),
            "email not sent, logged only"
        );
        Ok(DeliveryReceipt { id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn log_sender_always_accepts() {
        let email = OutboundEmail {
            from: "a@example.com".into(),
            to: "b@example.com".into(),
            subject: "hola".into(),
            html: "<p>hola</p>".into(),
        };
        let receipt = LogSender.send("unused", &email).await.expect("accepted");
        assert!(receipt.id.starts_with("log-"));
    }
}
