use async_trait::async_trait;
use shared::{domain::OutboundEmail, error::DeliveryError};

mod log_sender;
mod resend;

pub use log_sender::LogSender;
pub use resend::{ResendClient, DEFAULT_RESEND_BASE_URL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub id: String,
}

/// The credential travels with every call; implementations never cache it.
#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(
        &self,
        api_key: &str,
        email: &OutboundEmail,
    ) -> Result<DeliveryReceipt, DeliveryError>;
}
