use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    MalformedInput,
    Validation,
    Configuration,
    Delivery,
    Internal,
}

#[derive(Debug, Clone, Error)]
pub enum DeliveryError {
    // connect, TLS or timeout: the provider never answered
    #[error("transport failure: {0}")]
    Transport(String),
    #[error("provider rejected message with status {status}")]
    Rejected {
        status: u16,
        body: serde_json::Value,
    },
}

impl DeliveryError {
    pub fn details(&self) -> serde_json::Value {
        match self {
            Self::Transport(message) => serde_json::json!({ "message": message }),
            Self::Rejected { body, .. } => body.clone(),
        }
    }
}
