use shared::{
    domain::{RecipientRole, RequiredField},
    error::{DeliveryError, ErrorCode},
    protocol::SubmissionResponse,
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubmissionError {
    #[error("malformed consultation body: {0}")]
    MalformedInput(String),
    #[error("missing required fields: {}", field_list(.missing))]
    Validation { missing: Vec<RequiredField> },
    #[error("email delivery is not configured: {0}")]
    Configuration(&'static str),
    #[error("failed to send {role} email: {source}")]
    Delivery {
        role: RecipientRole,
        #[source]
        source: DeliveryError,
    },
    #[error("failed to render email: {0}")]
    Rendering(String),
}

impl SubmissionError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MalformedInput(_) => ErrorCode::MalformedInput,
            Self::Validation { .. } => ErrorCode::Validation,
            Self::Configuration(_) => ErrorCode::Configuration,
            Self::Delivery { .. } => ErrorCode::Delivery,
            Self::Rendering(_) => ErrorCode::Internal,
        }
    }

    pub fn public_message(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) | Self::Rendering(_) => "Failed to process consultation",
            Self::Validation { .. } => "Missing required fields",
            Self::Configuration(_) => "Email service not configured",
            Self::Delivery {
                role: RecipientRole::Admin,
                ..
            } => "Failed to send admin email",
            Self::Delivery {
                role: RecipientRole::Customer,
                ..
            } => "Failed to send customer confirmation",
        }
    }

    pub fn to_response(&self) -> SubmissionResponse {
        let details = match self {
            Self::MalformedInput(reason) => Some(serde_json::json!(reason)),
            Self::Validation { missing } => Some(serde_json::json!(missing)),
            Self::Configuration(_) | Self::Rendering(_) => None,
            Self::Delivery { source, .. } => Some(source.details()),
        };
        SubmissionResponse::failure(self.public_message(), details)
    }
}

fn field_list(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
