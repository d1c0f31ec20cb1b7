use std::{fmt, sync::Arc};

use mailer::EmailSender;

mod consultation;
mod error;
pub mod templates;

pub use consultation::{parse_form, submit_consultation, validate, SubmissionReceipt};
pub use error::SubmissionError;

#[derive(Clone)]
pub struct ApiContext {
    pub mailer: Arc<dyn EmailSender>,
    pub delivery: DeliveryConfig,
}

#[derive(Clone)]
pub struct DeliveryConfig {
    pub from: String,
    pub admin_email: String,
    pub api_key: Option<String>,
}

impl DeliveryConfig {
    pub fn credential(&self) -> Result<&str, SubmissionError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(SubmissionError::Configuration("missing email provider API key"))
    }
}

impl fmt::Debug for DeliveryConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeliveryConfig")
            .field("from", &self.from)
            .field("admin_email", &self.admin_email)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
