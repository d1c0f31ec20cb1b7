use serde::{Deserialize, Serialize};

pub const SUBMISSION_ACCEPTED: &str = "Solicitud procesada correctamente";

/// JSON body returned by the consultation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl SubmissionResponse {
    pub fn accepted() -> Self {
        Self {
            success: true,
            message: Some(SUBMISSION_ACCEPTED.to_string()),
            error: None,
            details: None,
        }
    }

    pub fn failure(error: impl Into<String>, details: Option<serde_json::Value>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
            details,
        }
    }
}
