use chrono::{DateTime, Utc};
use handlebars::Handlebars;
use once_cell::sync::Lazy;
use serde_json::json;
use shared::domain::ConsultationRequest;
use uuid::Uuid;

use crate::SubmissionError;

pub const ADMIN_TEMPLATE: &str = include_str!("admin_notification.html");
pub const CUSTOMER_TEMPLATE: &str = include_str!("customer_confirmation.html");

const ADMIN: &str = "admin_notification";
const CUSTOMER: &str = "customer_confirmation";

pub const RESPONSE_SLA_HOURS: u32 = 2;

pub const CUSTOMER_SUBJECT: &str =
    "Tu solicitud de consultoría ha sido recibida - Scale BI Consulting";

static REGISTRY: Lazy<Result<Handlebars<'static>, String>> = Lazy::new(build_registry);

// Strict mode turns a key missing from the data map into a render error
// instead of an empty string.
fn build_registry() -> Result<Handlebars<'static>, String> {
    let mut handlebars = Handlebars::new();
    handlebars.set_strict_mode(true);
    handlebars
        .register_template_string(ADMIN, ADMIN_TEMPLATE)
        .map_err(|e| e.to_string())?;
    handlebars
        .register_template_string(CUSTOMER, CUSTOMER_TEMPLATE)
        .map_err(|e| e.to_string())?;
    Ok(handlebars)
}

#[derive(Debug, Clone, Copy)]
pub struct SubmissionMeta {
    pub submission_id: Uuid,
    pub received_at: DateTime<Utc>,
}

pub fn admin_subject(request: &ConsultationRequest) -> String {
    format!(
        "Nuevo Cliente: {} - {}",
        request.nombre,
        request.empresa_or_placeholder()
    )
}

pub fn render_admin_email(
    request: &ConsultationRequest,
    meta: &SubmissionMeta,
) -> Result<String, SubmissionError> {
    let data = json!({
        "nombre": request.nombre,
        "rut": request.rut_or_placeholder(),
        "email": request.email,
        "telefono": request.telefono_or_placeholder(),
        "empresa": request.empresa_or_placeholder(),
        "colaboradores": request.colaboradores,
        "problemas": request.problemas_joined(),
        "otro_problema": request.otro_problema_or_placeholder(),
        "received_at": meta.received_at.format("%d-%m-%Y %H:%M UTC").to_string(),
        "submission_id": meta.submission_id.to_string(),
    });
    render(ADMIN, &data)
}

pub fn render_customer_email(request: &ConsultationRequest) -> Result<String, SubmissionError> {
    let data = json!({
        "nombre": request.nombre,
        "empresa": request.empresa_or_placeholder(),
        "sla_hours": RESPONSE_SLA_HOURS,
    });
    render(CUSTOMER, &data)
}

fn render(name: &str, data: &serde_json::Value) -> Result<String, SubmissionError> {
    let registry = REGISTRY
        .as_ref()
        .map_err(|e| SubmissionError::Rendering(e.clone()))?;
    registry
        .render(name, data)
        .map_err(|e| SubmissionError::Rendering(e.to_string()))
}

#[cfg(test)]
#[path = "../tests/templates_tests.rs"]
mod tests;
