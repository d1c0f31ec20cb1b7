use chrono::Utc;
use mailer::DeliveryReceipt;
use shared::domain::{
    ConsultationForm, ConsultationRequest, OutboundEmail, RecipientRole, RequiredField,
};
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use crate::{
    templates::{
        admin_subject, render_admin_email, render_customer_email, SubmissionMeta,
        CUSTOMER_SUBJECT,
    },
    ApiContext, SubmissionError,
};

#[derive(Debug, Clone)]
pub struct SubmissionReceipt {
    pub submission_id: Uuid,
    pub admin: DeliveryReceipt,
    pub customer: DeliveryReceipt,
}

pub fn parse_form(body: &[u8]) -> Result<ConsultationForm, SubmissionError> {
    serde_json::from_slice(body).map_err(|e| SubmissionError::MalformedInput(e.to_string()))
}

pub fn validate(form: ConsultationForm) -> Result<ConsultationRequest, SubmissionError> {
    let required = (
        present(form.nombre),
        present(form.email),
        present(form.colaboradores),
    );

    match required {
        (Some(nombre), Some(email), Some(colaboradores)) => Ok(ConsultationRequest {
            nombre,
            rut: present(form.rut),
            email,
            telefono: present(form.telefono),
            empresa: present(form.empresa),
            colaboradores,
            problemas: form.problemas.map(present_tags).filter(|tags| !tags.is_empty()),
            otro_problema: present(form.otro_problema),
        }),
        (nombre, email, colaboradores) => {
            let missing = [
                (RequiredField::Nombre, nombre.is_none()),
                (RequiredField::Email, email.is_none()),
                (RequiredField::Colaboradores, colaboradores.is_none()),
            ]
            .into_iter()
            .filter_map(|(field, absent)| absent.then_some(field))
            .collect();
            Err(SubmissionError::Validation { missing })
        }
    }
}

/// Admin notification first, then the customer confirmation only if the
/// admin email was accepted.
pub async fn submit_consultation(
    ctx: &ApiContext,
    body: &[u8],
) -> Result<SubmissionReceipt, SubmissionError> {
    let meta = SubmissionMeta {
        submission_id: Uuid::new_v4(),
        received_at: Utc::now(),
    };

    let span = info_span!("consultation", submission_id = %meta.submission_id);
    async {
        let result = relay(ctx, body, &meta).await;
        match &result {
            Ok(_) => info!("consultation relayed"),
            Err(err) => log_failure(err),
        }
        result
    }
    .instrument(span)
    .await
}

async fn relay(
    ctx: &ApiContext,
    body: &[u8],
    meta: &SubmissionMeta,
) -> Result<SubmissionReceipt, SubmissionError> {
    let request = validate(parse_form(body)?)?;
    let api_key = ctx.delivery.credential()?;

    let admin_email = OutboundEmail {
        from: ctx.delivery.from.clone(),
        to: ctx.delivery.admin_email.clone(),
        subject: admin_subject(&request),
        html: render_admin_email(&request, meta)?,
    };
    let customer_email = OutboundEmail {
        from: ctx.delivery.from.clone(),
        to: request.email.clone(),
        subject: CUSTOMER_SUBJECT.to_string(),
        html: render_customer_email(&request)?,
    };

    let admin = deliver(ctx, api_key, RecipientRole::Admin, &admin_email).await?;
    let customer = deliver(ctx, api_key, RecipientRole::Customer, &customer_email).await?;

    Ok(SubmissionReceipt {
        submission_id: meta.submission_id,
        admin,
        customer,
    })
}

async fn deliver(
    ctx: &ApiContext,
    api_key: &str,
    role: RecipientRole,
    email: &OutboundEmail,
) -> Result<DeliveryReceipt, SubmissionError> {
    let receipt = ctx
        .mailer
        .send(api_key, email)
        .await
        .map_err(|source| SubmissionError::Delivery { role, source })?;
    info!(%role, id = %receipt.id, "email accepted by provider");
    Ok(receipt)
}

fn log_failure(err: &SubmissionError) {
    match err {
        SubmissionError::MalformedInput(_) | SubmissionError::Validation { .. } => {
            warn!(code = ?err.code(), error = %err, "consultation rejected");
        }
        SubmissionError::Configuration(_)
        | SubmissionError::Delivery { .. }
        | SubmissionError::Rendering(_) => {
            error!(code = ?err.code(), error = %err, "consultation failed");
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn present_tags(tags: Vec<String>) -> Vec<String> {
    tags.into_iter().filter_map(|tag| present(Some(tag))).collect()
}

#[cfg(test)]
#[path = "tests/consultation_tests.rs"]
mod tests;
