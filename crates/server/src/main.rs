use std::{net::SocketAddr, sync::Arc};

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::Html,
    routing::{get, post},
    Json, Router,
};
use server_api::{submit_consultation, ApiContext, SubmissionError};
use shared::{error::ErrorCode, protocol::SubmissionResponse};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod app_state;
mod config;

use app_state::AppState;
use config::load_settings;

const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = load_settings();
    if settings.resend_api_key.is_none() {
        warn!("RESEND_API_KEY is not set; consultation submissions will be refused");
    }

    let api = ApiContext {
        mailer: settings.build_mailer()?,
        delivery: settings.delivery_config(),
    };
    let contact = settings.whatsapp_contact();

    let app = build_router(Arc::new(AppState { api, contact }));

    let addr: SocketAddr = settings.server_bind.parse()?;
    let provider = settings.provider()?;
    info!(%addr, %provider, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/healthz", get(healthz))
        .route("/api/send-consultation", post(send_consultation))
        .layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn landing(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(site::landing_page(&state.contact))
}

async fn send_consultation(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<SubmissionResponse>) {
    match submit_consultation(&state.api, &body).await {
        Ok(_) => (StatusCode::OK, Json(SubmissionResponse::accepted())),
        Err(err) => (status_for(&err), Json(err.to_response())),
    }
}

fn status_for(err: &SubmissionError) -> StatusCode {
    match err.code() {
        ErrorCode::Validation => StatusCode::BAD_REQUEST,
        ErrorCode::MalformedInput | ErrorCode::Configuration | ErrorCode::Internal => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        ErrorCode::Delivery => StatusCode::BAD_GATEWAY,
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
