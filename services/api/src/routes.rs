use crate::infra::AppState;
use crate::page;
use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::{Form, Json, Router};
use chrono::{DateTime, Utc};
use loan_eligibility::eligibility::{
    read_forms, AffordabilityMetrics, EligibilityStatus, LoanApplicationForm, StatusTone,
};
use loan_eligibility::error::AppError;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::atomic::Ordering;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct EligibilityResponse {
    pub(crate) status: EligibilityStatus,
    pub(crate) message: String,
    pub(crate) tone: StatusTone,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) metrics: Option<AffordabilityMetrics>,
    pub(crate) evaluated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BatchRequest {
    pub(crate) csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchEntry {
    pub(crate) name: String,
    pub(crate) status: EligibilityStatus,
    pub(crate) message: String,
    pub(crate) tone: StatusTone,
}

#[derive(Debug, Serialize)]
pub(crate) struct BatchResponse {
    pub(crate) results: Vec<BatchEntry>,
    pub(crate) evaluated_at: DateTime<Utc>,
}

pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(form_page).post(form_submit))
        .route("/api/v1/eligibility", post(eligibility_endpoint))
        .route("/api/v1/eligibility/batch", post(batch_endpoint))
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .with_state(state)
}

pub(crate) async fn form_page() -> Html<String> {
    Html(page::render(&LoanApplicationForm::default(), None))
}

pub(crate) async fn form_submit(
    State(state): State<AppState>,
    Form(form): Form<LoanApplicationForm>,
) -> Html<String> {
    let result = state.engine.evaluate(&form).result();
    info!(status = ?result.status, "form evaluated");
    Html(page::render(&form, Some(&result)))
}

/// Every well-formed request yields 200; invalid field values are reported in
/// the body as an `invalid` status.
pub(crate) async fn eligibility_endpoint(
    State(state): State<AppState>,
    Json(form): Json<LoanApplicationForm>,
) -> Json<EligibilityResponse> {
    let outcome = state.engine.evaluate(&form);
    let result = outcome.result();
    info!(status = ?result.status, "eligibility evaluated");

    Json(EligibilityResponse {
        status: result.status,
        tone: result.status.tone(),
        message: result.message,
        metrics: outcome.metrics,
        evaluated_at: Utc::now(),
    })
}

pub(crate) async fn batch_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<BatchRequest>,
) -> Result<Json<BatchResponse>, AppError> {
    let forms = read_forms(Cursor::new(payload.csv.into_bytes()))?;
    let results: Vec<BatchEntry> = forms
        .into_iter()
        .map(|form| {
            let result = state.engine.evaluate(&form).result();
            BatchEntry {
                name: form.name,
                status: result.status,
                tone: result.status.tone(),
                message: result.message,
            }
        })
        .collect();
    info!(count = results.len(), "batch evaluated");

    Ok(Json(BatchResponse {
        results,
        evaluated_at: Utc::now(),
    }))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
