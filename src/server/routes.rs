use axum::{
    extract::{rejection::JsonRejection, State},
    http::{HeaderName, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::{ApiError, ApiResult, AppState, BRIEF_SOURCE_HEADER};
use crate::brief::{stamp_meeting_id, BriefRequest};

pub fn create_router(state: AppState) -> Router {
    // Callers are browser extensions with unpredictable origins.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .expose_headers([HeaderName::from_static(BRIEF_SOURCE_HEADER)]);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/generate-brief", post(generate_brief))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Serialize)]
struct ServiceInfo {
    service: &'static str,
    version: &'static str,
    status: &'static str,
}

async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: crate::SERVICE_NAME,
        version: crate::VERSION,
        status: "active",
    })
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "healthy" })
}

async fn generate_brief(
    State(state): State<AppState>,
    payload: Result<Json<BriefRequest>, JsonRejection>,
) -> ApiResult<Response> {
    let Json(request) = payload.map_err(|e| ApiError::Validation(e.body_text()))?;
    request.validate()?;

    tracing::info!(
        meeting_id = %request.meeting_id,
        attendees = request.attendees.len(),
        "Generating brief"
    );

    let meeting_id = request.meeting_id.clone();
    let generator = state.generator.clone();

    // Own task so a panic in the provider surfaces as a 500, not a dropped connection.
    let outcome = tokio::spawn(async move {
        generator
            .generate(
                &request.meeting_title,
                &request.meeting_time,
                &request.attendees,
            )
            .await
    })
    .await
    .map_err(|e| ApiError::Internal(anyhow::anyhow!(e)))?;

    let source = HeaderValue::from_static(outcome.source());
    let document = stamp_meeting_id(outcome.into_document(), &meeting_id);

    Ok((
        StatusCode::OK,
        [(HeaderName::from_static(BRIEF_SOURCE_HEADER), source)],
        Json(document),
    )
        .into_response())
}
