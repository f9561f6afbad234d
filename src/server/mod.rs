//! HTTP server module for meetintel
//!
//! Exposes the brief endpoint plus liveness and identity routes.

mod routes;

pub use routes::create_router;

use anyhow::Context;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

use crate::brief::BriefGenerator;
use crate::config::Settings;
use crate::llm::build_provider;
use crate::MeetintelError;

/// Response header naming where a brief came from (`researched` or `fallback`)
pub const BRIEF_SOURCE_HEADER: &str = "x-brief-source";

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub generator: Arc<BriefGenerator>,
}

impl AppState {
    pub fn new(generator: BriefGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Error type for HTTP handlers
#[derive(Debug)]
pub enum ApiError {
    /// The request body was malformed or semantically invalid
    Validation(String),
    /// Anything else that went wrong while producing a brief
    Internal(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Validation(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            Self::Internal(e) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Error generating brief: {}", e),
            ),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}

impl From<MeetintelError> for ApiError {
    fn from(err: MeetintelError) -> Self {
        match err {
            MeetintelError::Validation(detail) => Self::Validation(detail),
            other => Self::Internal(other.into()),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err)
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// Build the provider from settings and serve until Ctrl-C.
pub async fn serve(settings: &Settings) -> anyhow::Result<()> {
    let provider = build_provider(settings)?;
    let state = AppState::new(BriefGenerator::new(provider));
    let app = create_router(state);

    let addr = settings.bind_addr();
    info!("Starting {} v{}", crate::SERVICE_NAME, crate::VERSION);
    info!("LLM provider: {}", settings.llm.provider);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind HTTP server to {}", addr))?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
