//! meetintel - Meeting briefs researched by an LLM, served over HTTP
//!
//! Callers post a meeting and its attendees; the service asks an LLM with web
//! search to research them and returns conversation starters, questions and a
//! strategy. When research fails a deterministic fallback brief is returned.

pub mod brief;
pub mod cli;
pub mod config;
pub mod llm;
pub mod server;

use thiserror::Error;

/// Main error type for meetintel
#[derive(Error, Debug)]
pub enum MeetintelError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid request: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, MeetintelError>;

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Service name reported by the HTTP root endpoint
pub const SERVICE_NAME: &str = "MeetingIntel API";
