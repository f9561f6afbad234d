//! Brief generation: one research call, fallback on any failure.

use serde_json::Value;
use std::fmt;

use crate::brief::extract::extract_json_text;
use crate::brief::fallback::fallback_brief;
use crate::brief::models::{timestamp_now, Attendee, BriefDocument};
use crate::llm::{LlmProvider, ResearchRequest};

/// Why a brief fell back to the placeholder content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradeReason {
    /// The provider call itself failed (network, auth, provider error)
    Upstream(String),
    /// The provider answered but no JSON object could be read from it
    Unparseable(String),
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Upstream(msg) => write!(f, "upstream call failed: {}", msg),
            Self::Unparseable(msg) => write!(f, "unparseable model output: {}", msg),
        }
    }
}

/// Result of a generation attempt
#[derive(Debug, Clone)]
pub enum BriefOutcome {
    /// The model's own brief
    Researched(BriefDocument),
    /// The fallback brief, with the reason research was abandoned
    Degraded {
        document: BriefDocument,
        reason: DegradeReason,
    },
}

impl BriefOutcome {
    pub fn document(&self) -> &BriefDocument {
        match self {
            Self::Researched(document) | Self::Degraded { document, .. } => document,
        }
    }

    pub fn into_document(self) -> BriefDocument {
        match self {
            Self::Researched(document) | Self::Degraded { document, .. } => document,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Self::Degraded { .. })
    }

    /// Short label for where the brief came from.
    pub fn source(&self) -> &'static str {
        match self {
            Self::Researched(_) => "researched",
            Self::Degraded { .. } => "fallback",
        }
    }
}

/// Turns meeting details into a brief through an [`LlmProvider`].
pub struct BriefGenerator {
    provider: Box<dyn LlmProvider>,
}

impl BriefGenerator {
    pub fn new(provider: Box<dyn LlmProvider>) -> Self {
        Self { provider }
    }

    /// Generate a brief. Never fails: errors become a degraded outcome.
    pub async fn generate(
        &self,
        meeting_title: &str,
        meeting_time: &str,
        attendees: &[Attendee],
    ) -> BriefOutcome {
        let generated_at = timestamp_now();

        let reply = self
            .provider
            .research(ResearchRequest {
                meeting_title,
                meeting_time,
                attendees,
                generated_at: &generated_at,
            })
            .await;

        let parsed = match reply {
            Ok(text) => parse_brief(&text).map_err(DegradeReason::Unparseable),
            Err(e) => Err(DegradeReason::Upstream(format!("{:#}", e))),
        };

        match parsed {
            Ok(mut document) => {
                document
                    .entry("generated_at")
                    .or_insert_with(|| Value::String(generated_at));
                BriefOutcome::Researched(document)
            }
            Err(reason) => {
                tracing::warn!(%reason, "Falling back to placeholder brief");
                BriefOutcome::Degraded {
                    document: fallback_brief(attendees).into_document(),
                    reason,
                }
            }
        }
    }
}

/// Read a brief object from model reply text.
pub fn parse_brief(reply: &str) -> std::result::Result<BriefDocument, String> {
    let json_text = extract_json_text(reply);

    match serde_json::from_str::<Value>(json_text) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => Err(format!("expected a JSON object, got {}", json_kind(&other))),
        Err(e) => Err(e.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Set `meeting_id`, replacing whatever the brief carried.
pub fn stamp_meeting_id(mut document: BriefDocument, meeting_id: &str) -> BriefDocument {
    document.insert(
        "meeting_id".to_string(),
        Value::String(meeting_id.to_string()),
    );
    document
}
