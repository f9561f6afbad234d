//! Data models for meeting briefs

use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{MeetintelError, Result};

/// A brief as handed back to callers: a JSON object.
///
/// Researched briefs come straight from model output and are not validated
/// against the [`Brief`] shape, so consumers must tolerate missing or extra
/// fields.
pub type BriefDocument = Map<String, Value>;

/// A meeting participant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attendee {
    /// Email address, unique within a request
    pub email: String,

    /// Display name
    pub name: String,
}

impl Attendee {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Incoming request for a meeting brief
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BriefRequest {
    pub meeting_id: String,
    pub meeting_title: String,
    pub meeting_time: String,
    pub attendees: Vec<Attendee>,
}

impl BriefRequest {
    /// Reject requests the generator cannot produce a meaningful brief for.
    pub fn validate(&self) -> Result<()> {
        if self.attendees.is_empty() {
            return Err(MeetintelError::Validation(
                "attendees must contain at least one entry".to_string(),
            ));
        }
        Ok(())
    }
}

/// Researched (or placeholder) profile of one attendee
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendeeProfile {
    pub name: String,
    pub email: String,
    pub role: String,
    pub company: String,
    pub background: String,
    pub recent_activity: String,
    pub key_fact: String,
}

impl AttendeeProfile {
    fn into_value(self) -> Value {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::from(self.name));
        map.insert("email".to_string(), Value::from(self.email));
        map.insert("role".to_string(), Value::from(self.role));
        map.insert("company".to_string(), Value::from(self.company));
        map.insert("background".to_string(), Value::from(self.background));
        map.insert("recent_activity".to_string(), Value::from(self.recent_activity));
        map.insert("key_fact".to_string(), Value::from(self.key_fact));
        Value::Object(map)
    }
}

/// Typed form of a brief. `meeting_id` is stamped onto the document by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brief {
    pub attendees: Vec<AttendeeProfile>,
    pub conversation_starters: Vec<String>,
    pub questions_to_ask: Vec<String>,
    pub strategy: String,
    pub generated_at: String,
}

impl Brief {
    /// Convert into the untyped document representation.
    pub fn into_document(self) -> BriefDocument {
        let attendees: Vec<Value> = self
            .attendees
            .into_iter()
            .map(AttendeeProfile::into_value)
            .collect();

        let mut document = Map::new();
        document.insert("attendees".to_string(), Value::Array(attendees));
        document.insert(
            "conversation_starters".to_string(),
            Value::from(self.conversation_starters),
        );
        document.insert(
            "questions_to_ask".to_string(),
            Value::from(self.questions_to_ask),
        );
        document.insert("strategy".to_string(), Value::from(self.strategy));
        document.insert("generated_at".to_string(), Value::from(self.generated_at));
        document
    }
}

/// Current local time as an ISO-8601 string.
pub fn timestamp_now() -> String {
    Local::now().to_rfc3339()
}
