//! Meeting brief module
//!
//! Data model, model-output parsing, fallback content and the generator.

mod extract;
mod fallback;
mod generator;
mod models;

pub use extract::extract_json_text;
pub use fallback::{extract_company, fallback_brief};
pub use generator::{parse_brief, stamp_meeting_id, BriefGenerator, BriefOutcome, DegradeReason};
pub use models::{
    timestamp_now, Attendee, AttendeeProfile, Brief, BriefDocument, BriefRequest,
};
