//! Deterministic brief used when research is unavailable.

use crate::brief::models::{timestamp_now, Attendee, AttendeeProfile, Brief};

const DEFAULT_COMPANY: &str = "Company";

const FALLBACK_QUESTIONS: [&str; 3] = [
    "What challenges are you currently facing?",
    "What does success look like for you?",
    "How can we best support your goals?",
];

const FALLBACK_STRATEGY: &str = "Focus on building rapport, understanding their needs, \
and exploring potential collaboration opportunities.";

/// Guess a company name from the left-most label of an email domain.
///
/// `alice@acme.io` gives `Acme`; an address without `@` gives `Company`.
/// An empty left-most label (`alice@.io`) gives an empty name.
pub fn extract_company(email: &str) -> String {
    match email.split('@').nth(1) {
        Some(domain) => capitalize(domain.split('.').next().unwrap_or_default()),
        None => DEFAULT_COMPANY.to_string(),
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Build the fallback brief for `attendees`.
///
/// Everything except `generated_at` depends only on the input.
pub fn fallback_brief(attendees: &[Attendee]) -> Brief {
    let profiles = attendees
        .iter()
        .map(|a| AttendeeProfile {
            name: a.name.clone(),
            email: a.email.clone(),
            role: "Role not yet researched".to_string(),
            company: extract_company(&a.email),
            background: "Research in progress...".to_string(),
            recent_activity: String::new(),
            key_fact: String::new(),
        })
        .collect();

    let lead_company = attendees
        .first()
        .map(|a| extract_company(&a.email))
        .unwrap_or_else(|| DEFAULT_COMPANY.to_string());

    Brief {
        attendees: profiles,
        conversation_starters: vec![
            "Thank you for taking the time to meet today".to_string(),
            format!("I'm excited to learn more about {}", lead_company),
            "What are your top priorities for this quarter?".to_string(),
        ],
        questions_to_ask: FALLBACK_QUESTIONS.iter().map(|q| q.to_string()).collect(),
        strategy: FALLBACK_STRATEGY.to_string(),
        generated_at: timestamp_now(),
    }
}
