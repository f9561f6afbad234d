//! Canned provider for running the service without an API key.

use anyhow::Result;
use async_trait::async_trait;
use serde_json::json;

use crate::llm::client::{LlmProvider, ResearchRequest};

/// Answers every request with a fixed researched brief about the first
/// attendee, wrapped in a ```json fence the way real models tend to reply.
pub struct MockProvider;

#[async_trait]
impl LlmProvider for MockProvider {
    async fn research(&self, request: ResearchRequest<'_>) -> Result<String> {
        let (name, email) = request
            .attendees
            .first()
            .map(|a| (a.name.as_str(), a.email.as_str()))
            .unwrap_or(("Unknown", ""));

        let brief = json!({
            "attendees": [{
                "name": name,
                "email": email,
                "role": "VP of Sales",
                "company": "Acme Corp",
                "background": "10+ years in B2B SaaS sales. Previously led sales at Salesforce for the mid-market segment. Passionate about AI adoption in sales processes.",
                "recent_activity": "Recently posted on LinkedIn about their Q4 results and 2025 strategy",
                "key_fact": "Just completed Stanford Executive Program in AI for Business"
            }],
            "conversation_starters": [
                "I saw your recent post about Q4 results - congratulations on the strong finish! How are you thinking about building on that momentum?",
                "I noticed you completed the Stanford AI program - I'm curious how you're applying those insights to your sales strategy",
                "Your approach to the mid-market segment at Salesforce is really interesting. What lessons are you bringing to Acme?"
            ],
            "questions_to_ask": [
                "What are your top 3 priorities for Q1 2025?",
                "How do you see AI transforming your sales process over the next year?",
                "What challenges are you facing in scaling your sales team?",
                "How do you typically evaluate new tools or partners?"
            ],
            "strategy": "Position as a partner who understands their growth trajectory and can provide ROI-focused solutions. Emphasize speed to value and how you've helped similar companies scale. Ask about their decision timeline and key stakeholders early in the conversation.",
            "generated_at": request.generated_at,
        });

        Ok(format!(
            "Here is the meeting brief.\n```json\n{}\n```\n",
            serde_json::to_string_pretty(&brief)?
        ))
    }
}
