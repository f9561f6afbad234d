use crate::brief::Attendee;

/// Render attendees as `- name (email)` bullet lines.
pub fn format_attendees(attendees: &[Attendee]) -> String {
    attendees
        .iter()
        .map(|a| format!("- {} ({})", a.name, a.email))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the research prompt for an upcoming meeting.
pub fn build_research_prompt(
    meeting_title: &str,
    meeting_time: &str,
    attendees: &[Attendee],
    generated_at: &str,
) -> String {
    let attendee_info = format_attendees(attendees);

    format!(
        "You are a professional meeting preparation assistant. Generate a comprehensive brief for this upcoming meeting:\n\
\n\
**Meeting Details:**\n\
- Title: {meeting_title}\n\
- Time: {meeting_time}\n\
- Attendees:\n\
{attendee_info}\n\
\n\
**Your Task:**\n\
1. Research each attendee (use web search to find their LinkedIn, recent activity, background)\n\
2. Research the companies they work for (extract domain from email)\n\
3. Generate actionable meeting insights\n\
\n\
**Important Guidelines:**\n\
- Focus on ACTIONABLE intelligence (not just facts)\n\
- Provide conversation starters that show you did your homework\n\
- Suggest questions that demonstrate genuine interest\n\
- Be professional but personable\n\
\n\
**Output Format (JSON):**\n\
{{\n\
    \"attendees\": [\n\
        {{\n\
            \"name\": \"...\",\n\
            \"email\": \"...\",\n\
            \"role\": \"...\",\n\
            \"company\": \"...\",\n\
            \"background\": \"Brief 2-3 sentence summary\",\n\
            \"recent_activity\": \"What they've been posting/doing recently\",\n\
            \"key_fact\": \"One interesting fact to mention\"\n\
        }}\n\
    ],\n\
    \"conversation_starters\": [\n\
        \"Specific, personalized conversation starter that references their work/interests\",\n\
        \"Another one...\",\n\
        \"...\"\n\
    ],\n\
    \"questions_to_ask\": [\n\
        \"Thoughtful question about their work\",\n\
        \"Another...\",\n\
        \"...\"\n\
    ],\n\
    \"strategy\": \"2-3 sentence meeting strategy (what to emphasize, how to position yourself, key themes)\",\n\
    \"generated_at\": \"{generated_at}\"\n\
}}\n\
\n\
Respond with the JSON object only. Use web search to find current, accurate information. Be thorough but concise.\n"
    )
}
