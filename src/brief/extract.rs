//! Pull the JSON payload out of a model reply.
//!
//! Models often wrap JSON in markdown fences. Three cases are tried in order:
//! a ```json fence, any ``` fence, then the whole reply.

const FENCE: &str = "```";
const JSON_FENCE: &str = "```json";

/// Return the trimmed candidate JSON text of `reply`.
///
/// An opening fence without a closing one runs to the end of the reply.
pub fn extract_json_text(reply: &str) -> &str {
    if let Some(start) = reply.find(JSON_FENCE) {
        return fenced_body(reply, start + JSON_FENCE.len());
    }

    if let Some(start) = reply.find(FENCE) {
        return fenced_body(reply, start + FENCE.len());
    }

    reply.trim()
}

fn fenced_body(reply: &str, body_start: usize) -> &str {
    let rest = &reply[body_start..];
    let body = match rest.find(FENCE) {
        Some(end) => &rest[..end],
        None => rest,
    };
    body.trim()
}
