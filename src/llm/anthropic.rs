use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::llm::client::{LlmProvider, ResearchRequest};
use crate::llm::prompts::build_research_prompt;
use crate::MeetintelError;

const DEFAULT_ANTHROPIC_ENDPOINT: &str = "https://api.anthropic.com";
const DEFAULT_ANTHROPIC_MODEL: &str = "claude-sonnet-4-20250514";
const ANTHROPIC_VERSION: &str = "2023-06-01";
const WEB_SEARCH_TOOL_TYPE: &str = "web_search_20250305";

pub struct AnthropicClient {
    http: Client,
    api_key: String,
    model: String,
    endpoint: String,
    max_tokens: u32,
}

impl AnthropicClient {
    pub fn from_settings(settings: &Settings) -> crate::Result<Self> {
        let api_key = settings.llm.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(MeetintelError::Config(
                "Anthropic API key is missing. Set llm.api_key in config or MEETINTEL_ANTHROPIC_API_KEY."
                    .to_string(),
            ));
        }

        let model = if settings.llm.model.trim().is_empty() {
            DEFAULT_ANTHROPIC_MODEL.to_string()
        } else {
            settings.llm.model.trim().to_string()
        };

        let endpoint = if settings.llm.endpoint.trim().is_empty() {
            DEFAULT_ANTHROPIC_ENDPOINT.to_string()
        } else {
            settings
                .llm
                .endpoint
                .trim()
                .trim_end_matches('/')
                .to_string()
        };

        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(settings.llm.timeout_secs))
            .build()
            .map_err(|e| {
                MeetintelError::Config(format!("Failed to build Anthropic HTTP client: {}", e))
            })?;

        Ok(Self {
            http,
            api_key,
            model,
            endpoint,
            max_tokens: settings.llm.max_tokens,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/v1/messages", self.endpoint)
    }
}

#[async_trait]
impl LlmProvider for AnthropicClient {
    async fn research(&self, request: ResearchRequest<'_>) -> Result<String> {
        let prompt = build_research_prompt(
            request.meeting_title,
            request.meeting_time,
            request.attendees,
            request.generated_at,
        );

        let body = MessagesRequest {
            model: &self.model,
            max_tokens: self.max_tokens,
            tools: vec![ToolSpec {
                kind: WEB_SEARCH_TOOL_TYPE,
                name: "web_search",
            }],
            messages: vec![Message {
                role: "user",
                content: prompt,
            }],
        };

        tracing::debug!(model = %self.model, "Sending research request to Anthropic");

        let response = self
            .http
            .post(self.request_url())
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .json(&body)
            .send()
            .await
            .context("Anthropic request failed")?;

        let response = response
            .error_for_status()
            .context("Anthropic returned an error status")?;

        let payload: MessagesResponse = response
            .json()
            .await
            .context("Failed to parse Anthropic response")?;

        Ok(payload.text())
    }
}

#[derive(Debug, Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    tools: Vec<ToolSpec>,
    messages: Vec<Message>,
}

#[derive(Debug, Serialize)]
struct ToolSpec {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'static str,
}

#[derive(Debug, Serialize)]
struct Message {
    role: &'static str,
    content: String,
}

#[derive(Debug, Deserialize)]
struct MessagesResponse {
    #[serde(default)]
    content: Vec<ContentBlock>,
}

/// One block of the reply. Tool use and search result blocks carry no text.
#[derive(Debug, Deserialize)]
struct ContentBlock {
    #[serde(rename = "type")]
    kind: String,
    text: Option<String>,
}

impl MessagesResponse {
    /// Concatenate every text block in order.
    fn text(&self) -> String {
        self.content
            .iter()
            .filter(|block| block.kind == "text")
            .filter_map(|block| block.text.as_deref())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::{Attendee, BriefGenerator, BriefOutcome, DegradeReason};
    use axum::http::{HeaderMap, StatusCode};
    use axum::routing::post;
    use axum::{Json, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<(HeaderMap, Value)>>>;

    /// Serve `reply` with `status` on `/v1/messages`, recording each request.
    async fn spawn_messages_stub(status: StatusCode, reply: Value) -> (String, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let recorder = received.clone();

        let app = Router::new().route(
            "/v1/messages",
            post(move |headers: HeaderMap, Json(body): Json<Value>| {
                let recorder = recorder.clone();
                let reply = reply.clone();
                async move {
                    recorder.lock().unwrap().push((headers, body));
                    (status, Json(reply))
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), received)
    }

    fn generator_for(endpoint: &str) -> BriefGenerator {
        let mut settings = Settings::default();
        settings.llm.api_key = "sk-x".to_string();
        settings.llm.endpoint = endpoint.to_string();
        settings.llm.timeout_secs = 10;

        BriefGenerator::new(Box::new(AnthropicClient::from_settings(&settings).unwrap()))
    }

    async fn generate(generator: &BriefGenerator) -> BriefOutcome {
        let attendees = vec![Attendee::new("A", "a@acme.io")];
        generator
            .generate("Sync", "2025-01-01T10:00", &attendees)
            .await
    }

    #[tokio::test]
    async fn split_fenced_reply_is_researched() {
        let (endpoint, received) = spawn_messages_stub(
            StatusCode::OK,
            json!({
                "id": "msg_1",
                "type": "message",
                "content": [
                    {"type": "text", "text": "Here is the brief.\n```json\n{\"strategy\": "},
                    {"type": "server_tool_use", "id": "t1", "name": "web_search", "input": {"query": "acme"}},
                    {"type": "text", "text": "\"lead with data\", \"attendees\": []}\n```"}
                ]
            }),
        )
        .await;

        let outcome = generate(&generator_for(&endpoint)).await;

        let document = match outcome {
            BriefOutcome::Researched(document) => document,
            BriefOutcome::Degraded { reason, .. } => {
                panic!("expected researched brief, fell back: {}", reason)
            }
        };
        assert_eq!(document["strategy"], "lead with data");

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let (headers, body) = &received[0];
        assert_eq!(headers["x-api-key"], "sk-x");
        assert_eq!(headers["anthropic-version"], ANTHROPIC_VERSION);
        assert_eq!(body["tools"][0]["type"], WEB_SEARCH_TOOL_TYPE);
        assert_eq!(body["model"], DEFAULT_ANTHROPIC_MODEL);
        assert_eq!(body["max_tokens"], 4000);
        assert!(body["messages"][0]["content"]
            .as_str()
            .unwrap()
            .contains("- A (a@acme.io)"));
    }

    #[tokio::test]
    async fn error_status_degrades_as_upstream_failure() {
        let (endpoint, received) = spawn_messages_stub(
            StatusCode::UNAUTHORIZED,
            json!({
                "type": "error",
                "error": {"type": "authentication_error", "message": "invalid x-api-key"}
            }),
        )
        .await;

        let outcome = generate(&generator_for(&endpoint)).await;

        let BriefOutcome::Degraded { document, reason } = outcome else {
            panic!("expected fallback brief");
        };
        assert!(
            matches!(reason, DegradeReason::Upstream(ref msg) if msg.contains("401")),
            "unexpected reason: {}",
            reason
        );
        assert_eq!(document["attendees"][0]["company"], "Acme");
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[test]
    fn reply_text_joins_text_blocks_only() {
        let payload: MessagesResponse = serde_json::from_value(serde_json::json!({
            "id": "msg_1",
            "content": [
                {"type": "text", "text": "Let me search. "},
                {"type": "server_tool_use", "id": "t1", "name": "web_search", "input": {"query": "acme"}},
                {"type": "web_search_tool_result", "tool_use_id": "t1", "content": []},
                {"type": "text", "text": "```json\n{}\n```"}
            ]
        }))
        .unwrap();

        assert_eq!(payload.text(), "Let me search. ```json\n{}\n```");
    }

    #[test]
    fn reply_without_content_is_empty() {
        let payload: MessagesResponse = serde_json::from_str("{}").unwrap();
        assert!(payload.text().is_empty());
    }

    #[test]
    fn request_body_enables_web_search() {
        let body = MessagesRequest {
            model: "m",
            max_tokens: 4000,
            tools: vec![ToolSpec {
                kind: WEB_SEARCH_TOOL_TYPE,
                name: "web_search",
            }],
            messages: vec![Message {
                role: "user",
                content: "hi".to_string(),
            }],
        };

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["tools"][0]["type"], "web_search_20250305");
        assert_eq!(value["max_tokens"], 4000);
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn endpoint_trailing_slash_is_trimmed() {
        let mut settings = Settings::default();
        settings.llm.api_key = "sk-test".to_string();
        settings.llm.endpoint = "http://localhost:9999/".to_string();

        let client = AnthropicClient::from_settings(&settings).unwrap();
        assert_eq!(client.request_url(), "http://localhost:9999/v1/messages");
    }
}
