use anyhow::Result;
use async_trait::async_trait;

use crate::brief::Attendee;
use crate::config::Settings;
use crate::llm::anthropic::AnthropicClient;
use crate::llm::mock::MockProvider;
use crate::MeetintelError;

/// Research request payload.
pub struct ResearchRequest<'a> {
    pub meeting_title: &'a str,
    pub meeting_time: &'a str,
    pub attendees: &'a [Attendee],
    /// Timestamp the resulting brief is stamped with
    pub generated_at: &'a str,
}

#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Research the meeting and return the model's reply text, all text
    /// segments concatenated in order.
    async fn research(&self, request: ResearchRequest<'_>) -> Result<String>;
}

/// Build an LLM provider from runtime settings.
///
/// Fails when the provider is unknown or its credentials are missing, so a
/// misconfigured service refuses to start instead of degrading every brief.
pub fn build_provider(settings: &Settings) -> crate::Result<Box<dyn LlmProvider>> {
    match settings.llm.provider.to_lowercase().as_str() {
        "anthropic" => Ok(Box::new(AnthropicClient::from_settings(settings)?)),
        "mock" => Ok(Box::new(MockProvider)),
        other => Err(MeetintelError::Config(format!(
            "Unsupported llm.provider '{}'. Supported providers: anthropic, mock",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;

    #[test]
    fn unsupported_provider_returns_error() {
        let mut settings = Settings::default();
        settings.llm.provider = "unknown".to_string();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Unsupported llm.provider"));
    }

    #[test]
    fn anthropic_provider_requires_api_key() {
        let settings = Settings::default();

        let err = match build_provider(&settings) {
            Ok(_) => panic!("expected provider creation to fail"),
            Err(e) => e.to_string(),
        };
        assert!(err.contains("Anthropic API key is missing"));
    }

    #[test]
    fn anthropic_provider_builds_with_key() {
        let mut settings = Settings::default();
        settings.llm.api_key = "sk-test".to_string();

        assert!(build_provider(&settings).is_ok());
    }

    #[test]
    fn mock_provider_needs_no_key() {
        let mut settings = Settings::default();
        settings.llm.provider = "Mock".to_string();

        assert!(build_provider(&settings).is_ok());
    }
}
