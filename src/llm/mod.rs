//! LLM module for meetintel
//!
//! Asks a provider with web search to research meeting attendees.

mod anthropic;
mod client;
mod mock;
mod prompts;

pub use anthropic::AnthropicClient;
pub use client::{build_provider, LlmProvider, ResearchRequest};
pub use mock::MockProvider;
pub use prompts::{build_research_prompt, format_attendees};
