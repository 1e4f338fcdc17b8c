use async_trait::async_trait;

use crate::errors::ScoutError;
use super::types::{LLMResponse, Message};

#[async_trait]
pub trait LLMProvider: Send + Sync {
    /// Forward a conversation transcript and return the model's reply.
    /// `system` is prepended in whatever form the upstream API expects.
    async fn chat(
        &self,
        messages: &[Message],
        system: Option<&str>,
    ) -> Result<LLMResponse, ScoutError>;

    /// Provider name for logging
    fn provider_name(&self) -> &str;

    /// Model identifier
    fn model_name(&self) -> &str;
}
