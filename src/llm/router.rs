use crate::errors::ScoutError;
use super::anthropic::AnthropicProvider;
use super::openai::OpenAIProvider;
use super::provider::LLMProvider;

pub fn create_provider(
    provider_name: &str,
    api_key: &str,
    model: Option<&str>,
) -> Result<Box<dyn LLMProvider>, ScoutError> {
    match provider_name {
        "anthropic" => Ok(Box::new(AnthropicProvider::new(api_key, model))),
        "openai" => Ok(Box::new(OpenAIProvider::new(api_key, model))),
        other => Err(ScoutError::Config(format!("Unknown LLM provider: {other}"))),
    }
}
