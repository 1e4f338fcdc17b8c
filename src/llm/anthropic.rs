use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::errors::ScoutError;
use super::provider::LLMProvider;
use super::types::{LLMResponse, Message};

pub struct AnthropicProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl AnthropicProvider {
    pub fn new(api_key: &str, model: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.unwrap_or("claude-sonnet-4-5-20250929").to_string(),
            base_url: "https://api.anthropic.com".to_string(),
        }
    }
}

#[async_trait]
impl LLMProvider for AnthropicProvider {
    async fn chat(
        &self,
        messages: &[Message],
        system: Option<&str>,
    ) -> Result<LLMResponse, ScoutError> {
        // The messages endpoint takes system text as a top-level field, not
        // a transcript role. Any system-role turns in the transcript are
        // folded into it.
        let mut system_text = system.map(str::to_string).unwrap_or_default();
        let mut turns = Vec::new();
        for message in messages {
            if message.role == "system" {
                if !system_text.is_empty() {
                    system_text.push('\n');
                }
                system_text.push_str(&message.content);
            } else {
                turns.push(json!({"role": message.role, "content": message.content}));
            }
        }

        let mut body = json!({
            "model": self.model,
            "max_tokens": 4096,
            "messages": turns,
        });
        if !system_text.is_empty() {
            body["system"] = json!(system_text);
        }

        let resp = self.client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", "2023-06-01")
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| ScoutError::Network(format!("Anthropic API request failed: {e}")))?;

        let status = resp.status();
        if status == 429 {
            return Err(ScoutError::RateLimit("Anthropic rate limit exceeded".into()));
        }
        if status == 401 {
            return Err(ScoutError::Authentication("Invalid Anthropic API key".into()));
        }

        let data: Value = resp.json().await
            .map_err(|e| ScoutError::LLMApi(format!("Failed to parse Anthropic response: {e}")))?;

        if let Some(error) = data.get("error") {
            let msg = error["message"].as_str().unwrap_or("Unknown error");
            return Err(ScoutError::LLMApi(msg.to_string()));
        }

        let content = data["content"][0]["text"].as_str()
            .ok_or_else(|| ScoutError::LLMApi("No content in Anthropic response".into()))?
            .to_string();

        let input_tokens = data["usage"]["input_tokens"].as_u64();
        let output_tokens = data["usage"]["output_tokens"].as_u64();

        let cost_usd = match (input_tokens, output_tokens) {
            (Some(inp), Some(out)) => {
                // Claude Sonnet pricing approximation
                Some((inp as f64 * 3.0 / 1_000_000.0) + (out as f64 * 15.0 / 1_000_000.0))
            }
            _ => None,
        };

        debug!(model = %self.model, input_tokens, output_tokens, "Anthropic chat completion");

        Ok(LLMResponse {
            content,
            input_tokens,
            output_tokens,
            cost_usd,
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str { "anthropic" }
    fn model_name(&self) -> &str { &self.model }
}
