use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use crate::errors::ScoutError;
use super::provider::LLMProvider;
use super::types::{LLMResponse, Message};

pub struct OpenAIProvider {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl OpenAIProvider {
    pub fn new(api_key: &str, model: Option<&str>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            model: model.unwrap_or("gpt-4o").to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
        }
    }
}

#[async_trait]
impl LLMProvider for OpenAIProvider {
    async fn chat(
        &self,
        messages: &[Message],
        system: Option<&str>,
    ) -> Result<LLMResponse, ScoutError> {
        let mut turns = Vec::new();
        if let Some(sys) = system {
            turns.push(json!({"role": "system", "content": sys}));
        }
        for message in messages {
            turns.push(json!({"role": message.role, "content": message.content}));
        }

        let body = json!({
            "model": self.model,
            "messages": turns,
            "max_tokens": 4096,
        });

        let resp = self.client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| ScoutError::Network(format!("OpenAI request failed: {e}")))?;

        let status = resp.status();
        if status.as_u16() == 429 {
            return Err(ScoutError::RateLimit("OpenAI rate limit".into()));
        }
        if status.as_u16() == 401 {
            return Err(ScoutError::Authentication("Invalid OpenAI API key".into()));
        }

        let data: Value = resp.json().await
            .map_err(|e| ScoutError::LLMApi(format!("Failed to parse OpenAI response: {e}")))?;

        if let Some(error) = data.get("error") {
            return Err(ScoutError::LLMApi(
                error["message"].as_str().unwrap_or("Unknown").to_string(),
            ));
        }

        let content = data["choices"][0]["message"]["content"].as_str()
            .ok_or_else(|| ScoutError::LLMApi("No content in OpenAI response".into()))?
            .to_string();
        let input_tokens = data["usage"]["prompt_tokens"].as_u64();
        let output_tokens = data["usage"]["completion_tokens"].as_u64();

        Ok(LLMResponse {
            content,
            input_tokens,
            output_tokens,
            cost_usd: None,
            model: self.model.clone(),
        })
    }

    fn provider_name(&self) -> &str { "openai" }
    fn model_name(&self) -> &str { &self.model }
}
