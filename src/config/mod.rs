pub mod credentials;

pub use credentials::{resolve_credential, AwsCredentials};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ScoutError;

/// Optional YAML configuration for the server and CLI. Everything has a
/// working default; the file only overrides.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Regions to scan when a request does not name one.
    #[serde(default)]
    pub regions: Option<Vec<String>>,

    #[serde(default)]
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Chat backend: "anthropic" or "openai".
    #[serde(default = "default_llm_provider")]
    pub provider: String,

    /// Model identifier; provider default when unset.
    #[serde(default)]
    pub model: Option<String>,

    /// API key, or a `$ENV_VAR` reference resolved at load time.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_llm_provider() -> String {
    "anthropic".to_string()
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: default_llm_provider(),
            model: None,
            api_key: None,
        }
    }
}

impl LlmConfig {
    /// Resolve the API key: config value (with `$ENV` references honored),
    /// falling back to the conventional environment variable per provider.
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key {
            let resolved = resolve_credential(key);
            if !resolved.is_empty() {
                return Some(resolved);
            }
        }
        let var = match self.provider.as_str() {
            "openai" => "OPENAI_API_KEY",
            _ => "ANTHROPIC_API_KEY",
        };
        std::env::var(var).ok()
    }
}

pub async fn parse_config(path: &Path) -> Result<AppConfig, ScoutError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ScoutError::Config(format!("Cannot read {}: {e}", path.display())))?;
    let config: AppConfig = serde_yaml::from_str(&raw)
        .map_err(|e| ScoutError::Config(format!("Invalid config {}: {e}", path.display())))?;
    Ok(config)
}
