use axum::extract::State;
use axum::Json;
use tracing::info;

use crate::api::models::{ChatRequest, ChatResponse};
use crate::api::AppState;
use crate::errors::ScoutError;
use crate::llm::create_provider;

const SYSTEM_PROMPT: &str = "You are a cloud cost advisor embedded in an AWS cost-visibility scanner. \
Answer questions about the scan findings: what each finding means, why the resource keeps billing, \
and how to remediate it. Be concise and practical; cite concrete resource IDs from the scan context \
when it is provided.";

pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ScoutError> {
    if req.messages.is_empty() {
        return Err(ScoutError::Config("messages must not be empty".into()));
    }

    let llm = &state.config.llm;
    let api_key = llm
        .resolve_api_key()
        .ok_or_else(|| ScoutError::Config("No LLM API key configured".into()))?;
    let provider = create_provider(&llm.provider, &api_key, llm.model.as_deref())?;

    let mut system = SYSTEM_PROMPT.to_string();
    if let Some(context) = &req.scan_context {
        system.push_str("\n\nCurrent scan results:\n");
        system.push_str(context);
    }

    let response = provider.chat(&req.messages, Some(&system)).await?;
    info!(
        provider = provider.provider_name(),
        model = provider.model_name(),
        turns = req.messages.len(),
        "chat reply produced"
    );

    Ok(Json(ChatResponse { message: response.content }))
}
