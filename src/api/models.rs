use serde::{Deserialize, Serialize};

use crate::llm::Message;

/// Scan request body. Credentials arrive either as a plaintext pair or as a
/// KMS ciphertext blob produced by the UI's encryption flow.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
    /// Base64 ciphertext; decrypted server-side, takes precedence over the
    /// plaintext pair when present.
    pub encrypted_credentials: Option<String>,
    pub key_id: Option<String>,
    /// Single region override; the default two-region set applies when
    /// absent.
    pub region: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub messages: Vec<Message>,
    /// Rendered scan results the UI wants the assistant to ground its
    /// answers in.
    #[serde(default)]
    pub scan_context: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: String,
}
