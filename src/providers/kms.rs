//! Credential decryption collaborator.
//!
//! The UI may submit credentials as a base64 KMS ciphertext instead of
//! plaintext keys. The decryptor runs with the server's own ambient AWS
//! identity, not the scan credentials it is in the middle of producing.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_kms::primitives::Blob;
use base64::Engine;
use serde::Deserialize;

use crate::config::credentials::AwsCredentials;
use crate::errors::ScoutError;

#[async_trait]
pub trait CredentialDecryptor: Send + Sync {
    async fn decrypt(
        &self,
        ciphertext_b64: &str,
        key_id: Option<&str>,
    ) -> Result<AwsCredentials, ScoutError>;
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DecryptedPayload {
    access_key_id: String,
    secret_access_key: String,
}

pub struct KmsDecryptor {
    region: String,
}

impl KmsDecryptor {
    pub fn new(region: impl Into<String>) -> Self {
        Self { region: region.into() }
    }
}

#[async_trait]
impl CredentialDecryptor for KmsDecryptor {
    async fn decrypt(
        &self,
        ciphertext_b64: &str,
        key_id: Option<&str>,
    ) -> Result<AwsCredentials, ScoutError> {
        let ciphertext = base64::engine::general_purpose::STANDARD
            .decode(ciphertext_b64)
            .map_err(|e| ScoutError::Decryption(format!("Invalid base64 ciphertext: {e}")))?;

        let config = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(self.region.clone()))
            .load()
            .await;
        let client = aws_sdk_kms::Client::new(&config);

        let mut request = client.decrypt().ciphertext_blob(Blob::new(ciphertext));
        if let Some(key_id) = key_id {
            request = request.key_id(key_id);
        }

        let resp = request
            .send()
            .await
            .map_err(|e| ScoutError::Decryption(e.to_string()))?;

        let plaintext = resp
            .plaintext()
            .ok_or_else(|| ScoutError::Decryption("Empty decryption result".into()))?;

        let payload: DecryptedPayload = serde_json::from_slice(plaintext.as_ref())
            .map_err(|e| ScoutError::Decryption(format!("Malformed credential payload: {e}")))?;

        Ok(AwsCredentials::new(payload.access_key_id, payload.secret_access_key))
    }
}
