use std::time::Duration;

use axum::extract::State;
use axum::Json;
use tracing::info;
use uuid::Uuid;

use crate::api::models::ScanRequest;
use crate::api::AppState;
use crate::config::credentials::AwsCredentials;
use crate::errors::ScoutError;
use crate::models::ScanResult;
use crate::providers::{AwsInventory, CredentialDecryptor, KmsDecryptor};
use crate::scanner::Scanner;

/// Wall-clock budget for one scan. The core defines no internal timeout; a
/// stuck provider call is abandoned here, at the calling layer.
const SCAN_TIMEOUT: Duration = Duration::from_secs(120);

/// Region the KMS decryptor runs in when a request carries encrypted
/// credentials.
const DECRYPTOR_REGION: &str = "us-east-1";

pub async fn run_scan(
    State(state): State<AppState>,
    Json(req): Json<ScanRequest>,
) -> Result<Json<ScanResult>, ScoutError> {
    let credentials = resolve_credentials(&req).await?;

    let scan_id = Uuid::new_v4();
    let regions = req
        .region
        .clone()
        .map(|r| vec![r])
        .or_else(|| state.config.regions.clone());
    info!(%scan_id, regions = ?regions, "scan requested");

    let inventory = AwsInventory::new(credentials);
    let scanner = Scanner::new();
    let result = tokio::time::timeout(SCAN_TIMEOUT, scanner.run(&inventory, regions))
        .await
        .map_err(|_| {
            ScoutError::Timeout(format!("Scan exceeded {} seconds", SCAN_TIMEOUT.as_secs()))
        })?;

    Ok(Json(result))
}

async fn resolve_credentials(req: &ScanRequest) -> Result<AwsCredentials, ScoutError> {
    if let Some(ciphertext) = &req.encrypted_credentials {
        let decryptor = KmsDecryptor::new(DECRYPTOR_REGION);
        return decryptor.decrypt(ciphertext, req.key_id.as_deref()).await;
    }

    match (&req.access_key_id, &req.secret_access_key) {
        (Some(access_key_id), Some(secret_access_key))
            if !access_key_id.is_empty() && !secret_access_key.is_empty() =>
        {
            Ok(AwsCredentials::new(access_key_id, secret_access_key))
        }
        _ => Err(ScoutError::Credentials(
            "accessKeyId and secretAccessKey (or encryptedCredentials) are required".into(),
        )),
    }
}
