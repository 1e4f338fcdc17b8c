use axum::{http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::errors::ScoutError;

impl IntoResponse for ScoutError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            ScoutError::Credentials(_) | ScoutError::Config(_) => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ScoutError::Authentication(_) => (StatusCode::UNAUTHORIZED, self.to_string()),
            ScoutError::RateLimit(_) => (StatusCode::TOO_MANY_REQUESTS, self.to_string()),
            ScoutError::LLMApi(_) | ScoutError::Network(_) => {
                (StatusCode::BAD_GATEWAY, self.to_string())
            }
            // Everything else (decryption failures included) is a plain 500;
            // internals stay out of the response outside debug builds.
            _ => {
                let message = if cfg!(debug_assertions) {
                    self.to_string()
                } else {
                    "Internal server error".to_string()
                };
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };

        let error = status
            .canonical_reason()
            .unwrap_or("error")
            .to_ascii_lowercase();
        (status, Json(json!({"error": error, "message": message}))).into_response()
    }
}
