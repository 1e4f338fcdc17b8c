use std::path::PathBuf;

use tracing::info;

use crate::api;
use crate::cli::commands::ServeArgs;
use crate::config::{parse_config, AppConfig};
use crate::errors::ScoutError;

pub async fn handle_serve(args: ServeArgs) -> Result<(), ScoutError> {
    let config = match &args.config {
        Some(path) => parse_config(&PathBuf::from(path)).await?,
        None => AppConfig::default(),
    };

    info!(host = %args.host, port = args.port, "Starting API server");

    let state = api::create_app_state(config);
    let app = api::build_router(state);

    let addr = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| ScoutError::Internal(format!("Server error: {e}")))?;

    Ok(())
}
