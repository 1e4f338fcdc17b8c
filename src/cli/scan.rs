use std::path::PathBuf;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use crate::cli::commands::ScanArgs;
use crate::config::credentials::AwsCredentials;
use crate::config::{parse_config, AppConfig};
use crate::errors::ScoutError;
use crate::providers::AwsInventory;
use crate::reporting;
use crate::scanner::Scanner;

pub async fn handle_scan(args: ScanArgs) -> Result<(), ScoutError> {
    let config = match &args.config {
        Some(path) => parse_config(&PathBuf::from(path)).await?,
        None => AppConfig::default(),
    };

    let credentials = match (&args.access_key_id, &args.secret_access_key) {
        (Some(access_key_id), Some(secret_access_key)) => {
            AwsCredentials::new(access_key_id, secret_access_key)
        }
        _ => AwsCredentials::from_env().ok_or_else(|| {
            ScoutError::Credentials(
                "Pass --access-key-id/--secret-access-key or set AWS_ACCESS_KEY_ID/AWS_SECRET_ACCESS_KEY"
                    .into(),
            )
        })?,
    };

    let regions = if args.region.is_empty() {
        config.regions.clone()
    } else {
        Some(args.region.clone())
    };

    let spinner = if args.json {
        None
    } else {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Scanning account...");
        spinner.enable_steady_tick(Duration::from_millis(120));
        Some(spinner)
    };

    let inventory = AwsInventory::new(credentials);
    let result = Scanner::new().run(&inventory, regions).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        reporting::console::print_scan_result(&result);
    }

    if let Some(path) = &args.output {
        tokio::fs::write(path, reporting::format_report_markdown(&result)).await?;
        if !args.json {
            println!("Report written to {path}");
        }
    }

    Ok(())
}
