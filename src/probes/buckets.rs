use async_trait::async_trait;
use tracing::debug;

use crate::errors::ScoutError;
use crate::models::{Finding, ServiceKind};
use crate::pricing;
use crate::providers::CloudInventory;
use super::{Probe, GLOBAL_REGION};

/// Buckets with versioning enabled. "Suspended" and never-configured
/// buckets are not flagged; only status exactly "Enabled" counts. The
/// per-bucket versioning lookup is independently fallible and skipped
/// without aborting the enumeration.
pub struct BucketProbe;

#[async_trait]
impl Probe for BucketProbe {
    fn name(&self) -> &'static str {
        "object-buckets"
    }

    fn service(&self) -> ServiceKind {
        ServiceKind::ObjectBucket
    }

    async fn run(
        &self,
        inventory: &dyn CloudInventory,
        _regions: &[String],
    ) -> Result<Vec<Finding>, ScoutError> {
        let buckets = inventory.object_buckets().await?;

        let mut findings = Vec::new();
        for bucket in buckets {
            let status = match inventory.bucket_versioning(&bucket.name).await {
                Ok(status) => status,
                Err(e) => {
                    debug!(probe = self.name(), bucket = %bucket.name, error = %e, "versioning lookup failed, skipping bucket");
                    continue;
                }
            };
            if status.as_deref() == Some("Enabled") {
                findings.push(build_finding(&bucket.name));
            }
        }
        Ok(findings)
    }
}

fn build_finding(bucket: &str) -> Finding {
    let price = pricing::versioned_bucket();

    Finding {
        service: ServiceKind::ObjectBucket,
        resource_id: bucket.to_string(),
        resource_name: Some(bucket.to_string()),
        region: GLOBAL_REGION.to_string(),
        severity: ServiceKind::ObjectBucket.severity(),
        title: format!("Versioned bucket {bucket}"),
        description: format!(
            "Bucket {bucket} keeps every object version; noncurrent versions accumulate storage cost until something expires them.",
        ),
        suggestion: "Add a lifecycle rule that expires noncurrent versions, or suspend versioning if history is not needed."
            .to_string(),
        estimated_monthly_cost: price.monthly,
        estimated_hourly_cost: price.hourly,
        action_url: Some(format!(
            "https://s3.console.aws.amazon.com/s3/buckets/{bucket}?tab=properties"
        )),
    }
}
