use async_trait::async_trait;

use crate::errors::ScoutError;
use crate::models::{Finding, ServiceKind};
use crate::pricing;
use crate::providers::types::CdnDistribution;
use crate::providers::CloudInventory;
use super::{Probe, GLOBAL_REGION};

/// Enabled CDN distributions. The service is account-global, so the region
/// list is ignored and findings carry the "global" region label.
pub struct CdnProbe;

#[async_trait]
impl Probe for CdnProbe {
    fn name(&self) -> &'static str {
        "cdn-distributions"
    }

    fn service(&self) -> ServiceKind {
        ServiceKind::CdnDistribution
    }

    async fn run(
        &self,
        inventory: &dyn CloudInventory,
        _regions: &[String],
    ) -> Result<Vec<Finding>, ScoutError> {
        let distributions = inventory.cdn_distributions().await?;
        Ok(distributions
            .iter()
            .filter(|d| d.enabled)
            .map(build_finding)
            .collect())
    }
}

/// Display name preference: first alias, else the generated domain name,
/// else the opaque distribution ID.
fn display_name(distribution: &CdnDistribution) -> &str {
    if let Some(alias) = distribution.aliases.first() {
        return alias;
    }
    if !distribution.domain_name.is_empty() {
        return &distribution.domain_name;
    }
    &distribution.id
}

fn build_finding(distribution: &CdnDistribution) -> Finding {
    let price = pricing::cdn_distribution();
    let label = display_name(distribution);

    Finding {
        service: ServiceKind::CdnDistribution,
        resource_id: distribution.id.clone(),
        resource_name: Some(label.to_string()),
        region: GLOBAL_REGION.to_string(),
        severity: ServiceKind::CdnDistribution.severity(),
        title: format!("Enabled CDN distribution {label}"),
        description: format!(
            "Distribution {} ({label}) is enabled and keeps serving, and billing for, whatever traffic reaches it.",
            distribution.id
        ),
        suggestion: "Disable the distribution if it is no longer in use, or review its price class."
            .to_string(),
        estimated_monthly_cost: price.monthly,
        estimated_hourly_cost: price.hourly,
        action_url: Some(format!(
            "https://console.aws.amazon.com/cloudfront/v4/home#/distributions/{}",
            distribution.id
        )),
    }
}
