use async_trait::async_trait;
use tracing::warn;

use crate::errors::ScoutError;
use crate::models::{Finding, ServiceKind};
use crate::pricing;
use crate::providers::types::RelationalInstance;
use crate::providers::CloudInventory;
use super::Probe;

/// Relational database instances whose status is exactly "available".
/// Stopped, rebooting and creating instances are skipped.
pub struct DatabaseProbe;

#[async_trait]
impl Probe for DatabaseProbe {
    fn name(&self) -> &'static str {
        "relational-instances"
    }

    fn service(&self) -> ServiceKind {
        ServiceKind::RelationalInstance
    }

    async fn run(
        &self,
        inventory: &dyn CloudInventory,
        regions: &[String],
    ) -> Result<Vec<Finding>, ScoutError> {
        let mut findings = Vec::new();
        for region in regions {
            match inventory.relational_instances(region).await {
                Ok(instances) => {
                    findings.extend(
                        instances
                            .iter()
                            .filter(|i| i.status == "available")
                            .map(|i| build_finding(region, i)),
                    );
                }
                Err(e) => {
                    warn!(probe = self.name(), region = %region, error = %e, "region listing failed, skipping");
                }
            }
        }
        Ok(findings)
    }
}

fn build_finding(region: &str, instance: &RelationalInstance) -> Finding {
    let price = pricing::relational_instance(&instance.instance_class);
    let engine = instance.engine.as_deref().unwrap_or("unknown engine");

    Finding {
        service: ServiceKind::RelationalInstance,
        resource_id: instance.id.clone(),
        resource_name: Some(instance.id.clone()),
        region: region.to_string(),
        severity: ServiceKind::RelationalInstance.severity(),
        title: format!("Running database {}", instance.id),
        description: format!(
            "Database instance {} ({}, {engine}) is available in {region} and bills continuously while it runs.",
            instance.id, instance.instance_class
        ),
        suggestion: "Stop the instance outside the hours it is needed, or move to a smaller class."
            .to_string(),
        estimated_monthly_cost: price.monthly,
        estimated_hourly_cost: price.hourly,
        action_url: Some(format!(
            "https://{region}.console.aws.amazon.com/rds/home?region={region}#database:id={}",
            instance.id
        )),
    }
}
