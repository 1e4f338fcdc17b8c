use async_trait::async_trait;
use tracing::warn;

use crate::errors::ScoutError;
use crate::models::{Finding, ServiceKind};
use crate::pricing;
use crate::providers::types::ComputeInstance;
use crate::providers::CloudInventory;
use super::Probe;

/// Running compute instances. Only instances whose lifecycle state is
/// exactly "running" count; pending, stopping and stopped instances do not
/// accrue compute charges.
pub struct ComputeProbe;

#[async_trait]
impl Probe for ComputeProbe {
    fn name(&self) -> &'static str {
        "compute-instances"
    }

    fn service(&self) -> ServiceKind {
        ServiceKind::ComputeInstance
    }

    async fn run(
        &self,
        inventory: &dyn CloudInventory,
        regions: &[String],
    ) -> Result<Vec<Finding>, ScoutError> {
        let mut findings = Vec::new();
        for region in regions {
            match inventory.compute_instances(region).await {
                Ok(instances) => {
                    findings.extend(
                        instances
                            .iter()
                            .filter(|i| i.state == "running")
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

fn build_finding(region: &str, instance: &ComputeInstance) -> Finding {
    let price = pricing::compute_instance(instance.instance_class.as_deref());
    let label = instance.name.as_deref().unwrap_or(&instance.id);
    let class = instance.instance_class.as_deref().unwrap_or("unknown class");

    Finding {
        service: ServiceKind::ComputeInstance,
        resource_id: instance.id.clone(),
        resource_name: instance.name.clone(),
        region: region.to_string(),
        severity: ServiceKind::ComputeInstance.severity(),
        title: format!("Running instance {label}"),
        description: format!(
            "Instance {} ({class}) is running in {region} and bills for every hour it stays up.",
            instance.id
        ),
        suggestion: "Stop the instance when it is idle, or downsize it if it must keep running."
            .to_string(),
        estimated_monthly_cost: price.monthly,
        estimated_hourly_cost: price.hourly,
        action_url: Some(format!(
            "https://{region}.console.aws.amazon.com/ec2/home?region={region}#InstanceDetails:instanceId={}",
            instance.id
        )),
    }
}
