use async_trait::async_trait;
use tracing::warn;

use crate::errors::ScoutError;
use crate::models::{Finding, ServiceKind};
use crate::pricing;
use crate::providers::types::FloatingIp;
use crate::providers::CloudInventory;
use super::Probe;

/// Idle floating IPs: allocated addresses with neither an associated
/// instance nor a network interface.
pub struct AddressProbe;

#[async_trait]
impl Probe for AddressProbe {
    fn name(&self) -> &'static str {
        "floating-ips"
    }

    fn service(&self) -> ServiceKind {
        ServiceKind::FloatingIp
    }

    async fn run(
        &self,
        inventory: &dyn CloudInventory,
        regions: &[String],
    ) -> Result<Vec<Finding>, ScoutError> {
        let mut findings = Vec::new();
        for region in regions {
            match inventory.floating_ips(region).await {
                Ok(addresses) => {
                    findings.extend(
                        addresses
                            .iter()
                            .filter(|a| a.instance_id.is_none() && a.network_interface_id.is_none())
                            .map(|a| build_finding(region, a)),
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

fn build_finding(region: &str, address: &FloatingIp) -> Finding {
    let price = pricing::floating_ip();

    Finding {
        service: ServiceKind::FloatingIp,
        resource_id: address.allocation_id.clone(),
        resource_name: Some(address.public_ip.clone()),
        region: region.to_string(),
        severity: ServiceKind::FloatingIp.severity(),
        title: format!("Unassociated floating IP {}", address.public_ip),
        description: format!(
            "Address {} in {region} is not associated with any instance or network interface; idle addresses carry a flat monthly charge.",
            address.public_ip
        ),
        suggestion: "Release the address, or associate it with the resource it was reserved for."
            .to_string(),
        estimated_monthly_cost: price.monthly,
        estimated_hourly_cost: price.hourly,
        action_url: Some(format!(
            "https://{region}.console.aws.amazon.com/ec2/home?region={region}#ElasticIpDetails:AllocationId={}",
            address.allocation_id
        )),
    }
}
