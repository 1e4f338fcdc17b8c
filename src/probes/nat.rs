use async_trait::async_trait;
use tracing::warn;

use crate::errors::ScoutError;
use crate::models::{Finding, ServiceKind};
use crate::pricing;
use crate::providers::types::NatGateway;
use crate::providers::CloudInventory;
use super::Probe;

/// NAT gateways in the "available" state. Pending and deleting gateways are
/// not billed hourly and are skipped.
pub struct NatGatewayProbe;

#[async_trait]
impl Probe for NatGatewayProbe {
    fn name(&self) -> &'static str {
        "nat-gateways"
    }

    fn service(&self) -> ServiceKind {
        ServiceKind::NatGateway
    }

    async fn run(
        &self,
        inventory: &dyn CloudInventory,
        regions: &[String],
    ) -> Result<Vec<Finding>, ScoutError> {
        let mut findings = Vec::new();
        for region in regions {
            match inventory.nat_gateways(region).await {
                Ok(gateways) => {
                    findings.extend(
                        gateways
                            .iter()
                            .filter(|g| g.state == "available")
                            .map(|g| build_finding(region, g)),
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

fn build_finding(region: &str, gateway: &NatGateway) -> Finding {
    let price = pricing::nat_gateway();

    Finding {
        service: ServiceKind::NatGateway,
        resource_id: gateway.id.clone(),
        resource_name: None,
        region: region.to_string(),
        severity: ServiceKind::NatGateway.severity(),
        title: format!("Active NAT gateway {}", gateway.id),
        description: format!(
            "NAT gateway {} in {region} bills for every hour it stays available, whether or not traffic flows through it.",
            gateway.id
        ),
        suggestion: "Delete the gateway if the private subnets behind it no longer need egress, or consolidate several gateways into one."
            .to_string(),
        estimated_monthly_cost: price.monthly,
        estimated_hourly_cost: price.hourly,
        action_url: Some(format!(
            "https://{region}.console.aws.amazon.com/vpcconsole/home?region={region}#NatGatewayDetails:natGatewayId={}",
            gateway.id
        )),
    }
}
