use async_trait::async_trait;
use tracing::warn;

use crate::errors::ScoutError;
use crate::models::{Finding, ServiceKind};
use crate::pricing;
use crate::providers::types::BlockVolume;
use crate::providers::CloudInventory;
use super::Probe;

/// Unattached block volumes. A volume counts only when its state is
/// "available" AND its attachment list is empty — a volume mid-detach still
/// lists the attachment and is not flagged.
pub struct VolumeProbe;

#[async_trait]
impl Probe for VolumeProbe {
    fn name(&self) -> &'static str {
        "block-volumes"
    }

    fn service(&self) -> ServiceKind {
        ServiceKind::BlockVolume
    }

    async fn run(
        &self,
        inventory: &dyn CloudInventory,
        regions: &[String],
    ) -> Result<Vec<Finding>, ScoutError> {
        let mut findings = Vec::new();
        for region in regions {
            match inventory.block_volumes(region).await {
                Ok(volumes) => {
                    findings.extend(
                        volumes
                            .iter()
                            .filter(|v| v.state == "available" && v.attachment_count == 0)
                            .map(|v| build_finding(region, v)),
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

fn build_finding(region: &str, volume: &BlockVolume) -> Finding {
    let price = pricing::block_volume(volume.size_gb);
    let label = volume.name.as_deref().unwrap_or(&volume.id);

    Finding {
        service: ServiceKind::BlockVolume,
        resource_id: volume.id.clone(),
        resource_name: volume.name.clone(),
        region: region.to_string(),
        severity: ServiceKind::BlockVolume.severity(),
        title: format!("Unattached volume {label}"),
        description: format!(
            "Volume {} ({} GB) in {region} is not attached to any instance but is still billed monthly.",
            volume.id, volume.size_gb
        ),
        suggestion: "Snapshot the volume and delete it, or re-attach it if the data is still in use."
            .to_string(),
        estimated_monthly_cost: price.monthly,
        estimated_hourly_cost: price.hourly,
        action_url: Some(format!(
            "https://{region}.console.aws.amazon.com/ec2/home?region={region}#VolumeDetails:volumeId={}",
            volume.id
        )),
    }
}
