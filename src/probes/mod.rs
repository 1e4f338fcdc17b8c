//! Per-service probes.
//!
//! A probe owns one service's notion of "wasteful": the filter predicate,
//! the price lookup, the severity (fixed per service category), the console
//! deep link, and the human copy. Probes never abort a scan: region-level
//! listing failures are logged and skipped inside the probe, and anything a
//! probe does return as `Err` is caught by the scanner.

pub mod addresses;
pub mod buckets;
pub mod cdn;
pub mod compute;
pub mod databases;
pub mod nat;
pub mod tables;
pub mod volumes;

use async_trait::async_trait;

use crate::errors::ScoutError;
use crate::models::{Finding, ServiceKind};
use crate::providers::CloudInventory;

/// Region label for account-global services.
pub const GLOBAL_REGION: &str = "global";

#[async_trait]
pub trait Probe: Send + Sync {
    /// Short name for log lines.
    fn name(&self) -> &'static str;

    fn service(&self) -> ServiceKind;

    /// List the service's resources in the given regions and return a
    /// finding per resource that matches the probe's filter predicate.
    /// Global probes ignore the region list.
    async fn run(
        &self,
        inventory: &dyn CloudInventory,
        regions: &[String],
    ) -> Result<Vec<Finding>, ScoutError>;
}

/// The full probe set, in no particular order — probes are independent and
/// the scanner does not rely on ordering.
pub fn default_probes() -> Vec<Box<dyn Probe>> {
    vec![
        Box::new(compute::ComputeProbe),
        Box::new(volumes::VolumeProbe),
        Box::new(addresses::AddressProbe),
        Box::new(nat::NatGatewayProbe),
        Box::new(cdn::CdnProbe),
        Box::new(tables::TableProbe),
        Box::new(buckets::BucketProbe),
        Box::new(databases::DatabaseProbe),
    ]
}
