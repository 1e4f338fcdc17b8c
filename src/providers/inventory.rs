use async_trait::async_trait;

use crate::errors::ScoutError;
use super::types::{
    BlockVolume, CdnDistribution, ComputeInstance, FloatingIp, NatGateway, ObjectBucket,
    RelationalInstance,
};

/// Read-only inventory of a cloud account.
///
/// This is the seam between the probes and the provider SDK: probes contain
/// the filter/price/severity rules and only ever call these list/describe
/// operations. The production implementation wraps the AWS SDK; tests supply
/// an in-memory fake.
#[async_trait]
pub trait CloudInventory: Send + Sync {
    async fn compute_instances(&self, region: &str) -> Result<Vec<ComputeInstance>, ScoutError>;

    async fn block_volumes(&self, region: &str) -> Result<Vec<BlockVolume>, ScoutError>;

    async fn floating_ips(&self, region: &str) -> Result<Vec<FloatingIp>, ScoutError>;

    async fn nat_gateways(&self, region: &str) -> Result<Vec<NatGateway>, ScoutError>;

    /// CDN distributions are account-global.
    async fn cdn_distributions(&self) -> Result<Vec<CdnDistribution>, ScoutError>;

    /// Table names in one region. Replica counts come from the separate,
    /// independently fallible describe call below.
    async fn kv_tables(&self, region: &str) -> Result<Vec<String>, ScoutError>;

    /// Cross-region replica count for one table.
    async fn kv_table_replica_count(&self, region: &str, table: &str)
        -> Result<usize, ScoutError>;

    /// The bucket list is account-global.
    async fn object_buckets(&self) -> Result<Vec<ObjectBucket>, ScoutError>;

    /// Versioning status string for one bucket ("Enabled", "Suspended"),
    /// `None` when versioning was never configured.
    async fn bucket_versioning(&self, bucket: &str) -> Result<Option<String>, ScoutError>;

    async fn relational_instances(&self, region: &str)
        -> Result<Vec<RelationalInstance>, ScoutError>;
}
