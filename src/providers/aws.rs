//! AWS SDK implementation of the inventory seam.
//!
//! Clients are constructed per (service, region) call from the scan's
//! credentials and dropped when the call returns; nothing is cached between
//! calls or across scans.

use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::Credentials;
use tracing::debug;

use crate::config::credentials::AwsCredentials;
use crate::errors::ScoutError;
use super::inventory::CloudInventory;
use super::types::{
    BlockVolume, CdnDistribution, ComputeInstance, FloatingIp, NatGateway, ObjectBucket,
    RelationalInstance,
};

/// Home region for the account-global services (CDN, object storage listing).
const GLOBAL_SERVICE_REGION: &str = "us-east-1";

pub struct AwsInventory {
    credentials: AwsCredentials,
}

impl AwsInventory {
    pub fn new(credentials: AwsCredentials) -> Self {
        Self { credentials }
    }

    async fn sdk_config(&self, region: &str) -> SdkConfig {
        aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(region.to_string()))
            .credentials_provider(Credentials::from_keys(
                self.credentials.access_key_id.clone(),
                self.credentials.secret_access_key.clone(),
                None,
            ))
            .load()
            .await
    }

    async fn ec2(&self, region: &str) -> aws_sdk_ec2::Client {
        aws_sdk_ec2::Client::new(&self.sdk_config(region).await)
    }
}

fn provider_err(e: impl std::fmt::Display) -> ScoutError {
    ScoutError::Provider(e.to_string())
}

fn name_tag(tags: &[aws_sdk_ec2::types::Tag]) -> Option<String> {
    tags.iter()
        .find(|t| t.key() == Some("Name"))
        .and_then(|t| t.value())
        .map(str::to_string)
}

#[async_trait]
impl CloudInventory for AwsInventory {
    async fn compute_instances(&self, region: &str) -> Result<Vec<ComputeInstance>, ScoutError> {
        let resp = self
            .ec2(region)
            .await
            .describe_instances()
            .send()
            .await
            .map_err(provider_err)?;

        let mut instances = Vec::new();
        for reservation in resp.reservations() {
            for instance in reservation.instances() {
                let Some(id) = instance.instance_id() else { continue };
                instances.push(ComputeInstance {
                    id: id.to_string(),
                    name: name_tag(instance.tags()),
                    state: instance
                        .state()
                        .and_then(|s| s.name())
                        .map(|n| n.as_str().to_string())
                        .unwrap_or_default(),
                    instance_class: instance.instance_type().map(|t| t.as_str().to_string()),
                });
            }
        }
        debug!(region, count = instances.len(), "listed compute instances");
        Ok(instances)
    }

    async fn block_volumes(&self, region: &str) -> Result<Vec<BlockVolume>, ScoutError> {
        let resp = self
            .ec2(region)
            .await
            .describe_volumes()
            .send()
            .await
            .map_err(provider_err)?;

        let volumes = resp
            .volumes()
            .iter()
            .filter_map(|v| {
                let id = v.volume_id()?;
                Some(BlockVolume {
                    id: id.to_string(),
                    name: name_tag(v.tags()),
                    state: v.state().map(|s| s.as_str().to_string()).unwrap_or_default(),
                    size_gb: i64::from(v.size().unwrap_or(0)),
                    attachment_count: v.attachments().len(),
                })
            })
            .collect();
        Ok(volumes)
    }

    async fn floating_ips(&self, region: &str) -> Result<Vec<FloatingIp>, ScoutError> {
        let resp = self
            .ec2(region)
            .await
            .describe_addresses()
            .send()
            .await
            .map_err(provider_err)?;

        let addresses = resp
            .addresses()
            .iter()
            .map(|a| FloatingIp {
                allocation_id: a
                    .allocation_id()
                    .or(a.public_ip())
                    .unwrap_or_default()
                    .to_string(),
                public_ip: a.public_ip().unwrap_or_default().to_string(),
                instance_id: a.instance_id().map(str::to_string),
                network_interface_id: a.network_interface_id().map(str::to_string),
            })
            .collect();
        Ok(addresses)
    }

    async fn nat_gateways(&self, region: &str) -> Result<Vec<NatGateway>, ScoutError> {
        let resp = self
            .ec2(region)
            .await
            .describe_nat_gateways()
            .send()
            .await
            .map_err(provider_err)?;

        let gateways = resp
            .nat_gateways()
            .iter()
            .filter_map(|n| {
                let id = n.nat_gateway_id()?;
                Some(NatGateway {
                    id: id.to_string(),
                    state: n.state().map(|s| s.as_str().to_string()).unwrap_or_default(),
                })
            })
            .collect();
        Ok(gateways)
    }

    async fn cdn_distributions(&self) -> Result<Vec<CdnDistribution>, ScoutError> {
        let config = self.sdk_config(GLOBAL_SERVICE_REGION).await;
        let client = aws_sdk_cloudfront::Client::new(&config);
        let resp = client.list_distributions().send().await.map_err(provider_err)?;

        let mut distributions = Vec::new();
        if let Some(list) = resp.distribution_list() {
            for summary in list.items() {
                distributions.push(CdnDistribution {
                    id: summary.id().to_string(),
                    domain_name: summary.domain_name().to_string(),
                    aliases: summary
                        .aliases()
                        .map(|a| a.items().to_vec())
                        .unwrap_or_default(),
                    enabled: summary.enabled(),
                });
            }
        }
        Ok(distributions)
    }

    async fn kv_tables(&self, region: &str) -> Result<Vec<String>, ScoutError> {
        let config = self.sdk_config(region).await;
        let client = aws_sdk_dynamodb::Client::new(&config);
        let resp = client.list_tables().send().await.map_err(provider_err)?;
        Ok(resp.table_names().to_vec())
    }

    async fn kv_table_replica_count(
        &self,
        region: &str,
        table: &str,
    ) -> Result<usize, ScoutError> {
        let config = self.sdk_config(region).await;
        let client = aws_sdk_dynamodb::Client::new(&config);
        let resp = client
            .describe_table()
            .table_name(table)
            .send()
            .await
            .map_err(provider_err)?;
        Ok(resp.table().map(|t| t.replicas().len()).unwrap_or(0))
    }

    async fn object_buckets(&self) -> Result<Vec<ObjectBucket>, ScoutError> {
        let config = self.sdk_config(GLOBAL_SERVICE_REGION).await;
        let client = aws_sdk_s3::Client::new(&config);
        let resp = client.list_buckets().send().await.map_err(provider_err)?;

        let buckets = resp
            .buckets()
            .iter()
            .filter_map(|b| b.name())
            .map(|name| ObjectBucket { name: name.to_string() })
            .collect();
        Ok(buckets)
    }

    async fn bucket_versioning(&self, bucket: &str) -> Result<Option<String>, ScoutError> {
        let config = self.sdk_config(GLOBAL_SERVICE_REGION).await;
        let client = aws_sdk_s3::Client::new(&config);
        let resp = client
            .get_bucket_versioning()
            .bucket(bucket)
            .send()
            .await
            .map_err(provider_err)?;
        Ok(resp.status().map(|s| s.as_str().to_string()))
    }

    async fn relational_instances(
        &self,
        region: &str,
    ) -> Result<Vec<RelationalInstance>, ScoutError> {
        let config = self.sdk_config(region).await;
        let client = aws_sdk_rds::Client::new(&config);
        let resp = client
            .describe_db_instances()
            .send()
            .await
            .map_err(provider_err)?;

        let instances = resp
            .db_instances()
            .iter()
            .filter_map(|d| {
                let id = d.db_instance_identifier()?;
                Some(RelationalInstance {
                    id: id.to_string(),
                    status: d.db_instance_status().unwrap_or_default().to_string(),
                    instance_class: d.db_instance_class().unwrap_or_default().to_string(),
                    engine: d.engine().map(str::to_string),
                })
            })
            .collect();
        Ok(instances)
    }
}
