use std::collections::{HashMap, HashSet};

use async_trait::async_trait;

use costscout::errors::ScoutError;
use costscout::models::{ScanResult, ServiceKind, Severity};
use costscout::providers::types::{
    BlockVolume, CdnDistribution, ComputeInstance, FloatingIp, NatGateway, ObjectBucket,
    RelationalInstance,
};
use costscout::providers::CloudInventory;
use costscout::scanner::Scanner;

/// In-memory account state, keyed by region where the service is regional.
/// Failures can be injected per service or per (service, region).
#[derive(Default)]
struct FakeInventory {
    instances: HashMap<String, Vec<ComputeInstance>>,
    volumes: HashMap<String, Vec<BlockVolume>>,
    addresses: HashMap<String, Vec<FloatingIp>>,
    gateways: HashMap<String, Vec<NatGateway>>,
    distributions: Vec<CdnDistribution>,
    tables: HashMap<String, Vec<String>>,
    replica_counts: HashMap<(String, String), usize>,
    broken_tables: HashSet<String>,
    buckets: Vec<ObjectBucket>,
    versioning: HashMap<String, Option<String>>,
    broken_buckets: HashSet<String>,
    databases: HashMap<String, Vec<RelationalInstance>>,
    fail_services: HashSet<ServiceKind>,
    fail_regions: HashSet<(ServiceKind, String)>,
}

impl FakeInventory {
    fn check(&self, service: ServiceKind, region: Option<&str>) -> Result<(), ScoutError> {
        if self.fail_services.contains(&service) {
            return Err(ScoutError::Provider("injected service failure".into()));
        }
        if let Some(region) = region {
            if self.fail_regions.contains(&(service, region.to_string())) {
                return Err(ScoutError::Provider("injected region failure".into()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CloudInventory for FakeInventory {
    async fn compute_instances(&self, region: &str) -> Result<Vec<ComputeInstance>, ScoutError> {
        self.check(ServiceKind::ComputeInstance, Some(region))?;
        Ok(self.instances.get(region).cloned().unwrap_or_default())
    }

    async fn block_volumes(&self, region: &str) -> Result<Vec<BlockVolume>, ScoutError> {
        self.check(ServiceKind::BlockVolume, Some(region))?;
        Ok(self.volumes.get(region).cloned().unwrap_or_default())
    }

    async fn floating_ips(&self, region: &str) -> Result<Vec<FloatingIp>, ScoutError> {
        self.check(ServiceKind::FloatingIp, Some(region))?;
        Ok(self.addresses.get(region).cloned().unwrap_or_default())
    }

    async fn nat_gateways(&self, region: &str) -> Result<Vec<NatGateway>, ScoutError> {
        self.check(ServiceKind::NatGateway, Some(region))?;
        Ok(self.gateways.get(region).cloned().unwrap_or_default())
    }

    async fn cdn_distributions(&self) -> Result<Vec<CdnDistribution>, ScoutError> {
        self.check(ServiceKind::CdnDistribution, None)?;
        Ok(self.distributions.clone())
    }

    async fn kv_tables(&self, region: &str) -> Result<Vec<String>, ScoutError> {
        self.check(ServiceKind::KvTable, Some(region))?;
        Ok(self.tables.get(region).cloned().unwrap_or_default())
    }

    async fn kv_table_replica_count(
        &self,
        region: &str,
        table: &str,
    ) -> Result<usize, ScoutError> {
        if self.broken_tables.contains(table) {
            return Err(ScoutError::Provider("injected describe failure".into()));
        }
        Ok(self
            .replica_counts
            .get(&(region.to_string(), table.to_string()))
            .copied()
            .unwrap_or(0))
    }

    async fn object_buckets(&self) -> Result<Vec<ObjectBucket>, ScoutError> {
        self.check(ServiceKind::ObjectBucket, None)?;
        Ok(self.buckets.clone())
    }

    async fn bucket_versioning(&self, bucket: &str) -> Result<Option<String>, ScoutError> {
        if self.broken_buckets.contains(bucket) {
            return Err(ScoutError::Provider("injected versioning failure".into()));
        }
        Ok(self.versioning.get(bucket).cloned().unwrap_or(None))
    }

    async fn relational_instances(
        &self,
        region: &str,
    ) -> Result<Vec<RelationalInstance>, ScoutError> {
        self.check(ServiceKind::RelationalInstance, Some(region))?;
        Ok(self.databases.get(region).cloned().unwrap_or_default())
    }
}

fn instance(id: &str, state: &str, class: Option<&str>) -> ComputeInstance {
    ComputeInstance {
        id: id.to_string(),
        name: None,
        state: state.to_string(),
        instance_class: class.map(String::from),
    }
}

fn volume(id: &str, state: &str, size_gb: i64, attachments: usize) -> BlockVolume {
    BlockVolume {
        id: id.to_string(),
        name: None,
        state: state.to_string(),
        size_gb,
        attachment_count: attachments,
    }
}

async fn scan(inventory: &FakeInventory, regions: &[&str]) -> ScanResult {
    Scanner::new()
        .run(inventory, Some(regions.iter().map(|r| r.to_string()).collect()))
        .await
}

/// Fully populated account: one matching resource per service, all in
/// us-east-1 where regional.
fn populated_inventory() -> FakeInventory {
    let region = "us-east-1".to_string();
    let mut fake = FakeInventory::default();
    fake.instances
        .insert(region.clone(), vec![instance("i-1", "running", Some("m5.large"))]);
    fake.volumes
        .insert(region.clone(), vec![volume("vol-1", "available", 100, 0)]);
    fake.addresses.insert(
        region.clone(),
        vec![FloatingIp {
            allocation_id: "eipalloc-1".into(),
            public_ip: "203.0.113.9".into(),
            instance_id: None,
            network_interface_id: None,
        }],
    );
    fake.gateways.insert(
        region.clone(),
        vec![NatGateway { id: "nat-1".into(), state: "available".into() }],
    );
    fake.distributions.push(CdnDistribution {
        id: "E1EXAMPLE".into(),
        domain_name: "d1.cloudfront.net".into(),
        aliases: vec![],
        enabled: true,
    });
    fake.tables.insert(region.clone(), vec!["orders".into()]);
    fake.replica_counts.insert((region.clone(), "orders".into()), 1);
    fake.buckets.push(ObjectBucket { name: "assets".into() });
    fake.versioning.insert("assets".into(), Some("Enabled".into()));
    fake.databases.insert(
        region,
        vec![RelationalInstance {
            id: "db-1".into(),
            status: "available".into(),
            instance_class: "db.t3.micro".into(),
            engine: Some("postgres".into()),
        }],
    );
    fake
}

#[tokio::test]
async fn running_m5_large_scenario() {
    let mut fake = FakeInventory::default();
    fake.instances.insert(
        "us-west-2".into(),
        vec![instance("i-0abc", "running", Some("m5.large"))],
    );

    let result = scan(&fake, &["us-west-2"]).await;
    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.service, ServiceKind::ComputeInstance);
    assert_eq!(finding.severity, Severity::Critical);
    assert_eq!(finding.region, "us-west-2");
    assert!((finding.estimated_hourly_cost - 0.192).abs() < 1e-9);
    assert!((finding.estimated_monthly_cost - 138.24).abs() < 1e-6);
}

#[tokio::test]
async fn non_running_instances_never_appear() {
    let mut fake = FakeInventory::default();
    fake.instances.insert(
        "us-east-1".into(),
        vec![
            instance("i-stopped", "stopped", Some("m5.large")),
            instance("i-pending", "pending", Some("m5.large")),
            instance("i-terminated", "terminated", None),
        ],
    );

    let result = scan(&fake, &["us-east-1"]).await;
    assert!(result.findings.is_empty());
}

#[tokio::test]
async fn unattached_volume_scenario() {
    let mut fake = FakeInventory::default();
    fake.volumes.insert(
        "us-east-1".into(),
        vec![
            volume("vol-idle", "available", 100, 0),
            // detaching: state already "available" but attachment still listed
            volume("vol-detaching", "available", 50, 1),
            volume("vol-used", "in-use", 200, 1),
        ],
    );

    let result = scan(&fake, &["us-east-1"]).await;
    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.resource_id, "vol-idle");
    assert_eq!(finding.severity, Severity::Warning);
    assert!((finding.estimated_monthly_cost - 10.0).abs() < 1e-9);
    assert!((finding.estimated_hourly_cost - 10.0 / 720.0).abs() < 1e-9);
}

#[tokio::test]
async fn floating_ip_scenario() {
    let mut fake = FakeInventory::default();
    fake.addresses.insert(
        "us-east-1".into(),
        vec![
            FloatingIp {
                allocation_id: "eipalloc-idle".into(),
                public_ip: "203.0.113.9".into(),
                instance_id: None,
                network_interface_id: None,
            },
            FloatingIp {
                allocation_id: "eipalloc-attached".into(),
                public_ip: "203.0.113.10".into(),
                instance_id: Some("i-1".into()),
                network_interface_id: None,
            },
            FloatingIp {
                allocation_id: "eipalloc-eni".into(),
                public_ip: "203.0.113.11".into(),
                instance_id: None,
                network_interface_id: Some("eni-1".into()),
            },
        ],
    );

    let result = scan(&fake, &["us-east-1"]).await;
    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.resource_id, "eipalloc-idle");
    assert_eq!(finding.severity, Severity::Warning);
    assert!((finding.estimated_monthly_cost - 3.65).abs() < 1e-9);
}

#[tokio::test]
async fn nat_gateway_filter() {
    let mut fake = FakeInventory::default();
    fake.gateways.insert(
        "us-east-1".into(),
        vec![
            NatGateway { id: "nat-live".into(), state: "available".into() },
            NatGateway { id: "nat-pending".into(), state: "pending".into() },
            NatGateway { id: "nat-gone".into(), state: "deleted".into() },
        ],
    );

    let result = scan(&fake, &["us-east-1"]).await;
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].resource_id, "nat-live");
    assert_eq!(result.findings[0].severity, Severity::Critical);
}

#[tokio::test]
async fn cdn_only_enabled_and_global_region() {
    let mut fake = FakeInventory::default();
    fake.distributions = vec![
        CdnDistribution {
            id: "E-ON".into(),
            domain_name: "on.cloudfront.net".into(),
            aliases: vec!["cdn.example.com".into()],
            enabled: true,
        },
        CdnDistribution {
            id: "E-OFF".into(),
            domain_name: "off.cloudfront.net".into(),
            aliases: vec![],
            enabled: false,
        },
    ];

    let result = scan(&fake, &["us-east-1"]).await;
    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.resource_id, "E-ON");
    assert_eq!(finding.region, "global");
    assert_eq!(finding.resource_name.as_deref(), Some("cdn.example.com"));
}

#[tokio::test]
async fn replicated_table_scenario() {
    let mut fake = FakeInventory::default();
    fake.tables
        .insert("us-east-1".into(), vec!["replicated".into(), "local-only".into()]);
    fake.replica_counts
        .insert(("us-east-1".into(), "replicated".into()), 1);
    // "local-only" has no replica entry: count 0, no finding

    let result = scan(&fake, &["us-east-1"]).await;
    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.resource_id, "replicated");
    assert_eq!(finding.severity, Severity::Warning);
    assert!((finding.estimated_monthly_cost - 50.0).abs() < 1e-9);
}

#[tokio::test]
async fn broken_table_describe_skips_only_that_table() {
    let mut fake = FakeInventory::default();
    fake.tables
        .insert("us-east-1".into(), vec!["broken".into(), "healthy".into()]);
    fake.broken_tables.insert("broken".into());
    fake.replica_counts
        .insert(("us-east-1".into(), "healthy".into()), 2);

    let result = scan(&fake, &["us-east-1"]).await;
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].resource_id, "healthy");
}

#[tokio::test]
async fn bucket_versioning_filter() {
    let mut fake = FakeInventory::default();
    fake.buckets = vec![
        ObjectBucket { name: "versioned".into() },
        ObjectBucket { name: "suspended".into() },
        ObjectBucket { name: "plain".into() },
    ];
    fake.versioning.insert("versioned".into(), Some("Enabled".into()));
    fake.versioning.insert("suspended".into(), Some("Suspended".into()));

    let result = scan(&fake, &["us-east-1"]).await;
    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.resource_id, "versioned");
    assert_eq!(finding.severity, Severity::Info);
    assert_eq!(finding.region, "global");
}

#[tokio::test]
async fn broken_bucket_versioning_skips_only_that_bucket() {
    let mut fake = FakeInventory::default();
    fake.buckets = vec![
        ObjectBucket { name: "broken".into() },
        ObjectBucket { name: "versioned".into() },
    ];
    fake.broken_buckets.insert("broken".into());
    fake.versioning.insert("versioned".into(), Some("Enabled".into()));

    let result = scan(&fake, &["us-east-1"]).await;
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].resource_id, "versioned");
}

#[tokio::test]
async fn database_filter_requires_available() {
    let mut fake = FakeInventory::default();
    fake.databases.insert(
        "us-east-1".into(),
        vec![
            RelationalInstance {
                id: "db-live".into(),
                status: "available".into(),
                instance_class: "db.t3.small".into(),
                engine: Some("mysql".into()),
            },
            RelationalInstance {
                id: "db-stopped".into(),
                status: "stopped".into(),
                instance_class: "db.t3.small".into(),
                engine: Some("mysql".into()),
            },
        ],
    );

    let result = scan(&fake, &["us-east-1"]).await;
    assert_eq!(result.findings.len(), 1);
    let finding = &result.findings[0];
    assert_eq!(finding.resource_id, "db-live");
    assert_eq!(finding.severity, Severity::Critical);
    assert!((finding.estimated_monthly_cost - 30.0).abs() < 1e-9);
}

#[tokio::test]
async fn empty_account_yields_zero_totals() {
    let fake = FakeInventory::default();
    let result = scan(&fake, &["us-east-1", "us-west-2"]).await;

    assert!(result.findings.is_empty());
    assert_eq!(result.total_estimated_monthly_cost, 0.0);
    assert_eq!(result.total_estimated_hourly_cost, 0.0);
    assert!(result.finished_at >= result.started_at);
}

#[tokio::test]
async fn one_failing_probe_does_not_block_the_rest() {
    let mut fake = populated_inventory();
    fake.fail_services.insert(ServiceKind::ComputeInstance);

    let result = scan(&fake, &["us-east-1"]).await;

    // 8 services populated, compute injected to fail
    assert_eq!(result.findings.len(), 7);
    assert!(!result
        .findings
        .iter()
        .any(|f| f.service == ServiceKind::ComputeInstance));
}

#[tokio::test]
async fn one_failing_region_does_not_block_other_regions() {
    let mut fake = FakeInventory::default();
    fake.instances.insert(
        "us-east-1".into(),
        vec![instance("i-east", "running", Some("t3.medium"))],
    );
    fake.instances.insert(
        "us-west-2".into(),
        vec![instance("i-west", "running", Some("t3.medium"))],
    );
    fake.fail_regions
        .insert((ServiceKind::ComputeInstance, "us-east-1".into()));

    let result = scan(&fake, &["us-east-1", "us-west-2"]).await;
    assert_eq!(result.findings.len(), 1);
    assert_eq!(result.findings[0].resource_id, "i-west");
}

#[tokio::test]
async fn totals_equal_sums_over_findings() {
    let fake = populated_inventory();
    let result = scan(&fake, &["us-east-1"]).await;

    assert_eq!(result.findings.len(), 8);
    let monthly: f64 = result.findings.iter().map(|f| f.estimated_monthly_cost).sum();
    let hourly: f64 = result.findings.iter().map(|f| f.estimated_hourly_cost).sum();
    assert!((result.total_estimated_monthly_cost - monthly).abs() < 1e-9);
    assert!((result.total_estimated_hourly_cost - hourly).abs() < 1e-9);
    assert!(result.findings.iter().all(|f| f.estimated_monthly_cost >= 0.0));
    assert!(result.findings.iter().all(|f| f.estimated_hourly_cost >= 0.0));
}

#[tokio::test]
async fn scan_is_idempotent_up_to_ordering() {
    let fake = populated_inventory();

    let mut first = scan(&fake, &["us-east-1"]).await.findings;
    let mut second = scan(&fake, &["us-east-1"]).await.findings;
    let key = |f: &costscout::models::Finding| (f.service.as_str(), f.resource_id.clone());
    first.sort_by_key(key);
    second.sort_by_key(key);

    let first_json = serde_json::to_value(&first).unwrap();
    let second_json = serde_json::to_value(&second).unwrap();
    assert_eq!(first_json, second_json);
}

#[tokio::test]
async fn default_regions_cover_the_standard_pair() {
    let mut fake = FakeInventory::default();
    fake.instances.insert(
        "us-east-1".into(),
        vec![instance("i-east", "running", Some("t3.micro"))],
    );
    fake.instances.insert(
        "us-west-2".into(),
        vec![instance("i-west", "running", Some("t3.micro"))],
    );
    fake.instances.insert(
        "eu-west-1".into(),
        vec![instance("i-eu", "running", Some("t3.micro"))],
    );

    let result = Scanner::new().run(&fake, None).await;
    let mut ids: Vec<_> = result.findings.iter().map(|f| f.resource_id.as_str()).collect();
    ids.sort_unstable();
    assert_eq!(ids, vec!["i-east", "i-west"]);
}
