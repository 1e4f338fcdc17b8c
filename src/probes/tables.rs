use async_trait::async_trait;
use tracing::{debug, warn};

use crate::errors::ScoutError;
use crate::models::{Finding, ServiceKind};
use crate::pricing;
use crate::providers::CloudInventory;
use super::Probe;

/// Key-value tables with cross-region replicas. The per-table describe call
/// is independently fallible: a table whose describe fails is skipped
/// without aborting the rest of the enumeration.
pub struct TableProbe;

#[async_trait]
impl Probe for TableProbe {
    fn name(&self) -> &'static str {
        "kv-tables"
    }

    fn service(&self) -> ServiceKind {
        ServiceKind::KvTable
    }

    async fn run(
        &self,
        inventory: &dyn CloudInventory,
        regions: &[String],
    ) -> Result<Vec<Finding>, ScoutError> {
        let mut findings = Vec::new();
        for region in regions {
            let tables = match inventory.kv_tables(region).await {
                Ok(tables) => tables,
                Err(e) => {
                    warn!(probe = self.name(), region = %region, error = %e, "region listing failed, skipping");
                    continue;
                }
            };

            for table in tables {
                let replicas = match inventory.kv_table_replica_count(region, &table).await {
                    Ok(replicas) => replicas,
                    Err(e) => {
                        debug!(probe = self.name(), region = %region, table = %table, error = %e, "describe failed, skipping table");
                        continue;
                    }
                };
                if replicas > 0 {
                    findings.push(build_finding(region, &table, replicas));
                }
            }
        }
        Ok(findings)
    }
}

fn build_finding(region: &str, table: &str, replicas: usize) -> Finding {
    let price = pricing::kv_table();

    Finding {
        service: ServiceKind::KvTable,
        resource_id: table.to_string(),
        resource_name: Some(table.to_string()),
        region: region.to_string(),
        severity: ServiceKind::KvTable.severity(),
        title: format!("Replicated table {table}"),
        description: format!(
            "Table {table} in {region} has {replicas} cross-region replica(s); every replica re-bills the table's storage and writes.",
        ),
        suggestion: "Remove replicas in regions that no longer read the table.".to_string(),
        estimated_monthly_cost: price.monthly,
        estimated_hourly_cost: price.hourly,
        action_url: Some(format!(
            "https://{region}.console.aws.amazon.com/dynamodbv2/home?region={region}#table?name={table}"
        )),
    }
}
