//! The aggregator: runs every probe and consolidates findings into one
//! `ScanResult`. This is the single scan implementation — the HTTP route and
//! the CLI are both thin adapters over it.

use chrono::Utc;
use futures::future::join_all;
use tracing::{info, warn};

use crate::models::ScanResult;
use crate::probes::{default_probes, Probe};
use crate::providers::CloudInventory;

/// Regions scanned when the caller does not name one.
pub const DEFAULT_REGIONS: [&str; 2] = ["us-east-1", "us-west-2"];

pub struct Scanner {
    probes: Vec<Box<dyn Probe>>,
}

impl Scanner {
    pub fn new() -> Self {
        Self { probes: default_probes() }
    }

    /// Mainly for tests that need a reduced or reordered probe set.
    pub fn with_probes(probes: Vec<Box<dyn Probe>>) -> Self {
        Self { probes }
    }

    /// Run every probe against the inventory and total the findings.
    ///
    /// Probes run concurrently; none depends on another's output and the
    /// findings are collected from the joined futures, so no shared
    /// accumulator is involved. A probe that returns an error is logged and
    /// contributes zero findings — the scan itself always completes.
    pub async fn run(
        &self,
        inventory: &dyn CloudInventory,
        regions: Option<Vec<String>>,
    ) -> ScanResult {
        let regions = regions.unwrap_or_else(|| {
            DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect()
        });
        let started_at = Utc::now();
        info!(regions = ?regions, probes = self.probes.len(), "starting scan");

        let runs = self.probes.iter().map(|probe| {
            let regions = &regions;
            async move {
                match probe.run(inventory, regions).await {
                    Ok(findings) => findings,
                    Err(e) => {
                        warn!(probe = probe.name(), error = %e, "probe failed, contributing no findings");
                        Vec::new()
                    }
                }
            }
        });

        let findings: Vec<_> = join_all(runs).await.into_iter().flatten().collect();
        let finished_at = Utc::now();
        info!(
            findings = findings.len(),
            elapsed_ms = (finished_at - started_at).num_milliseconds(),
            "scan finished"
        );

        ScanResult::new(findings, started_at, finished_at)
    }
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new()
    }
}
