use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::finding::{Finding, Severity};

/// The consolidated output of one scan invocation.
///
/// Built fresh per scan and discarded with the response; nothing is
/// persisted and there is no identity across scans.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResult {
    pub findings: Vec<Finding>,
    pub total_estimated_monthly_cost: f64,
    pub total_estimated_hourly_cost: f64,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl ScanResult {
    /// Builds the result and derives both totals from the findings. Totals
    /// are sums over every finding — the hourly total is not restricted to
    /// hourly-billed services.
    pub fn new(findings: Vec<Finding>, started_at: DateTime<Utc>, finished_at: DateTime<Utc>) -> Self {
        let total_estimated_monthly_cost =
            findings.iter().map(|f| f.estimated_monthly_cost).sum();
        let total_estimated_hourly_cost =
            findings.iter().map(|f| f.estimated_hourly_cost).sum();
        Self {
            findings,
            total_estimated_monthly_cost,
            total_estimated_hourly_cost,
            started_at,
            finished_at,
        }
    }

    /// Returns a map of severity level to the count of findings at that severity.
    pub fn finding_counts(&self) -> HashMap<Severity, usize> {
        let mut counts = HashMap::new();
        for finding in &self.findings {
            *counts.entry(finding.severity).or_insert(0) += 1;
        }
        counts
    }

    pub fn total_findings(&self) -> usize {
        self.findings.len()
    }
}
