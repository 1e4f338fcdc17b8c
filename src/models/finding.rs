use serde::{Deserialize, Serialize};

/// Severity tier for a cost finding, ordered from most to least urgent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Billed continuously at a high hourly rate while it exists.
    Critical,
    /// Idle but still billed (unattached storage, unused IP, enabled CDN).
    Warning,
    /// Configuration-driven incremental cost.
    Info,
}

impl Severity {
    /// Returns a numeric rank where lower values indicate higher severity.
    /// Critical = 0, Warning = 1, Info = 2.
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Critical => 0,
            Severity::Warning => 1,
            Severity::Info => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "critical",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The category of AWS resource a finding refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceKind {
    ComputeInstance,
    BlockVolume,
    FloatingIp,
    NatGateway,
    CdnDistribution,
    KvTable,
    ObjectBucket,
    RelationalInstance,
}

impl ServiceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ComputeInstance => "compute-instance",
            Self::BlockVolume => "block-volume",
            Self::FloatingIp => "floating-ip",
            Self::NatGateway => "nat-gateway",
            Self::CdnDistribution => "cdn-distribution",
            Self::KvTable => "kv-table",
            Self::ObjectBucket => "object-bucket",
            Self::RelationalInstance => "relational-instance",
        }
    }

    /// Severity is a fixed property of the service category, never of the
    /// estimated cost. A $3.65/month idle IP stays a warning; a running
    /// database is critical regardless of its class.
    pub fn severity(&self) -> Severity {
        match self {
            Self::ComputeInstance | Self::NatGateway | Self::RelationalInstance => {
                Severity::Critical
            }
            Self::BlockVolume | Self::FloatingIp | Self::CdnDistribution | Self::KvTable => {
                Severity::Warning
            }
            Self::ObjectBucket => Severity::Info,
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single cost-relevant resource detected by a probe.
///
/// Findings are pure functions of the provider API response and the static
/// pricing table; scanning unchanged account state twice yields the same
/// findings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub service: ServiceKind,
    /// Provider-assigned identifier; unique within a service, not across.
    pub resource_id: String,
    /// Human label when the provider exposes one (e.g. a Name tag).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_name: Option<String>,
    /// `"global"` for region-less services (CDN, object storage).
    pub region: String,
    pub severity: Severity,
    pub title: String,
    pub description: String,
    pub suggestion: String,
    pub estimated_monthly_cost: f64,
    pub estimated_hourly_cost: f64,
    /// Deep link into the provider console view for this resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_url: Option<String>,
}
