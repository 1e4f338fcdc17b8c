//! Domain descriptions of the provider resources the probes evaluate.
//!
//! These are deliberately flatter than the SDK response shapes: a probe only
//! needs the attributes its filter predicate and price lookup consume.

/// A virtual machine instance.
#[derive(Debug, Clone)]
pub struct ComputeInstance {
    pub id: String,
    /// Name tag value when present.
    pub name: Option<String>,
    /// Lifecycle state as reported by the provider ("running", "stopped", ...).
    pub state: String,
    /// Instance class ("m5.large"); absent on some malformed responses.
    pub instance_class: Option<String>,
}

/// A block storage volume.
#[derive(Debug, Clone)]
pub struct BlockVolume {
    pub id: String,
    pub name: Option<String>,
    /// Volume state ("available", "in-use", "deleting", ...).
    pub state: String,
    pub size_gb: i64,
    /// Number of current attachments. "available" with attachments still
    /// listed means detaching, not unattached.
    pub attachment_count: usize,
}

/// An allocated floating (elastic) IP address.
#[derive(Debug, Clone)]
pub struct FloatingIp {
    pub allocation_id: String,
    pub public_ip: String,
    pub instance_id: Option<String>,
    pub network_interface_id: Option<String>,
}

/// A managed NAT gateway.
#[derive(Debug, Clone)]
pub struct NatGateway {
    pub id: String,
    pub state: String,
}

/// A CDN distribution. Region-less.
#[derive(Debug, Clone)]
pub struct CdnDistribution {
    pub id: String,
    pub domain_name: String,
    pub aliases: Vec<String>,
    pub enabled: bool,
}

/// A versioned object storage bucket. Region-less at the list level.
#[derive(Debug, Clone)]
pub struct ObjectBucket {
    pub name: String,
}

/// A managed relational database instance.
#[derive(Debug, Clone)]
pub struct RelationalInstance {
    pub id: String,
    /// Instance status ("available", "stopped", ...).
    pub status: String,
    pub instance_class: String,
    pub engine: Option<String>,
}
