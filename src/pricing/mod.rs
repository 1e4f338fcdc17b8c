//! Static pricing heuristics.
//!
//! Every number here is a coarse on-demand approximation, not a pricing API
//! client. The contract is the tiering logic: which attributes select which
//! rate, and which fallback applies when an attribute is missing.

/// Hours in the billing month used to convert between rates (24 * 30).
pub const HOURS_PER_MONTH: f64 = 720.0;

/// An estimated price for one resource, in USD.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Price {
    pub hourly: f64,
    pub monthly: f64,
}

impl Price {
    /// Rate sourced hourly; monthly extrapolated.
    pub fn from_hourly(hourly: f64) -> Self {
        Self { hourly, monthly: hourly * HOURS_PER_MONTH }
    }

    /// Rate sourced monthly; hourly back-computed.
    pub fn from_monthly(monthly: f64) -> Self {
        Self { hourly: monthly / HOURS_PER_MONTH, monthly }
    }
}

/// Hourly rate when the instance reports a class we have no entry for.
const UNKNOWN_INSTANCE_CLASS_HOURLY: f64 = 0.10;
/// Hourly rate when the instance reports no class at all. Must stay distinct
/// from the unknown-class rate: "no type reported" and "unrecognized type"
/// are different cases.
const MISSING_INSTANCE_CLASS_HOURLY: f64 = 0.05;

const VOLUME_GB_MONTHLY: f64 = 0.10;
const FLOATING_IP_MONTHLY: f64 = 3.65;
const NAT_GATEWAY_HOURLY: f64 = 0.045;
const CDN_DISTRIBUTION_MONTHLY: f64 = 5.0;
const KV_TABLE_REPLICATED_MONTHLY: f64 = 50.0;
const VERSIONED_BUCKET_MONTHLY: f64 = 5.0;

const RELATIONAL_MICRO_MONTHLY: f64 = 15.0;
const RELATIONAL_SMALL_MONTHLY: f64 = 30.0;
const RELATIONAL_LARGE_MONTHLY: f64 = 120.0;

fn instance_class_hourly(class: &str) -> Option<f64> {
    let rate = match class {
        "t2.micro" => 0.0116,
        "t2.small" => 0.023,
        "t2.medium" => 0.0464,
        "t3.micro" => 0.0104,
        "t3.small" => 0.0208,
        "t3.medium" => 0.0416,
        "t3.large" => 0.0832,
        "m5.large" => 0.192,
        "m5.xlarge" => 0.384,
        "m5.2xlarge" => 0.768,
        "c5.large" => 0.17,
        "c5.xlarge" => 0.34,
        "r5.large" => 0.252,
        "r5.xlarge" => 0.504,
        _ => return None,
    };
    Some(rate)
}

/// Hourly-billed compute instance. `None` means the provider reported no
/// instance class.
pub fn compute_instance(class: Option<&str>) -> Price {
    let hourly = match class {
        Some(class) => instance_class_hourly(class).unwrap_or(UNKNOWN_INSTANCE_CLASS_HOURLY),
        None => MISSING_INSTANCE_CLASS_HOURLY,
    };
    Price::from_hourly(hourly)
}

/// Block storage billed per GB-month.
pub fn block_volume(size_gb: i64) -> Price {
    Price::from_monthly(size_gb.max(0) as f64 * VOLUME_GB_MONTHLY)
}

/// Idle floating IP, flat monthly.
pub fn floating_ip() -> Price {
    Price::from_monthly(FLOATING_IP_MONTHLY)
}

/// NAT gateway, billed hourly while available. Data processing charges are
/// not modeled.
pub fn nat_gateway() -> Price {
    Price::from_hourly(NAT_GATEWAY_HOURLY)
}

/// Enabled CDN distribution, flat monthly. Real cost depends on traffic,
/// which is not queried.
pub fn cdn_distribution() -> Price {
    Price::from_monthly(CDN_DISTRIBUTION_MONTHLY)
}

/// Key-value table with at least one cross-region replica, flat monthly
/// regardless of replica count.
pub fn kv_table() -> Price {
    Price::from_monthly(KV_TABLE_REPLICATED_MONTHLY)
}

/// Bucket with versioning enabled, flat monthly regardless of object count.
pub fn versioned_bucket() -> Price {
    Price::from_monthly(VERSIONED_BUCKET_MONTHLY)
}

/// Relational instance, three flat monthly tiers by class-name substring.
pub fn relational_instance(class: &str) -> Price {
    let monthly = if class.contains("micro") {
        RELATIONAL_MICRO_MONTHLY
    } else if class.contains("small") {
        RELATIONAL_SMALL_MONTHLY
    } else {
        RELATIONAL_LARGE_MONTHLY
    };
    Price::from_monthly(monthly)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn m5_large_rate() {
        let price = compute_instance(Some("m5.large"));
        assert!((price.hourly - 0.192).abs() < 1e-9);
        assert!((price.monthly - 138.24).abs() < 1e-6);
    }

    #[test]
    fn unknown_class_differs_from_missing_class() {
        let unknown = compute_instance(Some("x9.mega"));
        let missing = compute_instance(None);
        assert!((unknown.hourly - 0.10).abs() < 1e-9);
        assert!((missing.hourly - 0.05).abs() < 1e-9);
        assert!(unknown.hourly > missing.hourly);
    }

    #[test]
    fn volume_scales_with_size() {
        assert!((block_volume(100).monthly - 10.0).abs() < 1e-9);
        assert_eq!(block_volume(0).monthly, 0.0);
        // negative size from a malformed response prices as zero
        assert_eq!(block_volume(-5).monthly, 0.0);
    }

    #[test]
    fn floating_ip_flat_rate() {
        let price = floating_ip();
        assert!((price.monthly - 3.65).abs() < 1e-9);
        assert!((price.hourly - 3.65 / HOURS_PER_MONTH).abs() < 1e-9);
    }

    #[test]
    fn monthly_rates_back_compute_hourly() {
        for price in [cdn_distribution(), kv_table(), versioned_bucket()] {
            assert!((price.hourly - price.monthly / HOURS_PER_MONTH).abs() < 1e-9);
        }
    }

    #[test]
    fn relational_tiers_by_substring() {
        assert!((relational_instance("db.t3.micro").monthly - 15.0).abs() < 1e-9);
        assert!((relational_instance("db.t3.small").monthly - 30.0).abs() < 1e-9);
        assert!((relational_instance("db.r5.4xlarge").monthly - 120.0).abs() < 1e-9);
    }
}
