use crate::models::{Finding, ScanResult, Severity};

pub fn format_finding_markdown(finding: &Finding) -> String {
    let mut out = format!(
        "### {}\n\n**Severity:** {}\n**Service:** {}\n**Region:** {}\n**Estimated cost:** ${:.2}/month (${:.4}/hour)\n\n{}\n\n**Suggestion:** {}\n",
        finding.title,
        finding.severity,
        finding.service,
        finding.region,
        finding.estimated_monthly_cost,
        finding.estimated_hourly_cost,
        finding.description,
        finding.suggestion,
    );
    if let Some(url) = &finding.action_url {
        out.push_str(&format!("\n[Open in console]({url})\n"));
    }
    out
}

pub fn format_executive_summary(result: &ScanResult) -> String {
    let counts = result.finding_counts();
    let critical = counts.get(&Severity::Critical).copied().unwrap_or(0);
    let warning = counts.get(&Severity::Warning).copied().unwrap_or(0);
    let info = counts.get(&Severity::Info).copied().unwrap_or(0);

    format!(
        "## Executive Summary\n\n| Severity | Count |\n|---|---|\n| Critical | {} |\n| Warning | {} |\n| Info | {} |\n| **Total** | **{}** |\n\nEstimated waste: **${:.2}/month** (${:.4}/hour)\n",
        critical,
        warning,
        info,
        result.total_findings(),
        result.total_estimated_monthly_cost,
        result.total_estimated_hourly_cost,
    )
}

/// Full markdown report: summary first, then findings grouped by severity
/// rank. Grouping happens here, at presentation time — the scan result
/// itself preserves probe output order.
pub fn format_report_markdown(result: &ScanResult) -> String {
    let mut report = String::from("# Cost Findings\n\n");
    report.push_str(&format_executive_summary(result));

    let mut findings: Vec<&Finding> = result.findings.iter().collect();
    findings.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then(b.estimated_monthly_cost.total_cmp(&a.estimated_monthly_cost))
    });

    for finding in findings {
        report.push('\n');
        report.push_str(&format_finding_markdown(finding));
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ServiceKind;
    use chrono::Utc;

    fn sample_finding() -> Finding {
        Finding {
            service: ServiceKind::FloatingIp,
            resource_id: "eipalloc-1".into(),
            resource_name: Some("203.0.113.9".into()),
            region: "us-east-1".into(),
            severity: Severity::Warning,
            title: "Unassociated floating IP 203.0.113.9".into(),
            description: "idle".into(),
            suggestion: "release it".into(),
            estimated_monthly_cost: 3.65,
            estimated_hourly_cost: 3.65 / 720.0,
            action_url: Some("https://example.com".into()),
        }
    }

    #[test]
    fn summary_counts_and_totals() {
        let now = Utc::now();
        let result = ScanResult::new(vec![sample_finding()], now, now);
        let summary = format_executive_summary(&result);
        assert!(summary.contains("| Warning | 1 |"));
        assert!(summary.contains("$3.65/month"));
    }

    #[test]
    fn finding_section_includes_action_url() {
        let md = format_finding_markdown(&sample_finding());
        assert!(md.contains("### Unassociated floating IP"));
        assert!(md.contains("[Open in console](https://example.com)"));
    }
}
