use console::style;

use crate::models::{Finding, ScanResult, Severity};

fn severity_label(severity: Severity) -> console::StyledObject<&'static str> {
    match severity {
        Severity::Critical => style("CRITICAL").red().bold(),
        Severity::Warning => style("WARNING ").yellow(),
        Severity::Info => style("INFO    ").cyan(),
    }
}

/// Print a scan result to the terminal, severity-ranked with a cost footer.
pub fn print_scan_result(result: &ScanResult) {
    if result.findings.is_empty() {
        println!("{}", style("No cost findings — nothing idle or over-provisioned detected.").green());
        return;
    }

    let mut findings: Vec<&Finding> = result.findings.iter().collect();
    findings.sort_by(|a, b| {
        a.severity
            .rank()
            .cmp(&b.severity.rank())
            .then(b.estimated_monthly_cost.total_cmp(&a.estimated_monthly_cost))
    });

    for finding in findings {
        println!(
            "  {} {} [{}]  {}",
            severity_label(finding.severity),
            style(format!("${:>8.2}/mo", finding.estimated_monthly_cost)).bold(),
            finding.region,
            finding.title,
        );
        println!("           {}", style(&finding.suggestion).dim());
    }

    println!();
    println!(
        "  {} findings, estimated waste {} (${:.4}/hour)",
        result.total_findings(),
        style(format!("${:.2}/month", result.total_estimated_monthly_cost)).bold(),
        result.total_estimated_hourly_cost,
    );
}
