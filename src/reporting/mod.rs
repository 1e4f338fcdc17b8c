pub mod console;
pub mod formatter;

pub use formatter::{format_executive_summary, format_finding_markdown, format_report_markdown};
