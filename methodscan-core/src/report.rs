//! Output formatting - plaintext and JSON.

use serde::Serialize;
use serde_json::json;

use crate::classify::Classification;
use crate::config::ReportConfig;
use crate::error::ScanResult;
use crate::scanner::Scanner;
use crate::source::SourceText;

/// Analysis of one method that was found in the source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MethodReport {
    /// 1-based position in the configured method list.
    pub index: usize,
    pub name: String,
    pub label: String,
    /// Byte range of the extracted body.
    pub start: usize,
    pub end: usize,
    #[serde(flatten)]
    pub classification: Classification,
}

/// Everything found in one source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScanReport {
    pub source: String,
    /// Number of configured methods, found or not.
    pub configured: usize,
    pub methods: Vec<MethodReport>,
}

impl ScanReport {
    pub fn found(&self) -> usize {
        self.methods.len()
    }
}

/// Formats one method section, including its trailing blank line.
fn method_block(m: &MethodReport) -> String {
    let c = &m.classification;
    let mut block = format!(
        "Method {}: {}\n  - Implementation: {} lines\n",
        m.index, m.label, c.line_count
    );

    block.push_str(if c.has_error_handling {
        "  - Error handling: Yes (try-catch)\n"
    } else {
        "  - Error handling: No\n"
    });
    block.push_str(if c.has_logging {
        "  - Logging: Yes\n"
    } else {
        "  - Logging: No\n"
    });
    if let Some(fallback) = c.fallback.description() {
        block.push_str(&format!("  - Fallback: {}\n", fallback));
    }

    block.push('\n');
    block
}

/// Renders the full plain-text report: title, one section per found method,
/// then the static priority note.
pub fn render_plain(report: &ScanReport, config: &ReportConfig) -> String {
    let mut out = String::new();

    if !config.title.is_empty() {
        out.push_str(&config.title);
        out.push_str("\n\n");
    }

    for m in &report.methods {
        out.push_str(&method_block(m));
    }

    out.push_str(&config.priority.header);
    out.push('\n');
    out.push_str(&config.priority.body);
    out.push('\n');
    out
}

/// Scans `source` and renders the plain-text report for it.
pub fn render(source: &SourceText, config: &ReportConfig) -> ScanResult<String> {
    let report = Scanner::new(config)?.scan(source);
    Ok(render_plain(&report, config))
}

/// Prints the plain-text report to stdout.
pub fn print_plain(report: &ScanReport, config: &ReportConfig) {
    print!("{}", render_plain(report, config));
}

/// Prints the report in JSON format.
///
/// Falls back to a minimal object if serialization fails.
pub fn print_json(report: &ScanReport) {
    match serde_json::to_string_pretty(report) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("[WARN] JSON serialization failed: {}", e);
            println!(
                "{}",
                json!({ "source": report.source, "configured": report.configured, "found": report.found() })
            );
        }
    }
}
