//! methodscan CLI - report which configured methods a source file defines,
//! and how each one handles failure.
//!
//! Features:
//! - Built-in configuration for the Bluetooth codec-detection methods
//! - Optional `methodscan.toml` overrides (methods, keywords, markers, note)
//! - Plain-text report or `--json`

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};

use methodscan_core::{
    init_structured_logging, load_config, load_config_file, log_config_fallback, log_error,
    log_warn, print_json, print_plain, MethodScan, ReportConfig, DEFAULT_SOURCE_PATH,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Lexical method-body scanner and failure-path reporter")]
pub struct Cli {
    /// Source file to analyze
    #[arg(default_value = DEFAULT_SOURCE_PATH)]
    path: PathBuf,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,

    /// Config file to use instead of ./methodscan.toml
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

/// Picks the configuration for this run.
///
/// An explicit `--config` must load. A `methodscan.toml` in `cwd` that fails to
/// parse or validate is reported and replaced by the built-in configuration.
fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<ReportConfig> {
    if let Some(path) = explicit {
        return load_config_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()));
    }

    match load_config(cwd) {
        Ok(Some(cfg)) => Ok(cfg),
        Ok(None) => Ok(ReportConfig::default()),
        Err(e) if e.is_recoverable() => {
            let path = e.path().cloned().unwrap_or_else(|| cwd.to_path_buf());
            log_config_fallback(&path, &e.to_string());
            Ok(ReportConfig::default())
        }
        Err(e) => Err(e.into()),
    }
}

fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] methodscan internal error: {}", info);
        eprintln!("[PANIC] The process will exit with code 101.");
    }));

    // JSON logs to stderr, stdout carries only the report
    init_structured_logging();

    let cli = Cli::parse();

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let config = resolve_config(cli.config.as_deref(), &cwd)?;
    if config.methods.is_empty() {
        log_warn("no methods configured; the report will only contain the priority note");
    }

    let scan = MethodScan::new(&cli.path).with_config(config);
    let report = match scan.analyze() {
        Ok(report) => report,
        Err(e) => {
            log_error(&e.to_string());
            return Err(e).with_context(|| format!("Failed to analyze {}", cli.path.display()));
        }
    };

    if cli.json {
        print_json(&report);
    } else {
        print_plain(&report, scan.config());
    }

    Ok(())
}
