//! Builder pattern API for methodscan.
//!
//! ```rust,ignore
//! use methodscan_core::prelude::*;
//!
//! let report = MethodScan::new("app/src/main/java/Manager.kt")
//!     .with_config(ReportConfig::default())
//!     .analyze()?;
//!
//! println!("{} of {} methods found", report.found(), report.configured);
//! ```

use std::path::{Path, PathBuf};

use crate::config::ReportConfig;
use crate::error::{ScanError, ScanResult};
use crate::report::{render_plain, ScanReport};
use crate::scanner::Scanner;
use crate::source::load_source;

/// Builder for configuring and running a scan of one file.
#[derive(Debug, Clone)]
pub struct MethodScan {
    /// File to analyze
    path: PathBuf,

    /// Methods, markers and report text
    config: ReportConfig,
}

impl MethodScan {
    /// Creates a scan of `path` with the built-in configuration.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            config: ReportConfig::default(),
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ReportConfig) -> Self {
        self.config = config;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Reads the file and analyzes every configured method.
    ///
    /// Fails only if the file cannot be read or the configuration is unusable.
    pub fn analyze(&self) -> ScanResult<ScanReport> {
        if self.path.as_os_str().is_empty() {
            return Err(ScanError::invalid_argument("source path is empty"));
        }

        let source = load_source(&self.path)?;
        let scanner = Scanner::new(&self.config)?;
        Ok(scanner.scan(&source))
    }

    /// Runs [`analyze`](Self::analyze) and renders the plain-text report.
    pub fn render(&self) -> ScanResult<String> {
        let report = self.analyze()?;
        Ok(render_plain(&report, &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MethodSpec, ParamList};

    #[test]
    fn test_builder_defaults() {
        let scan = MethodScan::new("Manager.kt");
        assert_eq!(scan.path(), Path::new("Manager.kt"));
        assert_eq!(scan.config(), &ReportConfig::default());
    }

    #[test]
    fn test_with_config() {
        let cfg = ReportConfig {
            methods: vec![MethodSpec::new("load", "Load", ParamList::Any)],
            ..ReportConfig::default()
        };
        let scan = MethodScan::new("Manager.kt").with_config(cfg.clone());
        assert_eq!(scan.config(), &cfg);
    }

    #[test]
    fn test_empty_path_rejected() {
        let err = MethodScan::new("").analyze().unwrap_err();
        assert!(matches!(err, ScanError::InvalidArgument { .. }));
    }

    #[test]
    fn test_unreadable_file_is_fatal() {
        let err = MethodScan::new("/nonexistent/Manager.kt").render().unwrap_err();
        assert!(matches!(err, ScanError::Io { .. }));
        assert!(!err.is_recoverable());
    }
}
