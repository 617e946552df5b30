//! Locate → extract → classify for every configured method.
//!
//! All patterns are compiled once in [`Scanner::new`]; scanning itself cannot
//! fail. Methods missing from the source are skipped without a trace, and the
//! remaining ones keep their configured index.

use tracing::debug;

use crate::classify::classify;
use crate::config::ReportConfig;
use crate::error::ScanResult;
use crate::extract::BodyExtractor;
use crate::locate::DeclarationHeader;
use crate::report::{MethodReport, ScanReport};
use crate::source::SourceText;

/// Pre-compiled scanner bound to one configuration.
#[derive(Debug)]
pub struct Scanner<'c> {
    config: &'c ReportConfig,
    headers: Vec<DeclarationHeader>,
    extractor: BodyExtractor,
}

impl<'c> Scanner<'c> {
    pub fn new(config: &'c ReportConfig) -> ScanResult<Self> {
        let headers = config
            .methods
            .iter()
            .map(|spec| DeclarationHeader::for_method(spec, &config.declaration))
            .collect::<ScanResult<Vec<_>>>()?;
        let extractor = BodyExtractor::new(&config.declaration)?;

        Ok(Self {
            config,
            headers,
            extractor,
        })
    }

    /// Analyzes `source` against every configured method, in configured order.
    pub fn scan(&self, source: &SourceText) -> ScanReport {
        let text = source.as_str();
        let mut methods = Vec::with_capacity(self.headers.len());

        for (i, (spec, header)) in self.config.methods.iter().zip(&self.headers).enumerate() {
            let Some(span) = header.locate(text) else {
                continue;
            };

            let body = self.extractor.extract(text, span);
            let classification = classify(body.text, &self.config.markers);
            debug!(
                method = %spec.name,
                start = body.start,
                end = body.end,
                lines = classification.line_count,
                "located method"
            );

            methods.push(MethodReport {
                index: i + 1,
                name: spec.name.clone(),
                label: spec.label.clone(),
                start: body.start,
                end: body.end,
                classification,
            });
        }

        ScanReport {
            source: source.path().display().to_string(),
            configured: self.config.methods.len(),
            methods,
        }
    }
}
