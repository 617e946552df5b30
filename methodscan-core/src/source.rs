//! Text loading: the single file a report is built from.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IoResultExt, ScanResult};

/// Full contents of one source file. Read once, never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    path: PathBuf,
    text: String,
}

impl SourceText {
    /// Wraps in-memory text, e.g. for tests or stdin-like callers.
    pub fn from_string(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Reads the whole file at `path`.
///
/// Any failure here is fatal for the run; callers must not produce a partial report.
pub fn load_source(path: &Path) -> ScanResult<SourceText> {
    let text = fs::read_to_string(path).with_path(path)?;
    debug!(path = %path.display(), bytes = text.len(), "loaded source");
    Ok(SourceText {
        path: path.to_path_buf(),
        text,
    })
}
