//! Prelude module for convenient imports.
//!
//! ```rust,ignore
//! use methodscan_core::prelude::*;
//! ```

pub use crate::builder::MethodScan;
pub use crate::classify::{Classification, FallbackShape};
pub use crate::config::{load_config, MethodSpec, ParamList, ReportConfig};
pub use crate::error::{ScanError, ScanResult};
pub use crate::report::{render, MethodReport, ScanReport};
pub use crate::source::{load_source, SourceText};
