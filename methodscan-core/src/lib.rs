//! methodscan-core: lexical method-body scanner and marker classifier.
//!
//! Given one source file and a list of method names, this library finds each
//! method's declaration header, cuts out its body with a "next sibling
//! declaration, else end of text" rule, and classifies that body by a few
//! literal markers (error handling, logging, failure-path return shape).
//!
//! Nothing here parses the source language. Bodies are bounded lexically and
//! classification is substring containment, so results are exactly as good as
//! the declaration heuristic on the given text.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use methodscan_core::prelude::*;
//!
//! let report = MethodScan::new("BluetoothManager.kt").analyze()?;
//! for m in &report.methods {
//!     println!("{}: {} lines", m.label, m.classification.line_count);
//! }
//! ```
//!
//! # Module Organization
//!
//! - [`source`]: Text loading
//! - [`locate`]: Declaration header matching
//! - [`extract`]: Body extraction
//! - [`classify`]: Marker predicates
//! - [`scanner`]: Pre-compiled locate → extract → classify pipeline
//! - [`report`]: Plain-text and JSON rendering
//! - [`config`]: Built-in defaults and `methodscan.toml`
//! - [`builder`]: Fluent builder API
//! - [`error`]: Typed error handling

pub mod builder;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod locate;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod scanner;
pub mod source;

// Error types
pub use error::{IoResultExt, ScanError, ScanResult};

// Builder API
pub use builder::MethodScan;

// Configuration
pub use config::{
    load_config, load_config_file, DeclarationSyntax, Markers, MethodSpec, ParamList,
    PriorityNote, ReportConfig, CONFIG_FILE_NAME, DEFAULT_SOURCE_PATH,
};

// Pipeline stages
pub use classify::{
    classify, fallback_shape, has_error_handling, has_logging, line_count, Classification,
    FallbackShape,
};
pub use extract::{extract_body, BodyExtractor, ExtractedBody};
pub use locate::{locate, DeclarationHeader, Span};
pub use scanner::Scanner;
pub use source::{load_source, SourceText};

// Logging
pub use logging::{init_structured_logging, log_config_fallback, log_error, log_warn};

// Reporting
pub use report::{print_json, print_plain, render, render_plain, MethodReport, ScanReport};
