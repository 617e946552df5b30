//! Report configuration: built-in defaults plus optional `methodscan.toml`.
//!
//! The configuration is constructed once and then only borrowed. Nothing in
//! the scanner mutates it.

use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;

use crate::error::{IoResultExt, ScanError, ScanResult};

/// Name of the optional config file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "methodscan.toml";

/// Source file analyzed when no path is given.
pub const DEFAULT_SOURCE_PATH: &str = "app/src/main/java/com/bluetoothcodec/checker/BluetoothManager.kt";

/// Whether a declaration header must close its parameter list immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamList {
    /// Header must read `name()`.
    Empty,
    /// Header only needs `name(`.
    #[default]
    Any,
}

/// One function the scanner is told to look for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodSpec {
    /// Function name, matched literally.
    pub name: String,
    /// Human-readable label printed in the report.
    pub label: String,
    #[serde(default)]
    pub params: ParamList,
}

impl MethodSpec {
    pub fn new(name: impl Into<String>, label: impl Into<String>, params: ParamList) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            params,
        }
    }
}

/// Keywords that introduce a function declaration, e.g. `private fun`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeclarationSyntax {
    pub visibility: String,
    pub keyword: String,
}

impl Default for DeclarationSyntax {
    fn default() -> Self {
        Self {
            visibility: "private".to_string(),
            keyword: "fun".to_string(),
        }
    }
}

/// Literal substrings the classifier looks for inside a body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub error_handling: String,
    pub logging: String,
    pub null_return: String,
    pub string_return: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            error_handling: "try {".to_string(),
            logging: "android.util.Log".to_string(),
            null_return: "return null".to_string(),
            string_return: "return \"".to_string(),
        }
    }
}

/// The static note printed after all method sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PriorityNote {
    pub header: String,
    pub body: String,
}

impl Default for PriorityNote {
    fn default() -> Self {
        Self {
            header: "=== DETECTION ORDER (Priority) ===".to_string(),
            body: "\nBased on getCurrentCodec() method:\n\
                   1. Active Stream Analysis (during playback)\n\
                   2. Developer Options (user configured)\n\
                   3. OS-Level Detection (runtime)\n\
                   4. Audio Routing (OS level)\n\
                   5. System Properties (fallback)\n\
                   6. Device Estimation (based on device name)\n"
                .to_string(),
        }
    }
}

/// Complete, immutable configuration consumed by the scanner and renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Title line printed before the first method section.
    pub title: String,
    pub declaration: DeclarationSyntax,
    pub markers: Markers,
    /// Methods in report order.
    pub methods: Vec<MethodSpec>,
    pub priority: PriorityNote,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            title: "=== BLUETOOTH CODEC DETECTION METHODS ANALYSIS ===".to_string(),
            declaration: DeclarationSyntax::default(),
            markers: Markers::default(),
            methods: default_methods(),
            priority: PriorityNote::default(),
        }
    }
}

impl ReportConfig {
    /// Rejects configurations the scanner cannot work with.
    ///
    /// `origin` is only used for error context.
    pub fn validate(&self, origin: &Path) -> ScanResult<()> {
        if self.declaration.visibility.trim().is_empty() || self.declaration.keyword.trim().is_empty() {
            return Err(ScanError::config(origin, "declaration visibility and keyword must be non-empty"));
        }

        let m = &self.markers;
        for (field, value) in [
            ("error_handling", &m.error_handling),
            ("logging", &m.logging),
            ("null_return", &m.null_return),
            ("string_return", &m.string_return),
        ] {
            if value.is_empty() {
                return Err(ScanError::config(origin, format!("marker `{}` must be non-empty", field)));
            }
        }

        if let Some(pos) = self.methods.iter().position(|m| m.name.trim().is_empty()) {
            return Err(ScanError::config(origin, format!("method #{} has an empty name", pos + 1)));
        }

        Ok(())
    }
}

/// The codec-detection methods of `BluetoothManager.kt`, in report order.
fn default_methods() -> Vec<MethodSpec> {
    use ParamList::{Any, Empty};

    [
        ("getActiveStreamCodec", "Active Stream Analysis", Empty),
        ("getDeveloperOptionsCodec", "Developer Options", Empty),
        ("getOSLevelCodec", "OS-Level Detection", Any),
        ("getCodecFromAudioRouting", "Audio Routing", Empty),
        ("getCurrentCodecFromSystemProps", "System Properties", Empty),
        ("detectAptXCodec", "aptX Detection", Any),
        ("detectCodecFromMediaMetrics", "Media Metrics", Any),
        ("detectCodecFromBluetoothHci", "Bluetooth HCI", Any),
        ("detectCodecFromVendorProperties", "Vendor Properties", Any),
        ("detectCodecFromAudioPolicy", "Audio Policy", Any),
        ("detectCodecFromBluetoothStack", "Bluetooth Stack", Any),
        ("detectCodecFromKernelLogs", "Kernel Logs", Any),
    ]
    .into_iter()
    .map(|(name, label, params)| MethodSpec::new(name, label, params))
    .collect()
}

/// Loads `methodscan.toml` from `root` if it exists.
pub fn load_config(root: &Path) -> ScanResult<Option<ReportConfig>> {
    let path = root.join(CONFIG_FILE_NAME);
    if !path.exists() {
        return Ok(None);
    }
    load_config_file(&path).map(Some)
}

/// Loads and validates an explicit config file.
pub fn load_config_file(path: &Path) -> ScanResult<ReportConfig> {
    let content = fs::read_to_string(path).with_path(path)?;
    let cfg: ReportConfig = toml::from_str(&content)
        .map_err(|e| ScanError::config(path, format!("Invalid {}: {}", CONFIG_FILE_NAME, e)))?;
    cfg.validate(path)?;

    debug!(path = %path.display(), methods = cfg.methods.len(), "loaded config");
    Ok(cfg)
}
