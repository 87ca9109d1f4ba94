//! Scan settings: built-in defaults, overridden by an optional JSON config
//! file, overridden by command-line flags.
use crate::error::ScanError;
use crate::report::OutputFormat;
use crate::scan::DEFAULT_THRESHOLD;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_SOURCE: &str = "google.png";

#[derive(Clone, Debug, PartialEq)]
pub struct Settings {
    pub source: String,
    pub threshold: u8,
    pub format: OutputFormat,
    /// Where to write a copy of the image with matches painted black.
    pub mark: Option<PathBuf>,
    /// Show the terminal preview before printing.
    pub preview: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE.to_string(),
            threshold: DEFAULT_THRESHOLD,
            format: OutputFormat::Text,
            mark: None,
            preview: false,
        }
    }
}

/// A partial set of overrides. Unset fields leave the setting untouched.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub source: Option<String>,
    pub threshold: Option<u8>,
    pub format: Option<OutputFormat>,
    pub mark: Option<PathBuf>,
    pub preview: Option<bool>,
}

impl ScanConfig {
    pub fn apply(self, settings: &mut Settings) {
        if let Some(source) = self.source {
            settings.source = source;
        }
        if let Some(threshold) = self.threshold {
            settings.threshold = threshold;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if self.mark.is_some() {
            settings.mark = self.mark;
        }
        if let Some(preview) = self.preview {
            settings.preview = preview;
        }
    }
}

/// Layers defaults, the config file at `path` (if any) and `overrides`.
pub fn resolve(path: Option<&Path>, overrides: ScanConfig) -> Result<Settings, ScanError> {
    let mut settings = Settings::default();
    if let Some(path) = path {
        load_config(path)?.apply(&mut settings);
    }
    overrides.apply(&mut settings);
    Ok(settings)
}

pub fn load_config(path: &Path) -> Result<ScanConfig, ScanError> {
    let data = fs::read_to_string(path)
        .map_err(|e| ScanError::Failed(format!("Failed to read config {}: {e}", path.display())))?;
    serde_json::from_str(&data)
        .map_err(|e| ScanError::Failed(format!("Failed to parse config {}: {e}", path.display())))
}
