//! Configuration module

use anyhow::{Context, Result};
use aslgloss_core::ConverterConfig;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Conversion configuration
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Sign dataset locations
    #[serde(default)]
    pub dataset: DatasetConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load the file when one was given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Converter configuration, with `--topic-markers` forcing detailed markers on
    pub fn converter_config(&self, topic_markers: bool) -> ConverterConfig {
        ConverterConfig::builder()
            .detailed_markers(topic_markers || self.conversion.detailed_markers)
            .use_fingerspelling(self.conversion.use_fingerspelling)
            .build()
    }
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Emit the subject as a `-t` topic
    pub detailed_markers: bool,

    /// Reserved for unknown-word handling
    pub use_fingerspelling: bool,

    /// Custom lexicon file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lexicon: Option<PathBuf>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            detailed_markers: false,
            use_fingerspelling: true,
            lexicon: None,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

/// WLASL dataset locations
#[derive(Debug, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DatasetConfig {
    /// Metadata JSON (e.g. `WLASL_v0.3.json`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json: Option<PathBuf>,

    /// Directory holding the clip files
    #[serde(skip_serializing_if = "Option::is_none")]
    pub videos: Option<PathBuf>,
}
