//! Shared dataset arguments

use anyhow::{Context, Result};
use aslgloss_core::WlaslIndex;
use clap::Args;
use std::path::PathBuf;

use crate::config::DatasetConfig;
use crate::error::CliError;

/// WLASL dataset location
#[derive(Debug, Clone, Default, Args)]
pub struct DatasetArgs {
    /// WLASL metadata JSON
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Directory containing the sign clips
    #[arg(long, value_name = "DIR")]
    pub videos: Option<PathBuf>,
}

impl DatasetArgs {
    /// Open the index, falling back to the configured paths
    pub fn open(&self, config: &DatasetConfig) -> Result<WlaslIndex> {
        let json = self
            .json
            .clone()
            .or_else(|| config.json.clone())
            .ok_or_else(|| CliError::DatasetMissing("json".to_string()))?;
        let videos = self
            .videos
            .clone()
            .or_else(|| config.videos.clone())
            .ok_or_else(|| CliError::DatasetMissing("videos".to_string()))?;

        let index = WlaslIndex::open(&json, &videos)
            .with_context(|| format!("Failed to open dataset: {}", json.display()))?;
        log::info!(
            "Dataset: {} word(s) with clips in {}",
            index.len(),
            videos.display()
        );
        Ok(index)
    }
}
