//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Reads sentence files
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file as one sentence per line, skipping blank lines
    pub fn read_sentences(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        Ok(content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_owned)
            .collect())
    }
}
