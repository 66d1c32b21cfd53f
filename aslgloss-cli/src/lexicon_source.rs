//! Lexicon source management for CLI

use anyhow::{Context, Result};
use aslgloss_core::Lexicon;
use std::path::PathBuf;
use std::sync::Arc;

/// Source of the lexicon tables
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexiconSource {
    /// Embedded English lexicon
    BuiltIn,
    /// External TOML file
    External(PathBuf),
}

impl LexiconSource {
    /// Pick the source: a command-line path wins over a configured one
    pub fn resolve(flag: Option<PathBuf>, configured: Option<PathBuf>) -> Self {
        match flag.or(configured) {
            Some(path) => LexiconSource::External(path),
            None => LexiconSource::BuiltIn,
        }
    }

    /// Get the display name for the lexicon source
    pub fn display_name(&self) -> String {
        match self {
            LexiconSource::BuiltIn => "Built-in: English".to_string(),
            LexiconSource::External(path) => format!("External: {}", path.display()),
        }
    }

    /// Load the lexicon
    pub fn load(&self) -> Result<Arc<Lexicon>> {
        match self {
            LexiconSource::BuiltIn => Ok(Lexicon::builtin()),
            LexiconSource::External(path) => {
                let lexicon = Lexicon::from_file(path)
                    .with_context(|| format!("Failed to load lexicon: {}", path.display()))?;
                Ok(Arc::new(lexicon))
            }
        }
    }
}
