//! Configuration structures and validation
//!
//! This module defines the TOML schema for lexicon files.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::{LexiconError, LexiconResult};

/// Root lexicon configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconConfig {
    pub metadata: Metadata,
    pub words: WordSets,
    #[serde(default)]
    pub classifiers: HashMap<String, String>,
    #[serde(default)]
    pub non_manual_markers: HashMap<String, String>,
    #[serde(default)]
    pub irregular_plurals: HashMap<String, String>,
    #[serde(default)]
    pub irregular_verbs: HashMap<String, String>,
    #[serde(default)]
    pub numerals: HashMap<String, String>,
    #[serde(default)]
    pub contractions: Vec<Contraction>,
    #[serde(default)]
    pub suffixes: Vec<SuffixEntry>,
}

/// Lexicon metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Word classes used by the role analyzer and the transformer
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordSets {
    #[serde(default)]
    pub function: Vec<String>,
    #[serde(default)]
    pub time: Vec<String>,
    #[serde(default)]
    pub question: Vec<String>,
    #[serde(default)]
    pub negation: Vec<String>,
    #[serde(default)]
    pub directional_verbs: Vec<String>,
    #[serde(default)]
    pub depicting_verbs: Vec<String>,
    #[serde(default)]
    pub intensifiers: Vec<String>,
    #[serde(default)]
    pub fingerspelled_categories: Vec<String>,
    #[serde(default)]
    pub simple_skip: Vec<String>,
}

/// Literal contraction expansion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contraction {
    pub from: String,
    pub to: String,
}

/// One entry of the ordered suffix rule list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuffixEntry {
    pub suffix: String,
    #[serde(default)]
    pub replacement: String,
    #[serde(default)]
    pub action: SuffixAction,
}

/// What happens to the root once a suffix matched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixAction {
    /// Emit the root only
    #[default]
    Strip,
    /// Undo consonant doubling, emit the root
    Progressive,
    /// Restore `-ied` to `-y`, emit the root followed by FINISH
    Past,
}

impl LexiconConfig {
    /// Validate configuration
    pub(crate) fn validate(&self) -> LexiconResult<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(LexiconError::Invalid("metadata code is empty".to_string()));
        }

        if let Some(c) = self.contractions.iter().find(|c| c.from.is_empty()) {
            return Err(LexiconError::Invalid(format!(
                "contraction with empty pattern (expands to {:?})",
                c.to
            )));
        }

        if self.suffixes.iter().any(|s| s.suffix.is_empty()) {
            return Err(LexiconError::Invalid("suffix rule with empty suffix".to_string()));
        }

        for (word, digits) in &self.numerals {
            if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
                return Err(LexiconError::Invalid(format!(
                    "numeral {word:?} maps to non-digit value {digits:?}"
                )));
            }
        }

        for (table, map) in [
            ("irregular_plurals", &self.irregular_plurals),
            ("irregular_verbs", &self.irregular_verbs),
        ] {
            if let Some((word, _)) = map.iter().find(|(_, root)| root.is_empty()) {
                return Err(LexiconError::Invalid(format!(
                    "{table} entry {word:?} has an empty root"
                )));
            }
        }

        Ok(())
    }
}
