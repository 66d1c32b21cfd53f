//! English to ASL gloss converter

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

use crate::config::ConverterConfig;
use crate::lexicon::Lexicon;
use crate::pipeline::{self, RoleAnalysis, SentenceType};

/// Glosses together with the analysis that produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    /// Gloss tokens in ASL order
    pub glosses: Vec<String>,
    /// Sentence type and role slices
    pub analysis: RoleAnalysis,
}

impl Conversion {
    pub fn sentence_type(&self) -> SentenceType {
        self.analysis.sentence_type
    }

    pub fn is_empty(&self) -> bool {
        self.glosses.is_empty()
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.glosses.join(" "))
    }
}

/// Rule-based English to ASL gloss converter
///
/// The converter holds no per-call state. One instance can serve any number
/// of calls, from any number of threads.
///
/// ```
/// use aslgloss_core::GlossConverter;
///
/// let converter = GlossConverter::new();
/// let gloss = converter.convert("Where did you go yesterday?");
/// assert_eq!(gloss.last().map(String::as_str), Some("WHERE"));
/// ```
#[derive(Debug, Clone)]
pub struct GlossConverter {
    lexicon: Arc<Lexicon>,
    config: ConverterConfig,
}

impl GlossConverter {
    /// Create a converter with the built-in lexicon and default configuration
    pub fn new() -> Self {
        Self::with_config(ConverterConfig::default())
    }

    /// Create a converter with the built-in lexicon
    pub fn with_config(config: ConverterConfig) -> Self {
        Self::with_lexicon(Lexicon::builtin(), config)
    }

    /// Create a converter over a custom lexicon
    pub fn with_lexicon(lexicon: Arc<Lexicon>, config: ConverterConfig) -> Self {
        Self { lexicon, config }
    }

    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// Convert text to gloss tokens
    pub fn convert(&self, text: &str) -> Vec<String> {
        self.analyze(text).glosses
    }

    /// Convert text, keeping the role analysis
    pub fn analyze(&self, text: &str) -> Conversion {
        let normalized = pipeline::normalize(&self.lexicon, text);
        tracing::debug!(%normalized, "normalized input");

        let mut tokens = pipeline::tokenize(&normalized);
        let analysis = pipeline::analyze(&self.lexicon, &mut tokens);
        let transformed = pipeline::transform(&self.lexicon, &tokens, &analysis);
        let glosses = pipeline::assemble(&self.config, &analysis, transformed);

        tracing::debug!(
            sentence_type = %analysis.sentence_type,
            glosses = glosses.len(),
            "converted sentence"
        );

        Conversion { glosses, analysis }
    }

    /// Convert independent sentences, preserving input order
    #[cfg(feature = "parallel")]
    pub fn convert_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Vec<String>> {
        use rayon::prelude::*;

        texts
            .par_iter()
            .map(|text| self.convert(text.as_ref()))
            .collect()
    }

    /// Convert independent sentences, preserving input order
    #[cfg(not(feature = "parallel"))]
    pub fn convert_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<Vec<String>> {
        texts.iter().map(|text| self.convert(text.as_ref())).collect()
    }
}

impl Default for GlossConverter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert with the built-in lexicon and plain (unmarked) subjects
pub fn convert_to_gloss(text: &str) -> Vec<String> {
    let config = ConverterConfig::builder().detailed_markers(false).build();
    GlossConverter::with_config(config).convert(text)
}
