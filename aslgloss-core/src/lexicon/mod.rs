//! Static lexicon tables
//!
//! A [`Lexicon`] holds every word class, exception map and rule list the
//! converter consults. It is built once from a TOML document and never
//! mutated afterwards, so one instance can be shared across threads.

pub mod config;
pub(crate) mod loader;
pub mod morphology;

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use crate::error::{LexiconError, LexiconResult};
use config::LexiconConfig;
pub use config::SuffixAction;
pub use loader::BUILTIN_LEXICON_TOML;
pub use morphology::{Stem, SuffixRule, SuffixRules};

/// Size of one lexicon table, for listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySummary {
    /// Table name as it appears in the TOML schema
    pub name: &'static str,
    /// Number of entries
    pub entries: usize,
}

/// Immutable lexicon tables
#[derive(Debug, Clone)]
pub struct Lexicon {
    code: String,
    name: String,

    function_words: HashSet<String>,
    time_words: HashSet<String>,
    question_words: HashSet<String>,
    negation_words: HashSet<String>,
    directional_verbs: HashSet<String>,
    depicting_verbs: HashSet<String>,
    intensifiers: HashSet<String>,
    fingerspelled_categories: HashSet<String>,
    simple_skip: HashSet<String>,

    classifiers: HashMap<String, String>,
    non_manual_markers: HashMap<String, String>,
    irregular_plurals: HashMap<String, String>,
    irregular_verbs: HashMap<String, String>,
    numerals: HashMap<String, String>,

    contractions: Vec<(String, String)>,
    suffix_rules: SuffixRules,
}

fn word_set(words: &[String]) -> HashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

impl Lexicon {
    /// The built-in English lexicon, parsed on first use
    pub fn builtin() -> Arc<Lexicon> {
        loader::builtin()
    }

    /// Build from a parsed configuration
    pub fn from_config(config: &LexiconConfig) -> LexiconResult<Self> {
        config.validate()?;

        let words = &config.words;
        Ok(Self {
            code: config.metadata.code.clone(),
            name: config.metadata.name.clone(),
            function_words: word_set(&words.function),
            time_words: word_set(&words.time),
            question_words: word_set(&words.question),
            negation_words: word_set(&words.negation),
            directional_verbs: word_set(&words.directional_verbs),
            depicting_verbs: word_set(&words.depicting_verbs),
            intensifiers: word_set(&words.intensifiers),
            fingerspelled_categories: word_set(&words.fingerspelled_categories),
            simple_skip: word_set(&words.simple_skip),
            classifiers: config.classifiers.clone(),
            non_manual_markers: config.non_manual_markers.clone(),
            irregular_plurals: config.irregular_plurals.clone(),
            irregular_verbs: config.irregular_verbs.clone(),
            numerals: config.numerals.clone(),
            contractions: config
                .contractions
                .iter()
                .map(|c| (c.from.to_lowercase(), c.to.clone()))
                .collect(),
            suffix_rules: SuffixRules::new(config.suffixes.iter().map(SuffixRule::from).collect()),
        })
    }

    /// Parse and validate a TOML lexicon document
    pub fn from_toml_str(toml_str: &str) -> LexiconResult<Self> {
        let config: LexiconConfig = toml::from_str(toml_str)?;
        Self::from_config(&config)
    }

    /// Load a lexicon file
    pub fn from_file(path: impl AsRef<Path>) -> LexiconResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| LexiconError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lexicon = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), code = %lexicon.code, "loaded lexicon");
        Ok(lexicon)
    }

    /// Lexicon code from the metadata section
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable name from the metadata section
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_function_word(&self, word: &str) -> bool {
        self.function_words.contains(word)
    }

    pub fn is_time_word(&self, word: &str) -> bool {
        self.time_words.contains(word)
    }

    pub fn is_question_word(&self, word: &str) -> bool {
        self.question_words.contains(word)
    }

    pub fn is_negation(&self, word: &str) -> bool {
        self.negation_words.contains(word)
    }

    pub fn is_directional_verb(&self, word: &str) -> bool {
        self.directional_verbs.contains(word)
    }

    pub fn is_depicting_verb(&self, word: &str) -> bool {
        self.depicting_verbs.contains(word)
    }

    pub fn is_intensifier(&self, word: &str) -> bool {
        self.intensifiers.contains(word)
    }

    pub fn is_fingerspelled_category(&self, word: &str) -> bool {
        self.fingerspelled_categories.contains(word)
    }

    /// Whether the grammar-free glosser drops this word
    pub fn is_simple_skip(&self, word: &str) -> bool {
        self.simple_skip.contains(word)
    }

    /// Classifier tag for a referent noun (`vehicle` -> `CL:3`)
    pub fn classifier(&self, word: &str) -> Option<&str> {
        self.classifiers.get(word).map(String::as_str)
    }

    /// Singular root of an irregular plural
    pub fn irregular_plural(&self, word: &str) -> Option<&str> {
        self.irregular_plurals.get(word).map(String::as_str)
    }

    /// Base form of an irregular verb
    pub fn irregular_verb(&self, word: &str) -> Option<&str> {
        self.irregular_verbs.get(word).map(String::as_str)
    }

    /// Digit string for a numeral word
    pub fn numeral(&self, word: &str) -> Option<&str> {
        self.numerals.get(word).map(String::as_str)
    }

    /// Short code of a non-manual marker (`question` -> `q`)
    pub fn non_manual_marker(&self, name: &str) -> Option<&str> {
        self.non_manual_markers.get(name).map(String::as_str)
    }

    /// All non-manual markers, sorted by name
    pub fn non_manual_markers(&self) -> Vec<(&str, &str)> {
        let mut markers: Vec<(&str, &str)> = self
            .non_manual_markers
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        markers.sort_unstable();
        markers
    }

    /// Contraction expansions in application order
    pub fn contractions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.contractions
            .iter()
            .map(|(from, to)| (from.as_str(), to.as_str()))
    }

    /// Suffix rules in precedence order
    pub fn suffix_rules(&self) -> &SuffixRules {
        &self.suffix_rules
    }

    /// Entry counts of every table, in schema order
    pub fn categories(&self) -> Vec<CategorySummary> {
        [
            ("function", self.function_words.len()),
            ("time", self.time_words.len()),
            ("question", self.question_words.len()),
            ("negation", self.negation_words.len()),
            ("directional_verbs", self.directional_verbs.len()),
            ("depicting_verbs", self.depicting_verbs.len()),
            ("intensifiers", self.intensifiers.len()),
            ("fingerspelled_categories", self.fingerspelled_categories.len()),
            ("simple_skip", self.simple_skip.len()),
            ("classifiers", self.classifiers.len()),
            ("non_manual_markers", self.non_manual_markers.len()),
            ("irregular_plurals", self.irregular_plurals.len()),
            ("irregular_verbs", self.irregular_verbs.len()),
            ("numerals", self.numerals.len()),
            ("contractions", self.contractions.len()),
            ("suffixes", self.suffix_rules.len()),
        ]
        .into_iter()
        .map(|(name, entries)| CategorySummary { name, entries })
        .collect()
    }
}
