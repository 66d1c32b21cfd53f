//! Grammar-free glossing
//!
//! Keeps English word order and only drops articles and forms of "to be".
//! Tokens stay lowercase so they can be fed straight into a sign lookup.

use crate::lexicon::Lexicon;
use crate::pipeline::strip_punctuation;

/// Simple gloss with the built-in lexicon
pub fn simple_gloss(text: &str) -> Vec<String> {
    simple_gloss_with(&Lexicon::builtin(), text)
}

/// Simple gloss with a custom lexicon's skip list
pub fn simple_gloss_with(lexicon: &Lexicon, text: &str) -> Vec<String> {
    strip_punctuation(&text.to_lowercase())
        .split_whitespace()
        .filter(|word| !lexicon.is_simple_skip(word))
        .map(str::to_owned)
        .collect()
}
