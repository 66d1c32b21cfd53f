//! Text normalization
//!
//! Lowercases, expands contractions, records the question mark and turns
//! every remaining punctuation character into a separator.

use regex::Regex;
use std::sync::OnceLock;

use crate::lexicon::Lexicon;

/// Pseudo-token appended when the input contained a `?`
pub const QUESTION_TOKEN: &str = "?";

static PUNCTUATION: OnceLock<Regex> = OnceLock::new();

fn punctuation() -> &'static Regex {
    PUNCTUATION.get_or_init(|| {
        Regex::new(r"[^\p{Alphabetic}\p{N}\s]").expect("punctuation pattern is valid")
    })
}

/// Replace every character that is neither alphanumeric nor whitespace with a space
pub fn strip_punctuation(text: &str) -> String {
    punctuation().replace_all(text, " ").into_owned()
}

/// Normalize raw input text
pub fn normalize(lexicon: &Lexicon, text: &str) -> String {
    let mut text = text.to_lowercase();

    // Each pattern is replaced once, in declared order
    for (from, to) in lexicon.contractions() {
        if text.contains(from) {
            text = text.replace(from, to);
        }
    }

    let is_question = text.contains('?');

    let mut text = strip_punctuation(&text);
    if is_question {
        text.push(' ');
        text.push_str(QUESTION_TOKEN);
    }

    text
}
