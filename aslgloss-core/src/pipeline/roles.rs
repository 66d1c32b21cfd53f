//! Sentence-role heuristics
//!
//! This is not a parser. Roles are assigned purely by position over the
//! non-time tokens: first token subject, second verb, third and fourth
//! objects, everything after that an adjunct.

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

use super::normalizer::QUESTION_TOKEN;
use crate::lexicon::Lexicon;

/// Sentence type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SentenceType {
    Declarative,
    Interrogative,
}

impl SentenceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentenceType::Declarative => "declarative",
            SentenceType::Interrogative => "interrogative",
        }
    }

    pub fn is_interrogative(&self) -> bool {
        matches!(self, SentenceType::Interrogative)
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Positional role slices over the non-time tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PositionalRoles {
    pub subject: SmallVec<[String; 1]>,
    pub verb: SmallVec<[String; 1]>,
    pub objects: SmallVec<[String; 2]>,
    /// Tokens past the fourth position
    pub rest: Vec<String>,
}

fn window(tokens: &[String], start: usize, end: usize) -> &[String] {
    tokens.get(start..end.min(tokens.len())).unwrap_or(&[])
}

/// Assign roles by position: `[0]` subject, `[1]` verb, `[2..4]` objects, `[4..]` rest
pub fn positional_roles(non_time: &[String]) -> PositionalRoles {
    PositionalRoles {
        subject: window(non_time, 0, 1).iter().cloned().collect(),
        verb: window(non_time, 1, 2).iter().cloned().collect(),
        objects: window(non_time, 2, 4).iter().cloned().collect(),
        rest: window(non_time, 4, non_time.len()).to_vec(),
    }
}

/// Result of the role analysis
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleAnalysis {
    pub sentence_type: SentenceType,
    pub subject: SmallVec<[String; 1]>,
    pub verb: SmallVec<[String; 1]>,
    pub objects: SmallVec<[String; 2]>,
    /// Time tokens followed by the positional remainder
    pub adjuncts: Vec<String>,
}

/// Analyze the token sequence.
///
/// The first `?` pseudo-token is removed from `tokens` so later stages see
/// the sentence without it.
pub fn analyze(lexicon: &Lexicon, tokens: &mut Vec<String>) -> RoleAnalysis {
    let sentence_type = if let Some(pos) = tokens.iter().position(|t| t == QUESTION_TOKEN) {
        tokens.remove(pos);
        SentenceType::Interrogative
    } else if tokens.iter().any(|t| lexicon.is_question_word(t)) {
        SentenceType::Interrogative
    } else {
        SentenceType::Declarative
    };

    let (time_tokens, non_time_tokens): (Vec<String>, Vec<String>) = tokens
        .iter()
        .cloned()
        .partition(|t| lexicon.is_time_word(t));

    let roles = positional_roles(&non_time_tokens);

    let mut adjuncts = time_tokens;
    adjuncts.extend(roles.rest);

    tracing::trace!(
        %sentence_type,
        subject = ?roles.subject,
        verb = ?roles.verb,
        objects = ?roles.objects,
        "assigned sentence roles"
    );

    RoleAnalysis {
        sentence_type,
        subject: roles.subject,
        verb: roles.verb,
        objects: roles.objects,
        adjuncts,
    }
}
