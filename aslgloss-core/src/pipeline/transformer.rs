//! Grammar transformer
//!
//! Runs in two passes over the token sequence. The claim pass walks an
//! ordered list of claim rules (time, question word, negation) that mark
//! token positions as consumed. The clause pass sends every unclaimed,
//! non-function token through an ordered list of morphological rules; the
//! first rule that produces output wins.
//!
//! Claims are keyed by position, so a repeated word is only consumed where
//! a rule actually claimed it.

use smallvec::{smallvec, SmallVec};

use super::roles::RoleAnalysis;
use crate::lexicon::Lexicon;
use crate::markers::{ANNOTATION_SEPARATOR, DIRECTION_JOINER, FINISH, MANY};

/// Glosses produced for one token
pub type Glosses = SmallVec<[String; 2]>;

/// Output of the transformer, consumed by the assembler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transformed {
    /// Uppercased time words in input order
    pub time_expressions: Vec<String>,
    /// First question word, uppercased
    pub question_marker: Option<String>,
    /// Whether any negation word occurred
    pub has_negation: bool,
    /// Main-clause glosses in input order
    pub main_clause: Vec<String>,
}

/// Mutable state of the claim pass
#[derive(Debug)]
struct Claims {
    claimed: Vec<bool>,
    time_expressions: Vec<String>,
    question_marker: Option<String>,
    has_negation: bool,
}

impl Claims {
    fn new(len: usize) -> Self {
        Self {
            claimed: vec![false; len],
            time_expressions: Vec::new(),
            question_marker: None,
            has_negation: false,
        }
    }
}

type ClaimRule = fn(&Lexicon, &[String], &mut Claims);

/// Claim rules, evaluated top to bottom
const CLAIM_RULES: [ClaimRule; 3] = [claim_time, claim_question, claim_negation];

fn claim_time(lexicon: &Lexicon, tokens: &[String], claims: &mut Claims) {
    for (pos, token) in tokens.iter().enumerate() {
        if lexicon.is_time_word(token) {
            claims.time_expressions.push(token.to_uppercase());
            claims.claimed[pos] = true;
        }
    }
}

fn claim_question(lexicon: &Lexicon, tokens: &[String], claims: &mut Claims) {
    let first = tokens
        .iter()
        .enumerate()
        .find(|(pos, token)| !claims.claimed[*pos] && lexicon.is_question_word(token));

    if let Some((pos, token)) = first {
        claims.question_marker = Some(token.to_uppercase());
        claims.claimed[pos] = true;
    }
}

fn claim_negation(lexicon: &Lexicon, tokens: &[String], claims: &mut Claims) {
    for (pos, token) in tokens.iter().enumerate() {
        if lexicon.is_negation(token) {
            claims.has_negation = true;
            claims.claimed[pos] = true;
        }
    }
}

/// Read-only context shared by the clause rules
pub struct ClauseContext<'a> {
    pub lexicon: &'a Lexicon,
    /// Full token sequence, `?` removed
    pub tokens: &'a [String],
    pub roles: &'a RoleAnalysis,
}

/// A clause rule returns `None` when it does not apply
pub type ClauseRule = fn(&ClauseContext<'_>, &str) -> Option<Glosses>;

/// Clause rules, evaluated top to bottom; first match wins
pub const CLAUSE_RULES: [ClauseRule; 7] = [
    numeral,
    irregular_plural,
    irregular_verb,
    regular_plural,
    suffix_pattern,
    directional_verb,
    depicting_verb,
];

fn numeral(ctx: &ClauseContext<'_>, token: &str) -> Option<Glosses> {
    ctx.lexicon
        .numeral(token)
        .map(|digits| smallvec![digits.to_string()])
}

fn irregular_plural(ctx: &ClauseContext<'_>, token: &str) -> Option<Glosses> {
    ctx.lexicon
        .irregular_plural(token)
        .map(|root| smallvec![root.to_uppercase(), MANY.to_string()])
}

fn irregular_verb(ctx: &ClauseContext<'_>, token: &str) -> Option<Glosses> {
    let root = ctx.lexicon.irregular_verb(token)?;
    let mut glosses: Glosses = smallvec![root.to_uppercase()];
    // Past-tense heuristic: any non-progressive form that differs from its root
    if token != root && !token.ends_with("ing") {
        glosses.push(FINISH.to_string());
    }
    Some(glosses)
}

fn regular_plural(_ctx: &ClauseContext<'_>, token: &str) -> Option<Glosses> {
    if token.chars().count() > 1 && !token.ends_with("ss") {
        let root = token.strip_suffix('s')?;
        return Some(smallvec![root.to_uppercase(), MANY.to_string()]);
    }
    None
}

fn suffix_pattern(ctx: &ClauseContext<'_>, token: &str) -> Option<Glosses> {
    let stem = ctx.lexicon.suffix_rules().stem(token)?;
    let mut glosses: Glosses = smallvec![stem.root.to_uppercase()];
    if stem.finish {
        glosses.push(FINISH.to_string());
    }
    Some(glosses)
}

fn directional_verb(ctx: &ClauseContext<'_>, token: &str) -> Option<Glosses> {
    if !ctx.lexicon.is_directional_verb(token) {
        return None;
    }
    let object = ctx.roles.objects.first()?;

    // Positions are looked up by value, first occurrence
    let object_pos = ctx.tokens.iter().position(|t| t == object);
    let subject_pos = ctx
        .roles
        .subject
        .first()
        .and_then(|subject| ctx.tokens.iter().position(|t| t == subject));

    let gloss = match (subject_pos, object_pos) {
        (Some(s), Some(o)) => format!(
            "{}{}{}{}{}",
            token.to_uppercase(),
            ANNOTATION_SEPARATOR,
            ctx.tokens[s].to_uppercase(),
            DIRECTION_JOINER,
            ctx.tokens[o].to_uppercase()
        ),
        _ => token.to_uppercase(),
    };
    Some(smallvec![gloss])
}

fn depicting_verb(ctx: &ClauseContext<'_>, token: &str) -> Option<Glosses> {
    if !ctx.lexicon.is_depicting_verb(token) {
        return None;
    }

    let classifier = ctx
        .roles
        .objects
        .iter()
        .find_map(|object| ctx.lexicon.classifier(object));

    let gloss = match classifier {
        Some(tag) => format!("{}{}{}", token.to_uppercase(), ANNOTATION_SEPARATOR, tag),
        None => token.to_uppercase(),
    };
    Some(smallvec![gloss])
}

/// Gloss a single main-clause token
pub fn gloss_token(ctx: &ClauseContext<'_>, token: &str) -> Glosses {
    CLAUSE_RULES
        .iter()
        .find_map(|rule| rule(ctx, token))
        .unwrap_or_else(|| smallvec![token.to_uppercase()])
}

/// Transform the token sequence
pub fn transform(lexicon: &Lexicon, tokens: &[String], roles: &RoleAnalysis) -> Transformed {
    let mut claims = Claims::new(tokens.len());
    for rule in CLAIM_RULES {
        rule(lexicon, tokens, &mut claims);
    }

    tracing::trace!(
        time = ?claims.time_expressions,
        question = ?claims.question_marker,
        negation = claims.has_negation,
        "claimed tokens"
    );

    let ctx = ClauseContext {
        lexicon,
        tokens,
        roles,
    };

    let main_clause = tokens
        .iter()
        .zip(&claims.claimed)
        .filter(|(token, claimed)| !**claimed && !lexicon.is_function_word(token))
        .flat_map(|(token, _)| gloss_token(&ctx, token))
        .collect();

    Transformed {
        time_expressions: claims.time_expressions,
        question_marker: claims.question_marker,
        has_negation: claims.has_negation,
        main_clause,
    }
}
