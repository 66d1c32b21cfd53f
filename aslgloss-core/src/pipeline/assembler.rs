//! Final gloss ordering
//!
//! Topic, time, fronted question word, main clause, then the trailing
//! question and negation markers.

use super::roles::RoleAnalysis;
use super::transformer::Transformed;
use crate::config::ConverterConfig;
use crate::markers::{NEGATION, TOPIC_SUFFIX, YES_NO_QUESTION};

/// Assemble glosses in ASL order
pub fn assemble(
    config: &ConverterConfig,
    roles: &RoleAnalysis,
    transformed: Transformed,
) -> Vec<String> {
    let Transformed {
        time_expressions,
        question_marker,
        has_negation,
        main_clause,
    } = transformed;
    let interrogative = roles.sentence_type.is_interrogative();

    let mut result = Vec::with_capacity(main_clause.len() + time_expressions.len() + 4);

    // Topic
    if let Some(topic) = roles.subject.first() {
        if config.detailed_markers {
            result.push(format!("{}{}", topic.to_uppercase(), TOPIC_SUFFIX));
        } else {
            result.extend(roles.subject.iter().map(|s| s.to_uppercase()));
        }
    }

    result.extend(time_expressions);

    if interrogative {
        if let Some(marker) = &question_marker {
            result.push(marker.clone());
        }
    }

    result.extend(main_clause);

    if interrogative {
        match question_marker {
            // WH-question doubling
            Some(marker) => result.push(marker),
            None => result.push(YES_NO_QUESTION.to_string()),
        }
    }

    if has_negation {
        result.push(NEGATION.to_string());
    }

    result
}
