//! Ordered suffix rules for root stripping
//!
//! Each rule is a (predicate, transform) pair. Rules are evaluated in their
//! declared order and the first one whose predicate holds wins.

use super::config::{SuffixAction, SuffixEntry};

/// Result of stripping a suffix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stem {
    /// Lowercase root left after stripping
    pub root: String,
    /// Whether the form reads as completed (past) aspect
    pub finish: bool,
}

/// A single suffix rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixRule {
    suffix: String,
    replacement: String,
    action: SuffixAction,
}

impl SuffixRule {
    /// Create a rule
    pub fn new(
        suffix: impl Into<String>,
        replacement: impl Into<String>,
        action: SuffixAction,
    ) -> Self {
        Self {
            suffix: suffix.into(),
            replacement: replacement.into(),
            action,
        }
    }

    /// The suffix this rule strips
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The action applied to the root
    pub fn action(&self) -> SuffixAction {
        self.action
    }

    /// True when the token ends with the suffix and at least two
    /// characters remain once it is removed
    pub fn matches(&self, token: &str) -> bool {
        token.ends_with(&self.suffix)
            && token.chars().count() > self.suffix.chars().count() + 1
    }

    /// Apply the rule, or `None` when the predicate does not hold
    pub fn apply(&self, token: &str) -> Option<Stem> {
        if !self.matches(token) {
            return None;
        }

        let base = &token[..token.len() - self.suffix.len()];
        let root = format!("{base}{}", self.replacement);

        let stem = match self.action {
            SuffixAction::Strip => Stem {
                root,
                finish: false,
            },
            SuffixAction::Progressive => Stem {
                root: undo_doubling(root),
                finish: false,
            },
            SuffixAction::Past => {
                let root = match token.strip_suffix("ied") {
                    Some(head) if token.chars().count() > 3 => format!("{head}y"),
                    _ => root,
                };
                Stem { root, finish: true }
            }
        };

        Some(stem)
    }
}

impl From<&SuffixEntry> for SuffixRule {
    fn from(entry: &SuffixEntry) -> Self {
        Self::new(entry.suffix.clone(), entry.replacement.clone(), entry.action)
    }
}

/// Drop the last character when the final two are identical (`runn` -> `run`)
fn undo_doubling(mut root: String) -> String {
    let mut tail = root.chars().rev();
    if let (Some(last), Some(prev)) = (tail.next(), tail.next()) {
        if last == prev {
            root.pop();
        }
    }
    root
}

/// Rule list evaluated top to bottom
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SuffixRules {
    rules: Vec<SuffixRule>,
}

impl SuffixRules {
    /// Create from rules in precedence order
    pub fn new(rules: Vec<SuffixRule>) -> Self {
        Self { rules }
    }

    /// First matching rule's stem
    pub fn stem(&self, token: &str) -> Option<Stem> {
        self.rules.iter().find_map(|rule| rule.apply(token))
    }

    /// Rules in precedence order
    pub fn iter(&self) -> impl Iterator<Item = &SuffixRule> {
        self.rules.iter()
    }

    /// Number of rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
