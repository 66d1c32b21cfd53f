//! Gloss to clip planning

use serde::Serialize;
use std::path::PathBuf;

use super::lookup::SignLookup;
use crate::markers::{ANNOTATION_SEPARATOR, TOPIC_SUFFIX, YES_NO_QUESTION};

/// One gloss token resolved to a clip
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedClip {
    /// Gloss token as produced by the converter
    pub gloss: String,
    /// Lookup word derived from the gloss
    pub word: String,
    pub path: PathBuf,
}

/// Ordered clips plus the words nothing was found for
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SignPlan {
    pub clips: Vec<PlannedClip>,
    pub missing: Vec<String>,
}

impl SignPlan {
    /// Clip paths in signing order
    pub fn paths(&self) -> Vec<PathBuf> {
        self.clips.iter().map(|clip| clip.path.clone()).collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.clips.is_empty()
    }
}

/// Lookup word for a gloss token, or `None` for tokens without a manual sign.
///
/// The topic suffix is dropped, only the text before the first annotation is
/// kept, and the result is lowercased: `GIVE:I-to-YOU` looks up `give`.
pub fn lookup_key(gloss: &str) -> Option<String> {
    if gloss == YES_NO_QUESTION {
        return None;
    }
    let gloss = gloss.strip_suffix(TOPIC_SUFFIX).unwrap_or(gloss);
    let head = gloss
        .split(ANNOTATION_SEPARATOR)
        .next()
        .unwrap_or(gloss);
    if head.is_empty() {
        return None;
    }
    Some(head.to_lowercase())
}

/// Resolves gloss tokens against a sign lookup
#[derive(Debug, Clone, Copy, Default)]
pub struct SignPlanner;

impl SignPlanner {
    /// Create a new planner
    pub fn new() -> Self {
        Self
    }

    /// Plan clips for a gloss sequence. Missing words never stop planning.
    pub fn plan<S: AsRef<str>>(&self, glosses: &[S], lookup: &dyn SignLookup) -> SignPlan {
        let mut plan = SignPlan::default();

        for gloss in glosses {
            let gloss = gloss.as_ref();
            let Some(word) = lookup_key(gloss) else {
                continue;
            };

            match lookup.clip(&word) {
                Some(path) => {
                    tracing::trace!(%gloss, path = %path.display(), "found clip");
                    plan.clips.push(PlannedClip {
                        gloss: gloss.to_string(),
                        path: path.to_path_buf(),
                        word,
                    });
                }
                None => {
                    tracing::debug!(%gloss, %word, "no clip for word");
                    plan.missing.push(word);
                }
            }
        }

        plan
    }
}
