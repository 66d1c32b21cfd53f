//! Built-in lexicon loader
//!
//! The embedded lexicon is parsed on first access and shared afterwards.

use std::sync::{Arc, OnceLock};

use super::Lexicon;

/// TOML source of the built-in lexicon
pub const BUILTIN_LEXICON_TOML: &str = include_str!("../../configs/lexicon/english.toml");

static BUILTIN: OnceLock<Arc<Lexicon>> = OnceLock::new();

pub(crate) fn builtin() -> Arc<Lexicon> {
    BUILTIN
        .get_or_init(|| {
            let lexicon = Lexicon::from_toml_str(BUILTIN_LEXICON_TOML)
                .expect("Failed to load embedded lexicon");
            tracing::debug!(code = %lexicon.code(), "initialized built-in lexicon");
            Arc::new(lexicon)
        })
        .clone()
}
