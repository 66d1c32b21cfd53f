//! Conversion pipeline
//!
//! Data flows strictly forward: normalizer, tokenizer, role analyzer,
//! grammar transformer, assembler.

pub mod assembler;
pub mod normalizer;
pub mod roles;
pub mod tokenizer;
pub mod transformer;

pub use assembler::assemble;
pub use normalizer::{normalize, strip_punctuation, QUESTION_TOKEN};
pub use roles::{analyze, positional_roles, PositionalRoles, RoleAnalysis, SentenceType};
pub use tokenizer::tokenize;
pub use transformer::{gloss_token, transform, ClauseContext, Glosses, Transformed};
