//! Rule-based English to ASL gloss conversion
//!
//! The converter rewrites an English sentence as a sequence of ASL gloss
//! tokens: uppercase sign labels in ASL order, with light annotations such
//! as `MANY`, `FINISH`, `GIVE:I-to-YOU`, a `-t` topic and trailing `Q` or
//! `NOT` markers.
//!
//! # Architecture
//!
//! Conversion is a fixed pipeline over a shared, immutable [`Lexicon`]:
//! - **Normalizer**: lowercase, contraction expansion, punctuation stripping
//! - **Tokenizer**: whitespace split
//! - **Role analysis**: sentence type and positional roles
//! - **Transformer**: claim pass, then ordered morphological clause rules
//! - **Assembler**: topic, time, question and negation ordering
//!
//! The [`signs`] module maps finished glosses onto sign clips from the WLASL
//! dataset and writes a concat manifest for them.
//!
//! # Example
//!
//! ```rust
//! use aslgloss_core::{ConverterConfig, GlossConverter};
//!
//! let config = ConverterConfig::builder().detailed_markers(false).build();
//! let converter = GlossConverter::with_config(config);
//!
//! let gloss = converter.convert("The books are on the table");
//! assert_eq!(gloss, vec!["THE", "BOOK", "MANY", "TABLE"]);
//! ```

pub mod config;
pub mod converter;
pub mod error;
pub mod lexicon;
pub mod markers;
pub mod pipeline;
pub mod signs;
pub mod simple;

pub use config::{ConverterConfig, ConverterConfigBuilder};
pub use converter::{convert_to_gloss, Conversion, GlossConverter};
pub use error::{DatasetError, GlossError, LexiconError, Result};
pub use lexicon::{CategorySummary, Lexicon};
pub use pipeline::{RoleAnalysis, SentenceType};
pub use signs::{
    ConcatManifest, PlannedClip, SignLookup, SignPlan, SignPlanner, StitchOptions, VideoStitcher,
    WlaslIndex,
};
pub use simple::{simple_gloss, simple_gloss_with};
