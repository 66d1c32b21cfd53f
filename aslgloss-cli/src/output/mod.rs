//! Output formatting module

use anyhow::Result;
use aslgloss_core::Conversion;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one converted sentence
    fn format_gloss(&mut self, text: &str, conversion: &Conversion) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::{GlossRecord, JsonFormatter};
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
