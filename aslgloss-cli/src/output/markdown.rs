//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use aslgloss_core::Conversion;
use std::io::Write;

/// Markdown formatter - outputs glosses as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    sentence_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            sentence_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_gloss(&mut self, text: &str, conversion: &Conversion) -> Result<()> {
        self.sentence_count += 1;
        writeln!(
            self.writer,
            "{}. `{}` ({})",
            self.sentence_count,
            conversion,
            text.trim()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total sentences: {}*", self.sentence_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
