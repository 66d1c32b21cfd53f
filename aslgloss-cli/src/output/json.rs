//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use aslgloss_core::{Conversion, SentenceType};
use serde::Serialize;
use std::io::Write;

/// JSON formatter - outputs conversions as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    records: Vec<GlossRecord>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize)]
pub struct GlossRecord {
    /// Input sentence
    pub text: String,
    /// Gloss tokens in ASL order
    pub gloss: Vec<String>,
    pub sentence_type: SentenceType,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            records: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_gloss(&mut self, text: &str, conversion: &Conversion) -> Result<()> {
        self.records.push(GlossRecord {
            text: text.to_string(),
            gloss: conversion.glosses.clone(),
            sentence_type: conversion.sentence_type(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.records)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.records)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
