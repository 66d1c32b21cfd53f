//! Convert command implementation

use anyhow::{Context, Result};
use aslgloss_core::{Conversion, GlossConverter};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use super::init_logging;
use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::lexicon_source::LexiconSource;
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Sentence to convert
    #[arg(
        value_name = "TEXT",
        conflicts_with = "input",
        required_unless_present = "input"
    )]
    pub text: Option<String>,

    /// Input files or patterns (supports glob), one sentence per line
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Mark the subject as a `-t` topic
    #[arg(long)]
    pub topic_markers: bool,

    /// Custom lexicon file
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "ASLGLOSS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Convert input files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One gloss line per sentence
    Text,
    /// JSON array of sentences with gloss and sentence type
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from the configuration file
    pub fn from_config(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, self.quiet);

        log::info!("Starting gloss conversion");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let source =
            LexiconSource::resolve(self.lexicon.clone(), config.conversion.lexicon.clone());
        log::info!("Lexicon: {}", source.display_name());

        let converter_config = config.converter_config(self.topic_markers);
        let converter = GlossConverter::with_lexicon(source.load()?, converter_config);

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_config(&config.output.default_format)?,
        };
        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;

        match &self.text {
            Some(text) => {
                formatter.format_gloss(text, &converter.analyze(text))?;
            }
            None => self.convert_files(&converter, formatter.as_mut())?,
        }

        formatter.finish()?;
        log::info!("Conversion complete");
        Ok(())
    }

    fn convert_files(
        &self,
        converter: &GlossConverter,
        formatter: &mut dyn OutputFormatter,
    ) -> Result<()> {
        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} file(s) to convert", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        let convert_file = |path: &PathBuf| -> Result<Vec<(String, Conversion)>> {
            let converted = convert_sentences(converter, path)?;
            progress.file_completed(&path.display().to_string());
            Ok(converted)
        };

        let results: Vec<Vec<(String, Conversion)>> = if self.parallel {
            files.par_iter().map(convert_file).collect::<Result<_>>()?
        } else {
            files.iter().map(convert_file).collect::<Result<_>>()?
        };
        progress.finish();

        for (text, conversion) in results.iter().flatten() {
            formatter.format_gloss(text, conversion)?;
        }
        Ok(())
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
    }
}

fn convert_sentences(converter: &GlossConverter, path: &Path) -> Result<Vec<(String, Conversion)>> {
    let sentences = FileReader::read_sentences(path)?;
    log::debug!("{}: {} sentence(s)", path.display(), sentences.len());

    Ok(sentences
        .into_iter()
        .map(|text| {
            let conversion = converter.analyze(&text);
            (text, conversion)
        })
        .collect())
}
