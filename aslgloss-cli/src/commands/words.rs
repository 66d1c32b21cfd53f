//! Words command implementation

use anyhow::Result;
use aslgloss_core::WlaslIndex;
use clap::Args;
use std::path::PathBuf;

use super::dataset::DatasetArgs;
use super::init_logging;
use crate::config::CliConfig;

const COLUMNS: usize = 5;

/// Arguments for the words command
#[derive(Debug, Args)]
pub struct WordsArgs {
    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Show at most this many words
    #[arg(short, long, value_name = "N")]
    pub limit: Option<usize>,

    /// List every metadata entry with its id, including words without clips
    #[arg(long)]
    pub all: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "ASLGLOSS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl WordsArgs {
    /// Execute the words command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let index = self.dataset.open(&config.dataset)?;

        if self.all {
            print!("{}", render_entries(&index, self.limit));
        } else {
            print!("{}", render_available(&index, self.limit));
        }
        Ok(())
    }
}

fn render_available(index: &WlaslIndex, limit: Option<usize>) -> String {
    let words = index.available_words();
    if words.is_empty() {
        return String::from("No words with clips in the dataset\n");
    }

    let mut out = format!("Found {} word(s) with clips:\n", words.len());
    let shown = &words[..limit.unwrap_or(words.len()).min(words.len())];
    out.push_str(&render_columns(shown));
    out
}

fn render_entries(index: &WlaslIndex, limit: Option<usize>) -> String {
    let total = index.entry_count();
    let mut out = format!("{total} metadata entries:\n");
    for id in 0..limit.unwrap_or(total).min(total) {
        if let Some(gloss) = index.gloss_for_id(id) {
            out.push_str(&format!("  {id:>5}  {gloss}\n"));
        }
    }
    out
}

/// Words in rows of fixed-width columns
fn render_columns(words: &[&str]) -> String {
    let width = words.iter().map(|word| word.len()).max().unwrap_or(0) + 2;
    let mut out = String::new();
    for row in words.chunks(COLUMNS) {
        let line: String = row.iter().map(|word| format!("{word:<width$}")).collect();
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}
