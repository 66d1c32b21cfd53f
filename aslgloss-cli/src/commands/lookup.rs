//! Lookup command implementation

use anyhow::{bail, Context, Result};
use aslgloss_core::{SignLookup, WlaslIndex};
use clap::Args;
use std::fs;
use std::path::{Path, PathBuf};

use super::dataset::DatasetArgs;
use super::init_logging;
use crate::config::CliConfig;

/// Arguments for the lookup command
#[derive(Debug, Args)]
pub struct LookupArgs {
    /// Words to look up
    #[arg(value_name = "WORD", required = true)]
    pub words: Vec<String>,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Show only the clip at this position (0 is the default clip)
    #[arg(long, value_name = "N")]
    pub clip: Option<usize>,

    /// Copy the selected clip to this path (single word only)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "ASLGLOSS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl LookupArgs {
    /// Execute the lookup command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        if self.output.is_some() && self.words.len() > 1 {
            bail!("--output takes a single word, got {}", self.words.len());
        }

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let index = self.dataset.open(&config.dataset)?;

        for word in &self.words {
            print!("{}", render_word(&index, word, self.clip));
        }

        if let (Some(output), Some(word)) = (&self.output, self.words.first()) {
            match index.specific_clip(word, self.clip.unwrap_or(0)) {
                Some(clip) => {
                    copy_clip(clip, output)?;
                    println!("✓ Copied {} to {}", clip.display(), output.display());
                }
                None => log::warn!("Nothing to copy for '{word}'"),
            }
        }

        Ok(())
    }
}

fn render_word(index: &WlaslIndex, word: &str, clip: Option<usize>) -> String {
    let Some(clips) = index.clips(word) else {
        return format!("{word}: not found\n");
    };

    let mut out = match index.id_for_gloss(word) {
        Some(id) => format!("{word} (entry {id}):\n"),
        None => format!("{word}:\n"),
    };
    match clip {
        Some(position) => match index.specific_clip(word, position) {
            Some(path) => out.push_str(&format!("  {}\n", path.display())),
            None => out.push_str(&format!("  no clip {position} ({} available)\n", clips.len())),
        },
        None => {
            for path in clips {
                out.push_str(&format!("  {}\n", path.display()));
            }
        }
    }
    out
}

/// Copy a clip, creating the destination's parent directories
fn copy_clip(clip: &Path, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    fs::copy(clip, output)
        .with_context(|| format!("Failed to copy {} to {}", clip.display(), output.display()))?;
    Ok(())
}
