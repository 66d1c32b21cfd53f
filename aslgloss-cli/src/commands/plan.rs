//! Plan command implementation

use anyhow::{Context, Result};
use aslgloss_core::{
    simple_gloss_with, ConcatManifest, GlossConverter, SignPlanner, StitchOptions, VideoStitcher,
};
use clap::Args;
use std::path::PathBuf;

use super::dataset::DatasetArgs;
use super::init_logging;
use crate::config::CliConfig;
use crate::lexicon_source::LexiconSource;

/// Arguments for the plan command
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Sentence to sign
    #[arg(value_name = "TEXT")]
    pub text: String,

    #[command(flatten)]
    pub dataset: DatasetArgs,

    /// Write an ffmpeg concat manifest for the found clips
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Join clips without cross-fades
    #[arg(long)]
    pub no_transitions: bool,

    /// Keep clips at their original size
    #[arg(long)]
    pub no_resize: bool,

    /// Use grammar-free glossing (English word order)
    #[arg(long)]
    pub simple: bool,

    /// Custom lexicon file
    #[arg(long, value_name = "FILE")]
    pub lexicon: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "ASLGLOSS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl PlanArgs {
    /// Execute the plan command
    pub fn execute(&self) -> Result<()> {
        init_logging(self.verbose, false);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let lexicon =
            LexiconSource::resolve(self.lexicon.clone(), config.conversion.lexicon.clone()).load()?;
        let index = self.dataset.open(&config.dataset)?;

        let glosses = if self.simple {
            simple_gloss_with(&lexicon, &self.text)
        } else {
            let converter = GlossConverter::with_lexicon(lexicon, config.converter_config(false));
            converter.convert(&self.text)
        };
        println!("Gloss: {}", glosses.join(" "));

        let plan = SignPlanner::new().plan(&glosses, &index);
        for clip in &plan.clips {
            println!("  {} -> {}", clip.gloss, clip.path.display());
        }
        if !plan.is_complete() {
            println!("Missing: {}", plan.missing.join(", "));
        }

        if let Some(manifest) = &self.manifest {
            let stitcher = ConcatManifest::new();
            let written = stitcher
                .stitch(&plan.paths(), &self.stitch_options(), manifest)
                .with_context(|| format!("Failed to write manifest: {}", manifest.display()))?;
            println!("✓ Manifest written: {}", written.display());
        }

        Ok(())
    }

    fn stitch_options(&self) -> StitchOptions {
        let defaults = StitchOptions::default();
        StitchOptions {
            transitions: !self.no_transitions,
            resize: if self.no_resize { None } else { defaults.resize },
        }
    }
}
