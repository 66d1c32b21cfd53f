//! List command implementation

use anyhow::Result;
use aslgloss_core::Lexicon;
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

use super::convert::OutputFormat;
use crate::lexicon_source::LexiconSource;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List lexicon tables with their entry counts
    Categories {
        /// Custom lexicon file
        #[arg(long, value_name = "FILE")]
        lexicon: Option<PathBuf>,
    },

    /// List available output formats
    Formats,

    /// List non-manual markers
    Markers {
        /// Custom lexicon file
        #[arg(long, value_name = "FILE")]
        lexicon: Option<PathBuf>,
    },
}

impl ListCommands {
    /// Execute the list command
    pub fn execute(&self) -> Result<()> {
        match self {
            ListCommands::Categories { lexicon } => {
                let lexicon = LexiconSource::resolve(lexicon.clone(), None).load()?;
                print!("{}", render_categories(&lexicon));
            }
            ListCommands::Formats => print!("{}", render_formats()),
            ListCommands::Markers { lexicon } => {
                let lexicon = LexiconSource::resolve(lexicon.clone(), None).load()?;
                print!("{}", render_markers(&lexicon));
            }
        }
        Ok(())
    }
}

fn render_categories(lexicon: &Lexicon) -> String {
    let mut out = format!("Lexicon tables ({}):\n", lexicon.name());
    for category in lexicon.categories() {
        out.push_str(&format!("  {:<26}{}\n", category.name, category.entries));
    }
    out
}

fn render_formats() -> String {
    let mut out = String::from("Available output formats:\n");
    for format in OutputFormat::value_variants() {
        if let Some(value) = format.to_possible_value() {
            let help = value.get_help().map(ToString::to_string).unwrap_or_default();
            out.push_str(&format!("  {:<10}- {help}\n", value.get_name()));
        }
    }
    out
}

fn render_markers(lexicon: &Lexicon) -> String {
    let mut out = String::from("Non-manual markers:\n");
    for (name, code) in lexicon.non_manual_markers() {
        out.push_str(&format!("  {name:<22}{code}\n"));
    }
    out
}
