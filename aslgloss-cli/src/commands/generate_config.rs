//! Generate config command implementation

use anyhow::{Context, Result};
use aslgloss_core::lexicon::BUILTIN_LEXICON_TOML;
use clap::{Args, ValueEnum};
use std::fs;
use std::path::PathBuf;

use crate::config::CliConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Which template to write
    #[arg(short, long, value_enum, default_value = "lexicon")]
    pub kind: TemplateKind,
}

/// Template kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateKind {
    /// The built-in English lexicon, as a starting point for a custom one
    Lexicon,
    /// CLI configuration file with every default spelled out
    Cli,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        println!("Generating {:?} template...", self.kind);
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template()?;
        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Template generated successfully!");
        println!();
        println!("Next steps:");
        match self.kind {
            TemplateKind::Lexicon => {
                println!("1. Edit the word lists and tables");
                println!("2. Validate your lexicon:");
                println!("   aslgloss validate --lexicon {}", self.output.display());
                println!("3. Use it for conversion:");
                println!(
                    "   aslgloss convert \"he walked\" --lexicon {}",
                    self.output.display()
                );
            }
            TemplateKind::Cli => {
                println!("1. Set the dataset paths under [dataset]");
                println!(
                    "2. Pass it with --config {} or ASLGLOSS_CONFIG",
                    self.output.display()
                );
            }
        }

        Ok(())
    }

    /// Generate template content
    fn generate_template(&self) -> Result<String> {
        match self.kind {
            TemplateKind::Lexicon => Ok(BUILTIN_LEXICON_TOML.to_string()),
            TemplateKind::Cli => {
                let body = toml::to_string_pretty(&CliConfig::default())
                    .context("Failed to serialize default configuration")?;
                Ok(format!(
                    "# aslgloss configuration\n\
                     # [dataset] accepts `json` (WLASL metadata) and `videos` (clip directory)\n\n\
                     {body}"
                ))
            }
        }
    }
}
