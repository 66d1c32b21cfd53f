//! Validate command implementation

use anyhow::Result;
use aslgloss_core::Lexicon;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to lexicon file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub lexicon: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating lexicon: {}", self.lexicon.display());

        match Lexicon::from_file(&self.lexicon) {
            Ok(lexicon) => {
                println!("✓ Lexicon is valid!");
                println!("  Code: {}", lexicon.code());
                println!("  Name: {}", lexicon.name());
                println!("  Suffix rules: {}", lexicon.suffix_rules().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Lexicon is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
