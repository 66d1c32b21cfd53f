//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod convert;
pub mod dataset;
pub mod generate_config;
pub mod list;
pub mod lookup;
pub mod plan;
pub mod validate;
pub mod words;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert English text to ASL gloss
    Convert(convert::ConvertArgs),

    /// Plan the sign clips for a sentence
    Plan(plan::PlanArgs),

    /// Look up sign clips for single words
    Lookup(lookup::LookupArgs),

    /// List the words in the sign dataset
    Words(words::WordsArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a lexicon file
    Validate(validate::ValidateArgs),

    /// Generate a lexicon or CLI configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Convert(args) => args.execute(),
            Commands::Plan(args) => args.execute(),
            Commands::Lookup(args) => args.execute(),
            Commands::Words(args) => args.execute(),
            Commands::List { subcommand } => subcommand.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

/// Initialize logging based on verbosity level
pub(crate) fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // A logger may already be installed when commands run in-process
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}
