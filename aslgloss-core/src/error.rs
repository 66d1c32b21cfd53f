//! Error types for lexicon loading and the sign collaborators
//!
//! Conversion itself is total and never produces an error. Everything here
//! comes from configuration, dataset files or artifact writing.

use std::path::PathBuf;
use thiserror::Error;

/// Lexicon configuration errors
#[derive(Debug, Error)]
pub enum LexiconError {
    /// The lexicon file could not be read
    #[error("failed to read lexicon {path}: {source}")]
    Io {
        /// Path of the lexicon file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The TOML document does not match the lexicon schema
    #[error("failed to parse lexicon: {0}")]
    Parse(#[from] toml::de::Error),

    /// The document parsed but violates a lexicon rule
    #[error("invalid lexicon: {0}")]
    Invalid(String),
}

/// Sign dataset errors
#[derive(Debug, Error)]
pub enum DatasetError {
    /// The metadata file could not be read
    #[error("failed to read dataset {path}: {source}")]
    Io {
        /// Path of the metadata file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The metadata file is not valid WLASL JSON
    #[error("failed to parse dataset metadata: {0}")]
    Parse(#[from] serde_json::Error),

    /// The videos directory does not exist
    #[error("videos directory not found: {0}")]
    MissingVideosDir(PathBuf),
}

/// Top-level error for the crate
#[derive(Debug, Error)]
pub enum GlossError {
    /// Lexicon error
    #[error(transparent)]
    Lexicon(#[from] LexiconError),

    /// Dataset error
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    /// A stitch was requested for an empty clip list
    #[error("no clips found for any word in the input")]
    NothingToStitch,

    /// Writing the stitched artifact failed
    #[error("stitching failed: cannot write {path}: {source}")]
    Stitch {
        /// Path of the artifact
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for lexicon operations
pub type LexiconResult<T> = std::result::Result<T, LexiconError>;

/// Result type for dataset operations
pub type DatasetResult<T> = std::result::Result<T, DatasetError>;

/// Result type for crate operations
pub type Result<T> = std::result::Result<T, GlossError>;
