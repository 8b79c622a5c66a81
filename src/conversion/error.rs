use std::path::PathBuf;

use thiserror::Error;

/// Why a single record could not be turned into SMILES.
///
/// Record failures are counted by the converter and never abort a file.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("could not parse mol block: {0}")]
    Parse(String),

    #[error("could not read record: {0}")]
    Read(#[from] std::io::Error),

    #[error("could not encode SMILES: {0}")]
    Encode(String),

    #[error("encoder returned an empty SMILES string")]
    EmptySmiles,
}

#[derive(Debug, Error)]
pub enum ConversionError {
    #[error("could not open '{}': {source}", path.display())]
    SourceUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not write '{}': {source}", path.display())]
    OutputWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not create output directory '{}': {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("directory '{}' does not exist", .0.display())]
    InputDirectoryMissing(PathBuf),
}

impl ConversionError {
    pub fn source_unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SourceUnreadable {
            path: path.into(),
            source,
        }
    }
}
