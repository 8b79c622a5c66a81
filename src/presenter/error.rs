use std::path::PathBuf;

use thiserror::Error;

use crate::conversion::ConversionError;

/// Actions the presenter refuses in its current state, plus file errors.
#[derive(Debug, Error)]
pub enum PresenterError {
    #[error(transparent)]
    Conversion(#[from] ConversionError),

    #[error("'{}' is not an SDF file", .0.display())]
    UnsupportedFile(PathBuf),

    #[error("a conversion is already running")]
    ConversionInFlight,

    #[error("No molecules to convert.")]
    NoMolecules,

    #[error("no SMILES to copy")]
    NothingToCopy,
}
