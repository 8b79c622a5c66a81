mod converter;
mod encoder;
mod error;
mod molecule_set;
mod source;

pub use converter::{
    convert_molecules, percent_complete, BatchConverter, ConversionRecord, ConversionResult,
    ProgressEvent,
};
pub use encoder::{RdkitSmilesEncoder, SmilesEncoder};
pub use error::{ConversionError, RecordError};
pub use molecule_set::MoleculeSet;
pub use source::MoleculeSource;
