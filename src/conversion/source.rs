use std::path::Path;

use super::error::RecordError;

/// Produces the molecule records stored in a file.
///
/// Every call to [`MoleculeSource::open`] starts a fresh, lazy pass over the
/// file. Records come back in file order; a record that cannot be parsed is
/// yielded as an `Err` and iteration continues with the next one.
pub trait MoleculeSource {
    type Molecule;
    type Records: Iterator<Item = Result<Self::Molecule, RecordError>>;

    fn open(&self, path: &Path) -> std::io::Result<Self::Records>;
}
