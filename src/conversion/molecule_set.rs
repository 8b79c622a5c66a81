use std::path::{Path, PathBuf};

use super::error::{ConversionError, RecordError};
use super::source::MoleculeSource;

/// Every record of one file, read in a single forward pass.
///
/// The set is owned by whoever opened the file and lent to the converter by
/// reference, so two conversions can never share or overwrite it.
#[derive(Debug)]
pub struct MoleculeSet<M> {
    path: PathBuf,
    records: Vec<Result<M, RecordError>>,
}

impl<M> MoleculeSet<M> {
    pub fn load<S>(source: &S, path: impl AsRef<Path>) -> Result<Self, ConversionError>
    where
        S: MoleculeSource<Molecule = M>,
    {
        let path = path.as_ref();
        let records = source
            .open(path)
            .map_err(|e| ConversionError::source_unreadable(path, e))?
            .collect::<Vec<_>>();

        log::debug!("read {} records from {}", records.len(), path.display());

        Ok(Self {
            path: path.to_path_buf(),
            records,
        })
    }

    pub fn from_records(path: impl Into<PathBuf>, records: Vec<Result<M, RecordError>>) -> Self {
        Self {
            path: path.into(),
            records,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn records(&self) -> &[Result<M, RecordError>] {
        &self.records
    }

    /// Number of records, parsed or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records that parsed into a molecule.
    pub fn molecule_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_ok()).count()
    }
}
