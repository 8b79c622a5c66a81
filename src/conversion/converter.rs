use std::path::Path;

use serde::Serialize;

use super::encoder::SmilesEncoder;
use super::error::{ConversionError, RecordError};
use super::molecule_set::MoleculeSet;
use super::source::MoleculeSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressEvent {
    pub percent: u8,
}

/// Outcome of a single record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionRecord {
    pub index: usize,
    pub smiles: Option<String>,
    pub failed: bool,
}

impl ConversionRecord {
    pub fn success(index: usize, smiles: String) -> Self {
        Self {
            index,
            smiles: Some(smiles),
            failed: false,
        }
    }

    pub fn failure(index: usize) -> Self {
        Self {
            index,
            smiles: None,
            failed: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionResult {
    pub total: usize,
    pub succeeded: Vec<String>,
    pub failed_count: usize,
}

impl ConversionResult {
    pub fn record(&mut self, record: ConversionRecord) {
        self.total += 1;
        match record.smiles {
            Some(smiles) if !record.failed => self.succeeded.push(smiles),
            _ => self.failed_count += 1,
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.succeeded.len() + self.failed_count == self.total
    }
}

/// `round(processed * 100 / total)`, in integers.
pub fn percent_complete(processed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let processed = processed.min(total) as u128;
    let total = total as u128;
    ((processed * 200 + total) / (2 * total)) as u8
}

/// Encodes every record of `molecules` in order.
///
/// A failed record is counted and skipped; it never stops the loop.
/// `on_progress` runs once after each record when the set is not empty.
pub fn convert_molecules<E, F>(
    encoder: &E,
    molecules: &MoleculeSet<E::Molecule>,
    mut on_progress: F,
) -> ConversionResult
where
    E: SmilesEncoder + ?Sized,
    F: FnMut(ProgressEvent),
{
    let total = molecules.len();
    let mut result = ConversionResult::default();

    for (index, record) in molecules.records().iter().enumerate() {
        let outcome = record
            .as_ref()
            .map_err(|e| e.to_string())
            .and_then(|molecule| match encoder.encode(molecule) {
                Ok(smiles) if smiles.is_empty() => Err(RecordError::EmptySmiles.to_string()),
                Ok(smiles) => Ok(smiles),
                Err(e) => Err(e.to_string()),
            });

        let converted = match outcome {
            Ok(smiles) => ConversionRecord::success(index, smiles),
            Err(reason) => {
                log::warn!(
                    "error converting molecule {} of {}: {}",
                    index + 1,
                    molecules.path().display(),
                    reason
                );
                ConversionRecord::failure(index)
            }
        };
        result.record(converted);

        on_progress(ProgressEvent {
            percent: percent_complete(index + 1, total),
        });
    }

    result
}

/// Converts the molecule records of one file into SMILES strings.
pub struct BatchConverter<S, E> {
    source: S,
    encoder: E,
}

impl<S, E> BatchConverter<S, E>
where
    S: MoleculeSource,
    E: SmilesEncoder<Molecule = S::Molecule>,
{
    pub fn new(source: S, encoder: E) -> Self {
        Self { source, encoder }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn encoder(&self) -> &E {
        &self.encoder
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<MoleculeSet<S::Molecule>, ConversionError> {
        MoleculeSet::load(&self.source, path)
    }

    pub fn convert(&self, path: impl AsRef<Path>) -> Result<ConversionResult, ConversionError> {
        self.convert_with_progress(path, |_| {})
    }

    /// Fails only when the file itself cannot be opened.
    pub fn convert_with_progress<F>(
        &self,
        path: impl AsRef<Path>,
        on_progress: F,
    ) -> Result<ConversionResult, ConversionError>
    where
        F: FnMut(ProgressEvent),
    {
        let molecules = self.load(path)?;
        Ok(self.convert_set(&molecules, on_progress))
    }

    pub fn convert_set<F>(&self, molecules: &MoleculeSet<S::Molecule>, on_progress: F) -> ConversionResult
    where
        F: FnMut(ProgressEvent),
    {
        let result = convert_molecules(&self.encoder, molecules, on_progress);

        log::info!(
            "converted {}: {} of {} records, {} failed",
            molecules.path().display(),
            result.succeeded.len(),
            result.total,
            result.failed_count
        );

        result
    }
}
