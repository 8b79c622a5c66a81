use rdkit::ROMol;

use super::error::RecordError;

/// Turns one parsed molecule into a SMILES string.
pub trait SmilesEncoder {
    type Molecule;

    fn encode(&self, molecule: &Self::Molecule) -> Result<String, RecordError>;
}

/// Canonical SMILES as written by RDKit.
#[derive(Debug, Default, Clone, Copy)]
pub struct RdkitSmilesEncoder;

impl SmilesEncoder for RdkitSmilesEncoder {
    type Molecule = ROMol;

    fn encode(&self, molecule: &ROMol) -> Result<String, RecordError> {
        Ok(molecule.as_smiles())
    }
}
