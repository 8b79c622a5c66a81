//! State behind the interactive surface: one selected file, one conversion
//! at a time, a result list and a "copy all" text.
//!
//! Conversions run on a blocking task and report back through a channel.
//! The front end owns the update loop: it receives [`ConversionEvent`]s and
//! hands them to [`InteractivePresenter::apply`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};

use crate::conversion::{
    convert_molecules, ConversionResult, MoleculeSet, MoleculeSource, ProgressEvent,
    SmilesEncoder,
};
use crate::sdf::is_sdf_file;

mod error;
pub use error::PresenterError;

#[derive(Debug)]
pub enum ConversionEvent<M> {
    Progress(ProgressEvent),
    Finished {
        molecules: Option<MoleculeSet<M>>,
        outcome: Result<ConversionResult, String>,
    },
}

/// What a front end needs to draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PresenterView {
    pub file: Option<PathBuf>,
    pub molecule_count: usize,
    pub converting: bool,
    pub percent: u8,
    pub convert_enabled: bool,
    pub copy_enabled: bool,
    pub result_count: usize,
    pub last_error: Option<String>,
}

pub struct InteractivePresenter<S: MoleculeSource, E> {
    source: S,
    encoder: Arc<E>,
    file: Option<PathBuf>,
    molecules: Option<MoleculeSet<S::Molecule>>,
    molecule_count: usize,
    converting: bool,
    percent: u8,
    results: Vec<String>,
    last_error: Option<String>,
}

impl<S, E> InteractivePresenter<S, E>
where
    S: MoleculeSource,
    S::Molecule: Send + 'static,
    E: SmilesEncoder<Molecule = S::Molecule> + Send + Sync + 'static,
{
    pub fn new(source: S, encoder: E) -> Self {
        Self {
            source,
            encoder: Arc::new(encoder),
            file: None,
            molecules: None,
            molecule_count: 0,
            converting: false,
            percent: 0,
            results: Vec::new(),
            last_error: None,
        }
    }

    pub fn view(&self) -> PresenterView {
        PresenterView {
            file: self.file.clone(),
            molecule_count: self.molecule_count,
            converting: self.converting,
            percent: self.percent,
            convert_enabled: self.convert_enabled(),
            copy_enabled: self.copy_enabled(),
            result_count: self.results.len(),
            last_error: self.last_error.clone(),
        }
    }

    pub fn convert_enabled(&self) -> bool {
        !self.converting && self.molecule_count > 0
    }

    pub fn copy_enabled(&self) -> bool {
        !self.converting && !self.results.is_empty()
    }

    pub fn is_converting(&self) -> bool {
        self.converting
    }

    pub fn molecule_count(&self) -> usize {
        self.molecule_count
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Loads every record of `path`, replacing the previous selection and
    /// results. Refused while a conversion is running.
    pub fn select_file(&mut self, path: impl AsRef<Path>) -> Result<usize, PresenterError> {
        if self.converting {
            return Err(PresenterError::ConversionInFlight);
        }

        let path = path.as_ref();

        self.results.clear();
        self.percent = 0;

        let loaded = if is_sdf_file(path) {
            MoleculeSet::load(&self.source, path).map_err(PresenterError::from)
        } else {
            Err(PresenterError::UnsupportedFile(path.to_path_buf()))
        };

        match loaded {
            Ok(molecules) => {
                self.molecule_count = molecules.molecule_count();
                log::info!(
                    "selected {}: {} molecules in {} records",
                    path.display(),
                    self.molecule_count,
                    molecules.len()
                );
                self.file = Some(path.to_path_buf());
                self.molecules = Some(molecules);
                self.last_error = None;
                Ok(self.molecule_count)
            }
            Err(e) => {
                log::error!("could not load {}: {}", path.display(), e);
                self.file = None;
                self.molecules = None;
                self.molecule_count = 0;
                self.last_error = Some(format!("Error reading SDF file: {}", e));
                Err(e)
            }
        }
    }

    /// Starts converting the selected file on a blocking task. Must be
    /// called from within a tokio runtime.
    ///
    /// The receiver yields one `Progress` per record, in order, then a
    /// single `Finished`.
    pub fn start_conversion(
        &mut self,
    ) -> Result<UnboundedReceiver<ConversionEvent<S::Molecule>>, PresenterError> {
        if self.converting {
            return Err(PresenterError::ConversionInFlight);
        }
        if self.molecule_count == 0 {
            return Err(PresenterError::NoMolecules);
        }
        let molecules = self.molecules.take().ok_or(PresenterError::NoMolecules)?;

        self.converting = true;
        self.percent = 0;
        self.results.clear();
        self.last_error = None;

        let (tx, rx) = unbounded_channel();
        let encoder = self.encoder.clone();
        let progress_tx = tx.clone();

        let task = tokio::task::spawn_blocking(move || {
            let result = convert_molecules(encoder.as_ref(), &molecules, |event| {
                let _ = progress_tx.send(ConversionEvent::Progress(event));
            });
            (molecules, result)
        });

        tokio::spawn(async move {
            let event = match task.await {
                Ok((molecules, result)) => ConversionEvent::Finished {
                    molecules: Some(molecules),
                    outcome: Ok(result),
                },
                Err(e) => ConversionEvent::Finished {
                    molecules: None,
                    outcome: Err(e.to_string()),
                },
            };
            let _ = tx.send(event);
        });

        Ok(rx)
    }

    pub fn apply(&mut self, event: ConversionEvent<S::Molecule>) {
        match event {
            ConversionEvent::Progress(progress) => {
                self.percent = progress.percent;
            }
            ConversionEvent::Finished { molecules, outcome } => {
                self.converting = false;
                match molecules {
                    Some(molecules) => self.molecules = Some(molecules),
                    None => {
                        self.file = None;
                        self.molecule_count = 0;
                    }
                }

                match outcome {
                    Ok(result) => {
                        log::info!(
                            "conversion finished: {} SMILES, {} failed",
                            result.succeeded.len(),
                            result.failed_count
                        );
                        self.results = result.succeeded;
                    }
                    Err(e) => {
                        log::error!("conversion failed: {}", e);
                        self.last_error = Some(format!("Error during conversion: {}", e));
                    }
                }
            }
        }
    }

    /// Starts a conversion and applies its events until it finishes.
    pub async fn run_to_completion(&mut self) -> Result<&[String], PresenterError> {
        let mut events = self.start_conversion()?;
        while let Some(event) = events.recv().await {
            let finished = matches!(event, ConversionEvent::Finished { .. });
            self.apply(event);
            if finished {
                break;
            }
        }
        Ok(&self.results)
    }

    /// Every result, newline-joined, ready for the system clipboard.
    pub fn clipboard_text(&self) -> Result<String, PresenterError> {
        if !self.copy_enabled() {
            return Err(PresenterError::NothingToCopy);
        }
        Ok(self.results.join("\n"))
    }
}
