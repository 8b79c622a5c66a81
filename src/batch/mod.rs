//! Directory sweeps: one SMILES text file per input SD file.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::conversion::{BatchConverter, ConversionError, MoleculeSource, SmilesEncoder};
use crate::sdf::{matching_extension, SDF_EXTENSIONS};

pub mod console;

pub const INPUT_DIR_NAME: &str = "sdf";
pub const OUTPUT_DIR_NAME: &str = "out";
pub const OUTPUT_EXTENSION: &str = "txt";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub input_dir: PathBuf,
    pub output_dir: PathBuf,
    pub extensions: Vec<String>,
    pub output_extension: String,
}

impl BatchConfig {
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            extensions: SDF_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            output_extension: OUTPUT_EXTENSION.to_string(),
        }
    }

    /// `sdf/` and `out/` inside `base_dir`.
    pub fn in_dir(base_dir: impl AsRef<Path>) -> Self {
        let base_dir = base_dir.as_ref();
        Self::new(base_dir.join(INPUT_DIR_NAME), base_dir.join(OUTPUT_DIR_NAME))
    }

    /// `sdf/` and `out/` next to the running executable.
    pub fn beside_executable() -> eyre::Result<Self> {
        let exe = std::env::current_exe()?;
        let base_dir = exe
            .parent()
            .ok_or(eyre::eyre!("Could not find the directory of {:?}", exe))?;
        Ok(Self::in_dir(base_dir))
    }

    /// Where the SMILES of `input` are written: the file name with its SD
    /// extension replaced by the output extension.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        let file_name = input
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_default();
        let stem = match matching_extension(input, &self.extensions[..]) {
            Some(ext) => file_name
                .get(..file_name.len() - ext.len() - 1)
                .unwrap_or(&file_name)
                .to_string(),
            None => input
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or(file_name),
        };

        self.output_dir
            .join(format!("{}.{}", stem, self.output_extension))
    }
}

/// What happened to one input file.
#[derive(Debug)]
pub struct FileReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub outcome: Result<FileCounts, ConversionError>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileCounts {
    pub total: usize,
    pub written: usize,
    pub failed: usize,
}

impl FileReport {
    pub fn file_name(&self) -> String {
        self.input
            .file_name()
            .map(|f| f.to_string_lossy().to_string())
            .unwrap_or_else(|| self.input.display().to_string())
    }
}

#[derive(Debug, Default)]
pub struct BatchSummary {
    pub reports: Vec<FileReport>,
}

impl BatchSummary {
    pub fn succeeded(&self) -> usize {
        self.reports.iter().filter(|r| r.outcome.is_ok()).count()
    }

    pub fn failed(&self) -> usize {
        self.reports.len() - self.succeeded()
    }

    pub fn molecules_written(&self) -> usize {
        self.reports
            .iter()
            .filter_map(|r| r.outcome.as_ref().ok())
            .map(|c| c.written)
            .sum()
    }
}

/// Whole-file progress of a sweep, `completed * 100 / total` rounded down.
pub fn file_percent(completed: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    completed.min(total) * 100 / total
}

pub struct DirectoryDriver<S, E> {
    config: BatchConfig,
    converter: BatchConverter<S, E>,
}

impl<S, E> DirectoryDriver<S, E>
where
    S: MoleculeSource,
    E: SmilesEncoder<Molecule = S::Molecule>,
{
    pub fn new(config: BatchConfig, converter: BatchConverter<S, E>) -> Self {
        Self { config, converter }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    pub fn input_dir_exists(&self) -> bool {
        self.config.input_dir.is_dir()
    }

    /// Must succeed before any input file is touched.
    pub fn ensure_output_dir(&self) -> Result<(), ConversionError> {
        let output_dir = &self.config.output_dir;
        if output_dir.is_dir() {
            return Ok(());
        }

        log::info!("creating output directory {}", output_dir.display());
        std::fs::create_dir_all(output_dir).map_err(|e| ConversionError::OutputDirectory {
            path: output_dir.clone(),
            source: e,
        })
    }

    /// Input files accepted by the extension filter, sorted by name.
    pub fn discover(&self) -> Result<Vec<PathBuf>, ConversionError> {
        let input_dir = &self.config.input_dir;
        if !input_dir.is_dir() {
            return Err(ConversionError::InputDirectoryMissing(input_dir.clone()));
        }

        let entries = std::fs::read_dir(input_dir)
            .map_err(|e| ConversionError::source_unreadable(input_dir, e))?;

        let mut files = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| matching_extension(path, &self.config.extensions[..]).is_some())
            .collect::<Vec<_>>();
        files.sort();

        log::debug!("found {} input files in {}", files.len(), input_dir.display());

        Ok(files)
    }

    /// Converts one file and writes its SMILES. Nothing is written when the
    /// source cannot be read.
    pub fn convert_file(&self, input: &Path) -> FileReport {
        let output = self.config.output_path(input);
        let outcome = self
            .converter
            .convert(input)
            .and_then(|result| {
                write_lines(&output, &result.succeeded)?;
                Ok(FileCounts {
                    total: result.total,
                    written: result.succeeded.len(),
                    failed: result.failed_count,
                })
            });

        if let Err(e) = &outcome {
            log::error!("{}: {}", input.display(), e);
        }

        FileReport {
            input: input.to_path_buf(),
            output,
            outcome,
        }
    }

    /// Processes `files` in order. A failing file is reported and the sweep
    /// moves on. `on_file` gets `(completed, total, report)` after each file.
    pub fn process<F>(&self, files: &[PathBuf], mut on_file: F) -> BatchSummary
    where
        F: FnMut(usize, usize, &FileReport),
    {
        let mut summary = BatchSummary::default();

        for (idx, input) in files.iter().enumerate() {
            let report = self.convert_file(input);
            on_file(idx + 1, files.len(), &report);
            summary.reports.push(report);
        }

        log::info!(
            "processed {} files, {} failed, {} molecules written",
            summary.reports.len(),
            summary.failed(),
            summary.molecules_written()
        );

        summary
    }

    /// `ensure_output_dir`, `discover` and `process` in one call.
    pub fn run<F>(&self, on_file: F) -> Result<BatchSummary, ConversionError>
    where
        F: FnMut(usize, usize, &FileReport),
    {
        self.ensure_output_dir()?;
        let files = self.discover()?;
        Ok(self.process(&files, on_file))
    }
}

/// One line per entry, each newline-terminated. Creates or truncates `path`.
pub fn write_lines(path: &Path, lines: &[String]) -> Result<(), ConversionError> {
    let write = || -> std::io::Result<()> {
        let mut writer = std::io::BufWriter::new(std::fs::File::create(path)?);
        for line in lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()
    };

    write().map_err(|e| ConversionError::OutputWriteFailure {
        path: path.to_path_buf(),
        source: e,
    })
}
