//! The interactive console around a directory sweep: confirmation prompt,
//! one status line and one progress bar per file, and a keypress wait
//! before exiting.

use std::io::{BufRead, Write};

use super::{file_percent, BatchSummary, DirectoryDriver, FileReport};
use crate::conversion::{MoleculeSource, SmilesEncoder};

const BAR_WIDTH: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConsoleOptions {
    /// Skip the confirmation prompt.
    pub assume_yes: bool,
    /// Wait for Enter before returning.
    pub wait_for_key: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            assume_yes: false,
            wait_for_key: true,
        }
    }
}

#[derive(Debug)]
pub enum ConsoleOutcome {
    MissingInputDirectory,
    Cancelled,
    NoInputFiles,
    Completed(BatchSummary),
}

/// `[=====>     ] 50%`
pub fn render_progress_bar(percent: usize) -> String {
    let percent = percent.min(100);
    let filled = percent / 10;
    format!(
        "[{}>{}] {}%",
        "=".repeat(filled),
        " ".repeat(BAR_WIDTH - filled),
        percent
    )
}

pub fn render_status_line(report: &FileReport) -> String {
    match &report.outcome {
        Ok(counts) => format!(
            "Processed '{}': {} molecules written to '{}'",
            report.file_name(),
            counts.written,
            report.output.display()
        ),
        Err(e) => format!("Error processing '{}': {}", report.file_name(), e),
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self {
            input,
            output,
            options,
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the whole sweep. Only a failure to create the output directory
    /// is returned as an error; it happens before any input file is read.
    pub fn run<S, E>(&mut self, driver: &DirectoryDriver<S, E>) -> eyre::Result<ConsoleOutcome>
    where
        S: MoleculeSource,
        E: SmilesEncoder<Molecule = S::Molecule>,
    {
        let input_dir = driver.config().input_dir.display().to_string();

        if !driver.input_dir_exists() {
            writeln!(self.output, "Error: Directory '{}' does not exist.", input_dir)?;
            self.pause("Press any key to exit...")?;
            return Ok(ConsoleOutcome::MissingInputDirectory);
        }

        if let Err(e) = driver.ensure_output_dir() {
            writeln!(self.output, "Error: {}", e)?;
            return Err(e.into());
        }

        if !self.options.assume_yes && !self.confirm(&input_dir)? {
            self.pause("Operation cancelled. Press any key to exit...")?;
            return Ok(ConsoleOutcome::Cancelled);
        }

        let files = driver.discover()?;
        if files.is_empty() {
            self.pause(&format!(
                "No SDF files found in '{}'. Press any key to exit...",
                input_dir
            ))?;
            return Ok(ConsoleOutcome::NoInputFiles);
        }

        writeln!(
            self.output,
            "Found {} SDF file(s). Starting processing...",
            files.len()
        )?;

        let output = &mut self.output;
        let summary = driver.process(&files, |completed, total, report| {
            let _ = writeln!(output, "{}", render_status_line(report));
            let _ = writeln!(
                output,
                "{}",
                render_progress_bar(file_percent(completed, total))
            );
        });

        self.pause("Processing completed. Press any key to exit...")?;

        Ok(ConsoleOutcome::Completed(summary))
    }

    fn confirm(&mut self, input_dir: &str) -> eyre::Result<bool> {
        writeln!(self.output, "Process all SDF files in '{}'? (y/n)", input_dir)?;
        self.output.flush()?;

        let mut response = String::new();
        self.input.read_line(&mut response)?;

        Ok(response.trim().eq_ignore_ascii_case("y"))
    }

    fn pause(&mut self, message: &str) -> eyre::Result<()> {
        writeln!(self.output, "{}", message)?;
        self.output.flush()?;

        if self.options.wait_for_key {
            let mut line = String::new();
            self.input.read_line(&mut line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_bar() {
        assert_eq!(render_progress_bar(0), "[>          ] 0%");
        assert_eq!(render_progress_bar(50), "[=====>     ] 50%");
        assert_eq!(render_progress_bar(66), "[======>    ] 66%");
        assert_eq!(render_progress_bar(100), "[==========>] 100%");
    }
}
