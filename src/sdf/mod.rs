//! Reading molecule records out of SD files.
//!
//! [`MolBlocks`] only frames the text into records; turning a mol block into
//! a molecule is left to RDKit.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use flate2::bufread::GzDecoder;
use rdkit::{ROMol, RWMol};

use crate::conversion::{MoleculeSource, RecordError};

pub const RECORD_DELIMITER: &str = "$$$$";

pub const SDF_EXTENSIONS: [&str; 2] = ["sdf", "sdf.gz"];

/// Splits SDF text into mol blocks, one per `$$$$`-terminated record.
///
/// A trailing record without a delimiter is still yielded. Blocks made only
/// of whitespace are skipped. After a read error the iterator is exhausted.
pub struct MolBlocks<R> {
    reader: R,
    done: bool,
}

impl<R: BufRead> MolBlocks<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for MolBlocks<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut block = String::new();
        let mut line = Vec::new();

        loop {
            line.clear();
            match self.reader.read_until(b'\n', &mut line) {
                Ok(0) => {
                    self.done = true;
                    if block.trim().is_empty() {
                        return None;
                    }
                    return Some(Ok(block));
                }
                Ok(_) => {
                    let text = String::from_utf8_lossy(&line);
                    if text.trim_end() == RECORD_DELIMITER {
                        if block.trim().is_empty() {
                            block.clear();
                            continue;
                        }
                        return Some(Ok(block));
                    }
                    block.push_str(&text);
                }
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            }
        }
    }
}

/// RDKit mol block parser flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseOptions {
    pub sanitize: bool,
    pub remove_hs: bool,
    pub strict_parsing: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            sanitize: true,
            remove_hs: true,
            strict_parsing: true,
        }
    }
}

impl ParseOptions {
    /// Reads a user supplied `sanitize` flag. Empty, `false` and `no` turn
    /// sanitization and hydrogen removal off.
    pub fn from_sanitize_flag(flag: &str) -> Self {
        match flag.trim().to_lowercase().as_str() {
            "" | "false" | "no" => Self {
                sanitize: false,
                remove_hs: false,
                strict_parsing: false,
            },
            _ => Self {
                sanitize: true,
                remove_hs: true,
                strict_parsing: false,
            },
        }
    }
}

pub fn parse_mol_block(mol_block: &str, options: &ParseOptions) -> Result<ROMol, RecordError> {
    RWMol::from_mol_block(
        mol_block,
        options.sanitize,
        options.remove_hs,
        options.strict_parsing,
    )
    .map(|rw_mol| rw_mol.to_ro_mol())
    .ok_or_else(|| RecordError::Parse(describe_block(mol_block)))
}

fn describe_block(mol_block: &str) -> String {
    let title = mol_block
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");
    format!("rejected mol block '{}'", title)
}

/// Returns the entry of `extensions` that `path`'s file name ends with,
/// ignoring case. The longest match wins.
pub fn matching_extension<'a, T>(path: &Path, extensions: &'a [T]) -> Option<&'a str>
where
    T: AsRef<str>,
{
    let file_name = path.file_name()?.to_str()?.to_lowercase();

    extensions
        .iter()
        .map(|e| e.as_ref())
        .filter(|e| {
            let suffix = format!(".{}", e.trim_start_matches('.').to_lowercase());
            file_name.len() > suffix.len() && file_name.ends_with(&suffix)
        })
        .max_by_key(|e| e.len())
}

pub fn is_sdf_file(path: &Path) -> bool {
    matching_extension(path, &SDF_EXTENSIONS[..]).is_some()
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Molecule records of `.sdf` and `.sdf.gz` files, parsed by RDKit.
#[derive(Debug, Default, Clone, Copy)]
pub struct SdfSource {
    options: ParseOptions,
}

impl SdfSource {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }
}

/// Mol blocks of a plain or gzipped SD file.
///
/// Gzip is picked by the `.gz` suffix. A corrupt gzip stream shows up as a
/// read error from the iterator, not when opening.
pub fn read_mol_blocks(path: &Path) -> std::io::Result<MolBlocks<Box<dyn BufRead>>> {
    if !std::fs::metadata(path)?.is_file() {
        return Err(std::io::Error::new(
            ErrorKind::InvalidInput,
            "not a regular file",
        ));
    }

    let reader = BufReader::new(File::open(path)?);
    let reader: Box<dyn BufRead> = if is_gzip(path) {
        Box::new(BufReader::new(GzDecoder::new(reader)))
    } else {
        Box::new(reader)
    };

    Ok(MolBlocks::new(reader))
}

impl MoleculeSource for SdfSource {
    type Molecule = ROMol;
    type Records = Box<dyn Iterator<Item = Result<ROMol, RecordError>>>;

    fn open(&self, path: &Path) -> std::io::Result<Self::Records> {
        let options = self.options;

        Ok(Box::new(read_mol_blocks(path)?.map(move |block| {
            let block = block?;
            parse_mol_block(&block, &options)
        })))
    }
}
