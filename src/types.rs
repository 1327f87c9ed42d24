use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A file selected by the collector for export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// The full path to the file.
    pub path: PathBuf,
    /// The path relative to the export root, as printed in the output.
    pub relative: PathBuf,
}

/// Text decoded from a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decoded {
    /// The bytes were valid UTF-8.
    Utf8(String),
    /// The bytes were not valid UTF-8 and were read as Latin-1 instead.
    Latin1(String),
}

impl Decoded {
    pub fn text(&self) -> &str {
        match self {
            Decoded::Utf8(text) | Decoded::Latin1(text) => text,
        }
    }

    /// The informational note attached to fallback decodes.
    pub fn note(&self) -> Option<&'static str> {
        match self {
            Decoded::Utf8(_) => None,
            Decoded::Latin1(_) => Some("NOTE (decoded as latin-1 with replacements)"),
        }
    }
}

/// Why a candidate's content was left out of the export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The file is larger than the configured byte limit. It was never opened.
    TooLarge { size: u64, limit: u64 },
    /// The sampled prefix looked binary.
    Binary,
    /// Any I/O failure while inspecting or reading the file.
    Read(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::TooLarge { size, limit } => {
                write!(f, "IGNORED (size {} > {} bytes)", size, limit)
            }
            SkipReason::Binary => f.write_str("IGNORED (binary file)"),
            SkipReason::Read(message) => write!(f, "IGNORED (error reading: {})", message),
        }
    }
}

/// The result of loading one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Decoded),
    Skipped(SkipReason),
}

impl LoadOutcome {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadOutcome::Loaded(_))
    }
}

/// A candidate that produced a skip block.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Totals reported once an export has been written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Where the export was written.
    pub output: PathBuf,
    /// Number of candidate files, which is also the number of file blocks.
    pub total: usize,
    /// Number of candidates whose content was embedded.
    pub written: usize,
    /// Candidates left out, with the reason printed in their block.
    pub skipped: Vec<SkippedFile>,
}
