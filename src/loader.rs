//! Reading candidate files into text.
//!
//! Loading never fails as a whole: every problem with a single file is turned
//! into a [`SkipReason`] so the export can carry on with the next candidate.

use crate::options::BinaryDetection;
use crate::types::{Decoded, LoadOutcome, SkipReason};
use std::fs::{self, File};
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Number of leading bytes inspected by the binary sniff.
///
/// NUL bytes past this prefix go unnoticed and the file is exported as text.
pub const BINARY_SAMPLE_SIZE: u64 = 2048;

// Initial read buffer; `read_to_end` grows it past this.
const INITIAL_BUFFER_CAP: u64 = BINARY_SAMPLE_SIZE * 32;

/// Loads one file, deciding on size and content whether it is exported.
///
/// The size check runs first and does not open the file, so oversized files
/// are never read.
pub fn load_file(path: &Path, max_bytes: u64, binary_detection: BinaryDetection) -> LoadOutcome {
    match try_load(path, max_bytes, binary_detection) {
        Ok(outcome) => outcome,
        Err(e) => {
            debug!("read error on {}: {}", path.display(), e);
            LoadOutcome::Skipped(SkipReason::Read(e.to_string()))
        }
    }
}

fn try_load(
    path: &Path,
    max_bytes: u64,
    binary_detection: BinaryDetection,
) -> io::Result<LoadOutcome> {
    let size = fs::metadata(path)?.len();
    if size > max_bytes {
        debug!(
            "file too large ({} > {}), skipping {}",
            size,
            max_bytes,
            path.display()
        );
        return Ok(LoadOutcome::Skipped(SkipReason::TooLarge {
            size,
            limit: max_bytes,
        }));
    }
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut bytes = Vec::with_capacity(size.min(INITIAL_BUFFER_CAP) as usize);
    reader
        .by_ref()
        .take(BINARY_SAMPLE_SIZE)
        .read_to_end(&mut bytes)?;
    if looks_binary(&bytes, binary_detection) {
        debug!("binary file detected: {}", path.display());
        return Ok(LoadOutcome::Skipped(SkipReason::Binary));
    }
    reader.read_to_end(&mut bytes)?;
    let decoded = decode(bytes);
    if decoded.note().is_some() {
        warn!("{} is not valid UTF-8, decoded as Latin-1", path.display());
    }
    Ok(LoadOutcome::Loaded(decoded))
}

fn looks_binary(sample: &[u8], binary_detection: BinaryDetection) -> bool {
    match binary_detection {
        BinaryDetection::Simple => sample.contains(&0),
        BinaryDetection::Accurate => content_inspector::inspect(sample).is_binary(),
        BinaryDetection::None => false,
    }
}

/// Decodes as UTF-8, falling back to Latin-1 which accepts every byte sequence.
pub fn decode(bytes: Vec<u8>) -> Decoded {
    match String::from_utf8(bytes) {
        Ok(text) => Decoded::Utf8(text),
        Err(e) => Decoded::Latin1(e.into_bytes().into_iter().map(char::from).collect()),
    }
}
