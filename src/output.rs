//! Writing the export document.
//!
//! The document is a header, an optional table of contents and one block per
//! candidate, in candidate order. Skipped candidates get a start marker that
//! names the reason and no body; loaded candidates get the wrapped body
//! between separators and an end marker.

use crate::collect::collect_candidates;
use crate::error::ExportError;
use crate::loader::load_file;
use crate::options::ExportOptions;
use crate::types::{Candidate, ExportSummary, LoadOutcome, SkippedFile};
use crate::wrap::{WRAP_WIDTH, split_lines, wrap_line};
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use tracing::{debug, info};

const DOCUMENT_MARKER: &str = "# TEXT EXPORT OF PROJECT";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

fn rule(c: char) -> String {
    std::iter::repeat_n(c, 80).collect()
}

/// Runs a full export: collect, then load and write each candidate in turn.
///
/// # Errors
///
/// Returns [`ExportError::RootNotDirectory`] before anything is created when
/// the root is not a directory, and [`ExportError::Io`] when the output file
/// cannot be created or written. Problems with individual input files are
/// never errors; they end up as skip blocks.
pub fn export(options: &ExportOptions) -> Result<ExportSummary, ExportError> {
    if !options.root.is_dir() {
        return Err(ExportError::RootNotDirectory(options.root.clone()));
    }
    info!("exporting {}", options.root.display());
    let candidates: Vec<Candidate> = collect_candidates(options)
        .into_iter()
        .filter(|candidate| candidate.path != options.output)
        .collect();
    if let Some(parent) = options.output.parent() {
        fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }
    let file = File::create(&options.output).map_err(|e| ExportError::io(&options.output, e))?;
    let mut out = BufWriter::new(file);
    let generated = chrono::Local::now().format(TIMESTAMP_FORMAT).to_string();
    let summary = write_export(&mut out, options, &candidates, &generated)
        .and_then(|summary| out.flush().map(|_| summary))
        .map_err(|e| ExportError::io(&options.output, e))?;
    info!(
        "wrote {}/{} files to {}",
        summary.written,
        summary.total,
        options.output.display()
    );
    Ok(summary)
}

/// Writes the document for an already collected candidate list.
///
/// `generated` is printed verbatim on the header's timestamp line.
pub fn write_export<W: Write>(
    out: &mut W,
    options: &ExportOptions,
    candidates: &[Candidate],
    generated: &str,
) -> io::Result<ExportSummary> {
    write_header(out, options, candidates, generated)?;
    let mut written = 0;
    let mut skipped = Vec::new();
    for candidate in candidates {
        let outcome = load_file(
            &candidate.path,
            options.max_bytes,
            options.binary_detection,
        );
        write_file_block(out, candidate, &outcome)?;
        match outcome {
            LoadOutcome::Loaded(_) => written += 1,
            LoadOutcome::Skipped(reason) => skipped.push(SkippedFile {
                path: candidate.relative.clone(),
                reason: reason.to_string(),
            }),
        }
    }
    Ok(ExportSummary {
        output: options.output.clone(),
        total: candidates.len(),
        written,
        skipped,
    })
}

fn write_header<W: Write>(
    out: &mut W,
    options: &ExportOptions,
    candidates: &[Candidate],
    generated: &str,
) -> io::Result<()> {
    writeln!(out, "{}", DOCUMENT_MARKER)?;
    writeln!(out, "Root: {}", options.root.display())?;
    writeln!(out, "Generated: {}", generated)?;
    writeln!(out, "Files found: {}", candidates.len())?;
    writeln!(out, "{}\n", rule('#'))?;
    if options.table_of_contents {
        writeln!(out, "TABLE OF CONTENTS")?;
        for (i, candidate) in candidates.iter().enumerate() {
            writeln!(out, "{:04}. {}", i + 1, candidate.relative.display())?;
        }
        writeln!(out, "\n{}\n", rule('#'))?;
    }
    Ok(())
}

fn write_file_block<W: Write>(
    out: &mut W,
    candidate: &Candidate,
    outcome: &LoadOutcome,
) -> io::Result<()> {
    let rel = candidate.relative.display();
    let separator = rule('-');
    let decoded = match outcome {
        LoadOutcome::Skipped(reason) => {
            debug!("skipped {}: {}", rel, reason);
            writeln!(out, "===== FILE: {} ({}) =====", rel, reason)?;
            return writeln!(out, "{}\n", separator);
        }
        LoadOutcome::Loaded(decoded) => decoded,
    };
    match decoded.note() {
        Some(note) => writeln!(out, "===== FILE: {} ({}) =====", rel, note)?,
        None => writeln!(out, "===== FILE: {} =====", rel)?,
    }
    writeln!(out, "{}", separator)?;
    for line in split_lines(decoded.text()) {
        writeln!(out, "{}", wrap_line(line, WRAP_WIDTH).join("\n"))?;
    }
    writeln!(out, "{}", separator)?;
    writeln!(out, "===== END FILE: {} =====\n", rel)?;
    debug!("wrote {}", rel);
    Ok(())
}
