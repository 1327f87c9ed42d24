//! # projtxt
//!
//! `projtxt` walks a project directory and concatenates the text files it finds into a
//! single plain-text export, with a header block per file, size and binary filtering,
//! encoding-tolerant reading and an optional table of contents.
//!
//! The pipeline runs strictly forward and on one thread:
//!
//! 1. [`ExportBuilder`] resolves an [`ExportOptions`] on top of the default
//!    include and exclude sets.
//! 2. [`collect_candidates`] walks the root in a stable order and returns the
//!    files to export.
//! 3. [`load_file`] turns each candidate into decoded text or a [`SkipReason`].
//! 4. [`export`] writes the document, loading and writing one file at a time.
//!
//! # Include replaces, exclude adds
//!
//! Passing extensions to [`ExportBuilder::include_extensions`] **replaces** the
//! default extension set, while [`ExportBuilder::exclude_dirs`] **adds** to the
//! default excluded directories. This asymmetry is intentional.
//!
//! # Example
//!
//! ```no_run
//! use projtxt::{ExportBuilder, export};
//!
//! let options = ExportBuilder::new("./my_project", "./export.txt")
//!     .include_extensions(["rs", "toml", "md"])
//!     .exclude_dirs(["fixtures"])
//!     .max_bytes(2 * 1024 * 1024)
//!     .table_of_contents(true)
//!     .build();
//!
//! let summary = export(&options).expect("export failed");
//! println!("{}/{} files written", summary.written, summary.total);
//! ```
//!
//! # Known limitations
//!
//! Binary detection only samples the first 2048 bytes of a file, so NUL bytes
//! further in are not seen. Symlinked directories are not followed.

mod collect;
mod error;
mod loader;
mod options;
pub mod output;
mod types;
pub mod wrap;

pub use collect::{collect_candidates, should_include};
pub use error::ExportError;
pub use loader::{BINARY_SAMPLE_SIZE, decode, load_file};
pub use options::{
    BinaryDetection, DEFAULT_EXCLUDE_DIRS, DEFAULT_INCLUDE_EXTENSIONS, DEFAULT_MAX_BYTES,
    DEFAULT_OUTPUT_NAME, ExportBuilder, ExportOptions, SPECIAL_FILENAMES, absolutize, split_list,
};
pub use output::{export, write_export};
pub use types::{Candidate, Decoded, ExportSummary, LoadOutcome, SkipReason, SkippedFile};
