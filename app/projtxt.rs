//! Command-line interface for projtxt.
//!
//! Walks a project directory and writes every matching text file into a single
//! export, then reports how many files made it in.

use clap::{Parser, ValueEnum};
use projtxt::{
    BinaryDetection, DEFAULT_OUTPUT_NAME, ExportBuilder, ExportOptions, ExportSummary,
    absolutize, export, split_list,
};
use std::io;
use std::path::{Path, PathBuf};
use std::process::exit;
use tracing_subscriber::EnvFilter;

/// projtxt — concatenate a project's text files into one export
#[derive(Parser)]
#[command(name = "projtxt", version, about, long_about = None)]
struct Cli {
    /// Root directory (default: the directory containing this program)
    root: Option<PathBuf>,

    /// Output file (default: local.txt next to this program)
    output: Option<PathBuf>,

    /// Files larger than this many bytes are listed but not embedded
    #[arg(long, default_value_t = projtxt::DEFAULT_MAX_BYTES)]
    max_bytes: u64,

    /// Comma-separated extensions to include; replaces the default set
    #[arg(long, default_value = "")]
    include: String,

    /// Comma-separated directory names to skip; added to the default set
    #[arg(long, default_value = "")]
    exclude_dirs: String,

    /// Prepend a numbered table of contents
    #[arg(long)]
    toc: bool,

    /// Binary detection strategy
    #[arg(long, value_enum, default_value_t = Detection::Simple)]
    binary_detection: Detection,

    /// Print the summary as JSON
    #[arg(long)]
    json: bool,

    /// Log per-file decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Detection {
    Simple,
    Accurate,
    #[value(name = "none")]
    Off,
}

impl From<Detection> for BinaryDetection {
    fn from(value: Detection) -> Self {
        match value {
            Detection::Simple => BinaryDetection::Simple,
            Detection::Accurate => BinaryDetection::Accurate,
            Detection::Off => BinaryDetection::None,
        }
    }
}

impl Cli {
    fn into_options(self) -> io::Result<ExportOptions> {
        let program_dir = program_dir()?;
        let root = absolutize(self.root.as_deref().unwrap_or(&program_dir))?;
        let output = match self.output {
            Some(output) => absolutize(&output)?,
            None => absolutize(&program_dir.join(DEFAULT_OUTPUT_NAME))?,
        };
        Ok(ExportBuilder::new(root, output)
            .max_bytes(self.max_bytes)
            .include_extensions(split_list(&self.include))
            .exclude_dirs(split_list(&self.exclude_dirs))
            .table_of_contents(self.toc)
            .binary_detection(self.binary_detection.into())
            .build())
    }
}

fn program_dir() -> io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    Ok(exe.parent().map(Path::to_path_buf).unwrap_or_default())
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("projtxt=debug")
        } else {
            EnvFilter::new("projtxt=warn")
        }
    });
    // Only fails if a subscriber is already installed.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let json = cli.json;
    let options = match cli.into_options() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(1);
        }
    };

    match export(&options) {
        Ok(summary) => report(&summary, json),
        Err(e) => {
            eprintln!("ERROR: {}", e);
            exit(1);
        }
    }
}

fn report(summary: &ExportSummary, json: bool) {
    if json {
        let json = serde_json::to_string_pretty(summary).unwrap_or_else(|e| {
            eprintln!("JSON serialization error: {}", e);
            exit(1);
        });
        println!("{}", json);
        return;
    }
    println!("Export complete: {}", summary.output.display());
    println!(
        "Files successfully written: {}/{}",
        summary.written, summary.total
    );
}
