use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Extensions exported when `--include` is not given.
pub const DEFAULT_INCLUDE_EXTENSIONS: &[&str] = &[
    "py", "js", "ts", "tsx", "jsx", "html", "css", "md", "markdown", "txt", "yml", "yaml", "json",
    "xml", "xsd", "properties", "ini", "cfg", "conf", "sql", "sh", "bash", "ksh", "bat", "groovy",
    "kt", "gradle", "rb", "go", "c", "cc", "cpp", "h", "hpp", "env", "dockerfile", "jenkinsfile",
];

/// Directory names that are always pruned from the walk.
pub const DEFAULT_EXCLUDE_DIRS: &[&str] = &[
    ".git",
    "target",
    "node_modules",
    "build",
    "dist",
    ".idea",
    ".vscode",
    ".venv",
    "__pycache__",
    ".mvn",
    ".gradle",
    ".pytest_cache",
    ".scannerwork",
    ".sonar",
    "coverage",
    "out",
    "jacoco-report",
];

/// Extension-less file names that are still exported, matched case-insensitively.
///
/// A special name only counts while the include set also contains it, so the
/// defaults pick up `Dockerfile` but `--include py` does not.
pub const SPECIAL_FILENAMES: &[&str] = &["dockerfile", "jenkinsfile"];

pub const DEFAULT_MAX_BYTES: u64 = 1_000_000;

pub const DEFAULT_OUTPUT_NAME: &str = "local.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryDetection {
    /// A NUL byte in the first 2048 bytes marks the file as binary.
    Simple,
    /// Let `content_inspector` classify the first 2048 bytes.
    Accurate,
    None,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    pub root: PathBuf,
    pub output: PathBuf,
    pub max_bytes: u64,
    pub include_extensions: BTreeSet<String>,
    pub exclude_dirs: BTreeSet<String>,
    pub table_of_contents: bool,
    pub binary_detection: BinaryDetection,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_NAME),
            max_bytes: DEFAULT_MAX_BYTES,
            include_extensions: DEFAULT_INCLUDE_EXTENSIONS
                .iter()
                .map(|ext| ext.to_string())
                .collect(),
            exclude_dirs: DEFAULT_EXCLUDE_DIRS
                .iter()
                .map(|dir| dir.to_string())
                .collect(),
            table_of_contents: false,
            binary_detection: BinaryDetection::Simple,
        }
    }
}

/// Builds [`ExportOptions`] on top of the default include and exclude sets.
///
/// The two overrides deliberately behave differently:
///
/// - [`include_extensions`](Self::include_extensions) **replaces** the default
///   extension set.
/// - [`exclude_dirs`](Self::exclude_dirs) is **added to** the default directory
///   set; the defaults can never be un-excluded.
#[derive(Debug, Default)]
pub struct ExportBuilder {
    options: ExportOptions,
}

impl ExportBuilder {
    pub fn new(root: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            options: ExportOptions {
                root: root.into(),
                output: output.into(),
                ..Default::default()
            },
        }
    }

    pub fn max_bytes(mut self, limit: u64) -> Self {
        self.options.max_bytes = limit;
        self
    }

    /// Replaces the include set. An empty list keeps the defaults.
    pub fn include_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions: BTreeSet<String> = extensions
            .into_iter()
            .filter_map(|ext| normalize_extension(ext.as_ref()))
            .collect();
        if !extensions.is_empty() {
            self.options.include_extensions = extensions;
        }
        self
    }

    /// Adds to the exclude set.
    pub fn exclude_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.options.exclude_dirs.extend(
            dirs.into_iter()
                .map(|dir| dir.as_ref().trim().to_string())
                .filter(|dir| !dir.is_empty()),
        );
        self
    }

    pub fn table_of_contents(mut self, yes: bool) -> Self {
        self.options.table_of_contents = yes;
        self
    }

    pub fn binary_detection(mut self, method: BinaryDetection) -> Self {
        self.options.binary_detection = method;
        self
    }

    pub fn build(self) -> ExportOptions {
        self.options
    }
}

/// Splits a comma-separated command-line list.
pub fn split_list(raw: &str) -> Vec<&str> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

fn normalize_extension(raw: &str) -> Option<String> {
    let lower = raw.trim().to_lowercase();
    let ext = lower.trim_start_matches('.');
    if ext.is_empty() {
        None
    } else {
        Some(ext.to_string())
    }
}

/// Makes `path` absolute against the current directory and folds `.` and `..`
/// components without touching the filesystem.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    let absolute = std::path::absolute(path)?;
    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    Ok(normalized)
}
