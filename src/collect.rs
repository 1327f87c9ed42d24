use crate::options::{ExportOptions, SPECIAL_FILENAMES};
use crate::types::Candidate;
use ignore::{DirEntry, WalkBuilder};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

struct Walker {
    inner: ignore::Walk,
}

impl Walker {
    fn new(root: &Path, exclude_dirs: &BTreeSet<String>) -> Self {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .sort_by_file_path(files_first);
        let exclude_dirs = exclude_dirs.clone();
        builder.filter_entry(move |entry| !is_pruned(entry, &exclude_dirs));
        Self {
            inner: builder.build(),
        }
    }

    fn into_files(self) -> impl Iterator<Item = PathBuf> {
        self.inner.filter_map(|result| match result {
            Ok(entry) if is_file_like(&entry) => Some(entry.into_path()),
            Ok(_) => None,
            Err(e) => {
                warn!("skipping unreadable entry: {}", e);
                None
            }
        })
    }
}

// Regular files, plus symlinks that do not resolve to a directory. Dangling
// links stay in so the loader reports them as read errors.
fn is_file_like(entry: &DirEntry) -> bool {
    match entry.file_type() {
        Some(ft) if ft.is_file() => true,
        Some(ft) if ft.is_symlink() => !entry.path().is_dir(),
        _ => false,
    }
}

// Within one directory: files, then subdirectories, each by name.
fn files_first(a: &Path, b: &Path) -> Ordering {
    a.is_dir()
        .cmp(&b.is_dir())
        .then_with(|| a.file_name().cmp(&b.file_name()))
}

fn is_pruned(entry: &DirEntry, exclude_dirs: &BTreeSet<String>) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
        return false;
    }
    let pruned = entry
        .file_name()
        .to_str()
        .is_some_and(|name| exclude_dirs.contains(name));
    if pruned {
        debug!("pruning {}", entry.path().display());
    }
    pruned
}

/// Decides whether a file name is exported under the given include set.
pub fn should_include(file_name: &str, include_extensions: &BTreeSet<String>) -> bool {
    let lower = file_name.to_lowercase();
    if SPECIAL_FILENAMES.contains(&lower.as_str()) {
        return include_extensions.contains(&lower);
    }
    match lower.rsplit_once('.') {
        Some((_, ext)) => include_extensions.contains(ext),
        None => false,
    }
}

/// Walks `options.root` and returns the files to export, in output order.
pub fn collect_candidates(options: &ExportOptions) -> Vec<Candidate> {
    let root = options.root.as_path();
    Walker::new(root, &options.exclude_dirs)
        .into_files()
        .filter(|path| {
            path.file_name()
                .map(|name| should_include(&name.to_string_lossy(), &options.include_extensions))
                .unwrap_or(false)
        })
        .map(|path| {
            let relative = path.strip_prefix(root).unwrap_or(&path).to_path_buf();
            Candidate { path, relative }
        })
        .collect()
}
