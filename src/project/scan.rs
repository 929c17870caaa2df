//! Bounded source file listing.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Dependency directories never descended into.
const SKIPPED_DIRS: &[&str] = &["node_modules", "vendor", "target", "__pycache__"];

/// List files under `root` whose names end with one of `extensions`.
///
/// Entries up to `max_depth` levels below `root` are considered; hidden
/// entries and dependency directories are skipped. Unreadable entries are
/// ignored. At most `limit` paths are returned, in file-name order.
pub fn find_files(root: &Path, extensions: &[&str], max_depth: usize, limit: usize) -> Vec<PathBuf> {
    WalkDir::new(root)
        .min_depth(1)
        .max_depth(max_depth)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_skipped(entry))
        .filter_map(Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            extensions.iter().any(|ext| name.ends_with(ext))
        })
        .take(limit)
        .map(DirEntry::into_path)
        .collect()
}

fn is_skipped(entry: &DirEntry) -> bool {
    let name = entry.file_name().to_string_lossy();
    if name.starts_with('.') {
        return true;
    }
    entry.file_type().is_dir() && SKIPPED_DIRS.contains(&&*name)
}
