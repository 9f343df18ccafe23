//! Source file discovery

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory names never descended into
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", "build", ".git", ".next"];

/// Every file under `roots` with one of `extensions`, sorted and deduplicated.
///
/// Directories named in [`DEFAULT_EXCLUDED_DIRS`] or `exclude_dirs` are
/// skipped below the root. Extensions are matched without the leading dot,
/// ignoring case.
pub fn discover_files(roots: &[PathBuf], extensions: &[String], exclude_dirs: &[String]) -> Vec<PathBuf> {
    let mut files = BTreeSet::new();

    for root in roots {
        let walker = WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| {
                entry.depth() == 0
                    || !entry.file_type().is_dir()
                    || !is_excluded(entry.file_name().to_string_lossy().as_ref(), exclude_dirs)
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::warn!("Skipping unreadable path under {}: {}", root.display(), e);
                    continue;
                }
            };
            if entry.file_type().is_file() && has_extension(entry.path(), extensions) {
                files.insert(entry.into_path());
            }
        }
    }

    files.into_iter().collect()
}

fn is_excluded(name: &str, exclude_dirs: &[String]) -> bool {
    DEFAULT_EXCLUDED_DIRS.contains(&name) || exclude_dirs.iter().any(|d| d == name)
}

fn has_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return false;
    };
    extensions
        .iter()
        .any(|wanted| wanted.trim_start_matches('.').eq_ignore_ascii_case(ext))
}

#[cfg(test)]
#[path = "discover_test.rs"]
mod tests;
