//! Recursive discovery of ship documents

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::parser::filter::is_json_name;

/// Regular files and symlinks that do not resolve to a directory.
///
/// Broken links are kept so that reading them fails and counts as a skip.
fn is_json_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    let file_like = file_type.is_file() || (file_type.is_symlink() && !entry.path().is_dir());
    file_like && is_json_name(entry.file_name())
}

/// Find JSON files anywhere under `dir`, in traversal order.
///
/// A traversal error (unreadable subdirectory, vanished entry) aborts the
/// whole scan.
pub fn find_json_files(dir: &Path) -> Result<Vec<PathBuf>, walkdir::Error> {
    let mut json_files = Vec::new();

    for entry in WalkDir::new(dir) {
        let entry = entry?;
        if is_json_entry(&entry) {
            json_files.push(entry.into_path());
        }
    }

    log::debug!("Collected {} JSON files under {}", json_files.len(), dir.display());
    Ok(json_files)
}
