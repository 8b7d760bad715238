//! Ship manifest listing every ship document under a folder

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{ShipfixError, ShipfixResult};
use crate::parser::filter::has_json_suffix;

/// File name of the manifest written at the folder root
pub const MANIFEST_FILE_NAME: &str = "manifest.json";

/// Relative paths of ship documents, `/`-separated and sorted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipManifest {
    pub files: Vec<String>,
}

impl ShipManifest {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('.')
}

/// Collect ship documents under `root`, skipping dot-entries and the manifest itself
pub fn build_manifest(root: &Path) -> ShipfixResult<ShipManifest> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).into_iter().filter_entry(|e| !is_hidden(e)) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy();
        if !has_json_suffix(&name) || (entry.depth() == 1 && name == MANIFEST_FILE_NAME) {
            continue;
        }

        let relative = entry.path().strip_prefix(root).unwrap_or(entry.path());
        let parts: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        files.push(parts.join("/"));
    }

    files.sort();
    Ok(ShipManifest { files })
}

/// Write the manifest to `<root>/manifest.json` and return its path
pub fn write_manifest(root: &Path, manifest: &ShipManifest) -> ShipfixResult<PathBuf> {
    let out_path = root.join(MANIFEST_FILE_NAME);
    let content = serde_json::to_string_pretty(manifest)?;
    std::fs::write(&out_path, content).map_err(|e| ShipfixError::write(out_path.clone(), e))?;

    println!(
        "Wrote {} with {} entries.",
        out_path.display(),
        manifest.len()
    );
    Ok(out_path)
}
