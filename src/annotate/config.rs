//! Configuration options for an annotation run

use std::path::PathBuf;

use crate::error::{ShipfixError, ShipfixResult};

/// Annotation run configuration
#[derive(Debug, Clone)]
pub struct AnnotateConfig {
    /// Root folder scanned for ship documents
    pub folder: PathBuf,
    /// Classify and report without rewriting any file
    pub dry_run: bool,
    /// Write `manifest.json` at the folder root once the run completes
    pub write_manifest: bool,
}

impl AnnotateConfig {
    pub fn new(folder: impl Into<PathBuf>) -> Self {
        Self {
            folder: folder.into(),
            dry_run: false,
            write_manifest: false,
        }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn with_write_manifest(mut self, write_manifest: bool) -> Self {
        self.write_manifest = write_manifest;
        self
    }

    /// Check that the folder exists and is a directory
    pub fn validate(&self) -> ShipfixResult<()> {
        if !self.folder.exists() {
            return Err(ShipfixError::FolderNotFound {
                path: self.folder.clone(),
            });
        }
        if !self.folder.is_dir() {
            return Err(ShipfixError::NotADirectory {
                path: self.folder.clone(),
            });
        }
        if self.dry_run && self.write_manifest {
            return Err(ShipfixError::configuration(
                "--write-manifest cannot be combined with --dry-run".to_string(),
            ));
        }
        Ok(())
    }
}
