//! Error types and handling infrastructure for ship annotation

use std::fmt;
use std::path::PathBuf;

use crate::annotate::eligibility::Eligibility;

/// Main error type for annotation runs
#[derive(Debug, thiserror::Error)]
pub enum ShipfixError {
    #[error("Usage: shipfix <folder_path>")]
    Usage,

    #[error("Folder does not exist: {}", .path.display())]
    FolderNotFound { path: PathBuf },

    #[error("Path is not a directory: {}", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("Failed to walk directory: {0}")]
    Traversal(#[from] walkdir::Error),

    #[error("{source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{source}")]
    Parse { path: PathBuf, source: ParseError },

    #[error("{}", .reason.describe())]
    Ineligible { path: PathBuf, reason: Eligibility },

    #[error("{source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },
}

impl ShipfixError {
    pub fn read(path: PathBuf, source: std::io::Error) -> Self {
        Self::Read { path, source }
    }

    pub fn write(path: PathBuf, source: std::io::Error) -> Self {
        Self::Write { path, source }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Errors that end the whole run rather than a single file
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Self::Usage
                | Self::FolderNotFound { .. }
                | Self::NotADirectory { .. }
                | Self::Traversal(_)
                | Self::Configuration { .. }
        )
    }

    /// Process exit status for this error
    pub fn exit_code(&self) -> i32 {
        1
    }
}

/// JSON parsing errors
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub location: Option<(usize, usize)>,
}

impl ParseError {
    pub fn new(message: String, location: Option<(usize, usize)>) -> Self {
        Self { message, location }
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(error: serde_json::Error) -> Self {
        let location = match error.line() {
            0 => None,
            line => Some((line, error.column())),
        };
        // serde_json appends " at line X column Y" to Display; keep only the cause
        let full = error.to_string();
        let message = match full.rfind(" at line ") {
            Some(idx) => full[..idx].to_string(),
            None => full,
        };
        Self::new(message, location)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some((line, col)) = self.location {
            write!(f, " at line {}, column {}", line, col)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

/// Result type for annotation operations
pub type ShipfixResult<T> = Result<T, ShipfixError>;

/// Convenience result type for parsing operations
pub type ParseResult<T> = Result<T, ParseError>;
