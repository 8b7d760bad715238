//! Ship behavior annotator
//!
//! A Rust CLI tool that walks a folder of ship JSON files and adds a
//! `behavior` to every ship that lacks one, based on whether any of its
//! blocks is an engine.

pub mod annotate;
pub mod cli;
pub mod error;
pub mod manifest;
pub mod parser;

// Re-export commonly used types
pub use annotate::{
    annotate_document, check_eligibility, classify_blocks, AnnotateConfig, BehaviorType,
    Eligibility, FileOutcome, RunStatistics,
};
pub use error::{ParseError, ShipfixError, ShipfixResult};
pub use manifest::ShipManifest;
pub use parser::JsonSource;

/// Annotate a JSON string, returning the rewritten document text
pub fn annotate_json_str(json: &str) -> ShipfixResult<String> {
    let source = JsonSource::String(json.to_string());
    let mut document = source.parse()?;
    annotate_document(&mut document).map_err(|reason| ShipfixError::Ineligible {
        path: source.path(),
        reason,
    })?;
    Ok(serde_json::to_string_pretty(&document)?)
}
