//! Per-file pipeline: inspect, classify, set behavior and rewrite

use serde_json::Value;
use std::path::Path;

use crate::annotate::behavior::{classify_blocks, BehaviorType};
use crate::annotate::config::AnnotateConfig;
use crate::annotate::eligibility::{check_eligibility, Eligibility};
use crate::error::{ShipfixError, ShipfixResult};
use crate::parser::JsonSource;

/// What happened to a single eligible file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Behavior written to disk
    Updated(BehaviorType),
    /// Dry run: behavior classified but nothing written
    WouldUpdate(BehaviorType),
}

impl FileOutcome {
    pub fn behavior(&self) -> BehaviorType {
        match self {
            FileOutcome::Updated(behavior) | FileOutcome::WouldUpdate(behavior) => *behavior,
        }
    }
}

/// Classify an eligible document and append its `behavior` field.
///
/// Eligibility is checked again here so that callers holding an arbitrary
/// value cannot overwrite an existing behavior.
pub fn annotate_document(document: &mut Value) -> Result<BehaviorType, Eligibility> {
    let eligibility = check_eligibility(document);
    if !eligibility.is_eligible() {
        return Err(eligibility);
    }

    let Some(object) = document.as_object_mut() else {
        return Err(Eligibility::MissingBlocks);
    };
    let behavior = match object.get("blocks") {
        Some(Value::Array(blocks)) => classify_blocks(blocks),
        _ => return Err(Eligibility::MissingBlocks),
    };
    object.insert("behavior".to_string(), behavior.to_value());

    Ok(behavior)
}

/// Overwrite `path` with the document, 2-space indented UTF-8
pub fn write_document(path: &Path, document: &Value) -> ShipfixResult<()> {
    let content = serde_json::to_string_pretty(document)?;
    std::fs::write(path, content).map_err(|e| ShipfixError::write(path.to_path_buf(), e))
}

/// Annotate an already parsed document and persist it unless dry-running
pub fn process_document(
    path: &Path,
    mut document: Value,
    config: &AnnotateConfig,
) -> ShipfixResult<FileOutcome> {
    let behavior = annotate_document(&mut document).map_err(|reason| ShipfixError::Ineligible {
        path: path.to_path_buf(),
        reason,
    })?;

    if config.dry_run {
        log::debug!("Dry run, leaving {} untouched", path.display());
        return Ok(FileOutcome::WouldUpdate(behavior));
    }

    write_document(path, &document)?;
    Ok(FileOutcome::Updated(behavior))
}

/// Read, parse, annotate and rewrite one ship file
pub fn process_file(path: &Path, config: &AnnotateConfig) -> ShipfixResult<FileOutcome> {
    let document = JsonSource::File(path.to_path_buf()).parse()?;
    process_document(path, document, config)
}
