use std::path::Path;

use crate::annotate::config::AnnotateConfig;
use crate::annotate::eligibility::check_eligibility;
use crate::annotate::mutate::{process_document, FileOutcome};
use crate::annotate::stats::RunStatistics;
use crate::error::{ShipfixError, ShipfixResult};
use crate::parser::directory::find_json_files;
use crate::parser::JsonSource;

/// Annotate every ship document under the configured folder.
///
/// Only folder validation and directory traversal errors are returned; every
/// per-file failure is printed and counted as a skip.
pub fn run(config: &AnnotateConfig) -> ShipfixResult<RunStatistics> {
    config.validate()?;

    println!("Processing JSON files in: {}", config.folder.display());
    let json_files = find_json_files(&config.folder)?;
    println!("Found {} JSON files", json_files.len());

    let mut stats = RunStatistics::start(json_files.len());

    if json_files.is_empty() {
        println!("No JSON files found in the specified directory");
        stats.finish();
        return Ok(stats);
    }

    for json_file in &json_files {
        annotate_one(json_file, config, &mut stats);
    }

    stats.finish();
    for line in stats.summary_lines() {
        println!("{}", line);
    }
    log::debug!(
        "Run finished in {}ms ({} failed)",
        stats.processing_time_ms,
        stats.failed
    );

    Ok(stats)
}

/// Run one file through the pipeline and count the result
fn annotate_one(path: &Path, config: &AnnotateConfig, stats: &mut RunStatistics) {
    let document = match JsonSource::File(path.to_path_buf()).parse() {
        Ok(document) => document,
        Err(e) => {
            println!("Error reading {}: {}", path.display(), e);
            log::warn!("Failed to read {}: {}", path.display(), e);
            stats.record_failed();
            return;
        }
    };

    let eligibility = check_eligibility(&document);
    if !eligibility.is_eligible() {
        println!("Skipping {}: {}", path.display(), eligibility.describe());
        log::info!("{} not eligible: {:?}", path.display(), eligibility);
        stats.record_skipped();
        return;
    }

    match process_document(path, document, config) {
        Ok(FileOutcome::Updated(behavior)) => {
            println!(
                "Updated {}: Added behavior type \"{}\"",
                path.display(),
                behavior
            );
            stats.record_processed(behavior);
        }
        Ok(FileOutcome::WouldUpdate(behavior)) => {
            println!(
                "Would update {}: Add behavior type \"{}\"",
                path.display(),
                behavior
            );
            stats.record_processed(behavior);
        }
        Err(ShipfixError::Ineligible { reason, .. }) => {
            println!("Skipping {}: {}", path.display(), reason.describe());
            log::info!("{} not eligible: {:?}", path.display(), reason);
            stats.record_skipped();
        }
        Err(e) => {
            println!("Error processing {}: {}", path.display(), e);
            log::warn!("Failed to update {}: {:?}", path.display(), e);
            stats.record_failed();
        }
    }
}
