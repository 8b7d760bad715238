//! Counters and summary for an annotation run

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Instant;

use crate::annotate::behavior::BehaviorType;

/// Tally of a finished (or in-progress) run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStatistics {
    /// JSON files found under the folder
    pub total_files: usize,
    /// Files annotated (or that would be, in a dry run)
    pub processed: usize,
    /// Files left untouched for any reason
    pub skipped: usize,
    /// Files that failed to read, parse or write (a subset of `skipped`)
    pub failed: usize,
    /// Processed files per assigned behavior
    pub behaviors: BTreeMap<String, usize>,
    /// Wall-clock duration of the run in milliseconds
    pub processing_time_ms: u64,
    /// Timestamp of when the run started
    pub started_at: chrono::DateTime<chrono::Utc>,
    #[serde(skip)]
    timer: Option<Instant>,
}

impl RunStatistics {
    /// Start a run over `total_files` files
    pub fn start(total_files: usize) -> Self {
        Self {
            total_files,
            processed: 0,
            skipped: 0,
            failed: 0,
            behaviors: BTreeMap::new(),
            processing_time_ms: 0,
            started_at: chrono::Utc::now(),
            timer: Some(Instant::now()),
        }
    }

    pub fn record_processed(&mut self, behavior: BehaviorType) {
        self.processed += 1;
        *self.behaviors.entry(behavior.to_string()).or_insert(0) += 1;
    }

    pub fn record_skipped(&mut self) {
        self.skipped += 1;
    }

    pub fn record_failed(&mut self) {
        self.failed += 1;
        self.skipped += 1;
    }

    /// Stop the clock
    pub fn finish(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.processing_time_ms = timer.elapsed().as_millis() as u64;
        }
    }

    /// Every discovered file was counted exactly once
    pub fn is_complete(&self) -> bool {
        self.processed + self.skipped == self.total_files
    }

    pub fn behavior_count(&self, behavior: BehaviorType) -> usize {
        self.behaviors.get(behavior.as_str()).copied().unwrap_or(0)
    }

    /// Lines printed at the end of the run
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            "\nProcessing complete:".to_string(),
            format!("- Files processed: {}", self.processed),
            format!("- Files skipped: {}", self.skipped),
        ]
    }
}

impl Default for RunStatistics {
    fn default() -> Self {
        Self::start(0)
    }
}
