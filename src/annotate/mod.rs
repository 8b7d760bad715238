//! Ship behavior annotation module
//!
//! This module contains eligibility and behavior classification, the per-file
//! rewrite pipeline, run configuration and statistics.

pub mod batch;
pub mod behavior;
pub mod config;
pub mod eligibility;
pub mod mutate;
pub mod stats;

pub use batch::run;
pub use behavior::{classify_blocks, BehaviorType};
pub use config::AnnotateConfig;
pub use eligibility::{check_eligibility, is_eligible, Eligibility};
pub use mutate::{annotate_document, process_file, write_document, FileOutcome};
pub use stats::RunStatistics;
