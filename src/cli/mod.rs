//! Command-line interface module

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::annotate::AnnotateConfig;
use crate::error::{ShipfixError, ShipfixResult};

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "shipfix")]
#[command(about = "Add a behavior to ship JSON files based on their blocks")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Folder containing ship JSON files (searched recursively)
    #[arg(value_name = "folder_path")]
    pub folder: PathBuf,

    /// Report what would change without rewriting any file
    #[arg(long)]
    pub dry_run: bool,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Write manifest.json listing every ship file once the run completes
    #[arg(long)]
    pub write_manifest: bool,
}

/// Parse arguments, folding every usage problem into a single error.
///
/// `--help` and `--version` are printed by clap and exit the process.
pub fn parse_args<I, T>(args: I) -> ShipfixResult<Args>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match Args::try_parse_from(args) {
        Ok(args) => Ok(args),
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            log::debug!("Argument parsing failed: {}", e);
            Err(ShipfixError::Usage)
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub annotate_config: AnnotateConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments
    pub fn from_args(args: Args) -> Self {
        let annotate_config = AnnotateConfig::new(args.folder.clone())
            .with_dry_run(args.dry_run)
            .with_write_manifest(args.write_manifest);

        Self {
            args,
            annotate_config,
        }
    }

    /// Default log filter for this invocation; `RUST_LOG` still wins
    pub fn log_filter(&self) -> &'static str {
        if self.args.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Report a fatal error on standard output
pub fn handle_error(error: &ShipfixError) {
    println!("{}", error);
}
