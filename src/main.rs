use anyhow::{Context, Result};

use shipfix::annotate;
use shipfix::cli::{self, CliConfig};
use shipfix::error::ShipfixError;
use shipfix::manifest;

fn main() -> Result<()> {
    let args = match cli::parse_args(std::env::args_os()) {
        Ok(args) => args,
        Err(e) => exit_with(&e),
    };
    let config = CliConfig::from_args(args);

    // Set up logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(config.log_filter()))
        .init();
    log::debug!("Verbose mode enabled");

    let stats = match annotate::run(&config.annotate_config) {
        Ok(stats) => stats,
        Err(e) if e.is_fatal() => exit_with(&e),
        Err(e) => return Err(e.into()),
    };

    if config.annotate_config.write_manifest {
        let folder = &config.annotate_config.folder;
        let ship_manifest = manifest::build_manifest(folder)
            .with_context(|| format!("Failed to build manifest for {}", folder.display()))?;
        manifest::write_manifest(folder, &ship_manifest).context("Failed to write manifest")?;
    }

    log::debug!(
        "{} of {} files processed",
        stats.processed,
        stats.total_files
    );
    Ok(())
}

fn exit_with(error: &ShipfixError) -> ! {
    cli::handle_error(error);
    std::process::exit(error.exit_code())
}
