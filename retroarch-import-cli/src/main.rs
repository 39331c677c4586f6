//! retroarch-import-playlist
//!
//! Rewrites RetroArch playlists from another machine so their content and
//! core paths point at this machine's directories.

mod cli_types;
mod error;
mod logger;

use std::process::ExitCode;

use clap::Parser;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

use retroarch_import_core::{Config, ImportOutcome, import_playlist, settings};

use crate::cli_types::Cli;
use crate::error::CliError;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.quiet, cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), CliError> {
    let (config_path, config) = settings::load_config(cli.config.as_deref())?;
    log::debug!("Loaded rules from {}", config_path.display());

    let failed = cli
        .files
        .iter()
        .filter(|file| !import_one(&config, file, cli.output_directory.as_deref()))
        .count();

    if failed > 0 {
        return Err(CliError::PartialFailure {
            failed,
            total: cli.files.len(),
        });
    }
    Ok(())
}

/// Import a single file, reporting the outcome. Returns `false` on failure.
fn import_one(config: &Config, file: &str, output_directory: Option<&str>) -> bool {
    match import_playlist(config, file, output_directory) {
        Ok(ImportOutcome::Written {
            destination,
            report,
        }) => {
            println!("{}", destination.display());
            if !report.dropped.is_empty() {
                log::info!(
                    "  {} entr{} dropped from {} (content not found)",
                    report.dropped.len(),
                    if report.dropped.len() == 1 { "y" } else { "ies" },
                    file,
                );
            }
            true
        }
        Ok(ImportOutcome::SkippedExisting { destination }) => {
            log::info!(
                "{} {} (already exists)",
                "Skipped".if_supports_color(Stderr, |t| t.dimmed()),
                destination.display(),
            );
            true
        }
        Err(e) => {
            log::error!("{}", e);
            false
        }
    }
}
