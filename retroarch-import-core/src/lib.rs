//! Import RetroArch playlists recorded on another machine.
//!
//! Each input playlist goes through [`playlist::load_playlist`], then
//! [`rewrite::rewrite_playlist`], then [`writer::write_playlist`]. Files are
//! independent: the only shared input is a read-only [`Config`].

pub mod config;
pub mod error;
pub mod paths;
pub mod playlist;
pub mod rewrite;
pub mod settings;
pub mod writer;

pub use config::{Config, ConfigFormat, DatabaseRule};
pub use error::{ConfigError, ImportError, PlaylistError};
pub use playlist::{Item, Playlist};
pub use rewrite::{RewriteReport, Rewritten};

use std::path::{Path, PathBuf};

/// Result of importing a single playlist file.
#[derive(Debug, Clone)]
pub enum ImportOutcome {
    /// The rewritten playlist was written to `destination` (absolute).
    Written {
        destination: PathBuf,
        report: RewriteReport,
    },
    /// The destination already existed and overwriting is disabled.
    SkippedExisting { destination: PathBuf },
}

/// Import one playlist: load it, remap its paths and write the result.
///
/// `input` may be given in Windows notation or start with `~`.
/// `output_override` replaces the configured output directory.
///
/// When the destination exists and `overwrite_existing_playlist` is off,
/// nothing is read or written.
pub fn import_playlist(
    config: &Config,
    input: &str,
    output_override: Option<&str>,
) -> Result<ImportOutcome, ImportError> {
    let input = PathBuf::from(paths::normalize(input));
    let destination = writer::destination_path(config, &input, output_override);

    if !config.overwrite_existing_playlist && destination.exists() {
        return Ok(ImportOutcome::SkippedExisting { destination });
    }

    let playlist = playlist::load_playlist(&input)?;
    let Rewritten { playlist, report } = rewrite::rewrite_playlist(playlist, config)?;
    let destination = writer::write_playlist(&playlist, &destination)?;

    log::debug!(
        "{}: {} rewritten, {} untouched, {} dropped",
        input.display(),
        report.rewritten,
        report.untouched,
        report.dropped.len()
    );

    Ok(ImportOutcome::Written {
        destination,
        report,
    })
}

/// [`import_playlist`] for an input already held as a [`Path`].
pub fn import_playlist_path(
    config: &Config,
    input: &Path,
    output_override: Option<&str>,
) -> Result<ImportOutcome, ImportError> {
    import_playlist(config, &input.to_string_lossy(), output_override)
}
