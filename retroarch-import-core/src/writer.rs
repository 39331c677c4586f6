//! Output naming and serialization of rewritten playlists.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ImportError;
use crate::paths;
use crate::playlist::Playlist;

/// Compute where the rewritten copy of `input` goes.
///
/// The file name is `<prefix><input stem><append>`. The directory is the
/// override if given and non-empty, else the configured output directory, else the
/// directory holding the input.
pub fn destination_path(config: &Config, input: &Path, output_override: Option<&str>) -> PathBuf {
    let input_name = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let file_name = format!(
        "{}{}{}",
        config.output_filename_prefix,
        paths::file_stem(&input_name),
        config.output_filename_append
    );

    let directory = output_override
        .filter(|dir| !dir.is_empty())
        .unwrap_or(&config.output_directory);
    if directory.is_empty() {
        input.parent().unwrap_or(Path::new("")).join(file_name)
    } else {
        PathBuf::from(paths::normalize(directory)).join(file_name)
    }
}

/// Serialize `playlist` as indented JSON to `destination`, replacing any
/// existing file, and return the absolute path written.
pub fn write_playlist(playlist: &Playlist, destination: &Path) -> Result<PathBuf, ImportError> {
    let write_failure = |source: std::io::Error| ImportError::DestinationWriteFailure {
        path: destination.to_path_buf(),
        source,
    };

    if let Some(parent) = destination.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(write_failure)?;
    }

    let json = playlist
        .to_json_pretty()
        .map_err(|e| write_failure(std::io::Error::other(e)))?;
    let mut file = fs::File::create(destination).map_err(write_failure)?;
    file.write_all(json.as_bytes()).map_err(write_failure)?;

    std::path::absolute(destination).map_err(write_failure)
}

#[cfg(test)]
#[path = "tests/writer_tests.rs"]
mod tests;
