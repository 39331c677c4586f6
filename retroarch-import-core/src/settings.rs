//! Configuration file discovery.
//!
//! Rules live in `~/.config/retroarch-import-playlist/` (or
//! `%LOCALAPPDATA%\retroarch-import-playlist\` on Windows), next to the
//! executable, or anywhere the user points `--config` at.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::ImportError;
use crate::paths;

pub const APP_DIR_NAME: &str = "retroarch-import-playlist";

/// Profile loaded when no `--config` is given.
pub const DEFAULT_PROFILE: &str = "default";

/// Directory holding named configuration profiles.
pub fn config_dir() -> Option<PathBuf> {
    let base = if cfg!(windows) {
        dirs::data_local_dir()
    } else {
        dirs::home_dir().map(|home| home.join(".config"))
    };
    base.map(|dir| dir.join(APP_DIR_NAME))
}

/// Candidate configuration files, most preferred first.
pub fn candidate_locations(requested: Option<&str>) -> Vec<PathBuf> {
    let exe = std::env::current_exe().ok();
    candidate_locations_in(requested, exe.as_deref(), config_dir().as_deref())
}

/// [`candidate_locations`] with the executable path and profile directory
/// supplied by the caller.
///
/// A requested value that looks like a path (contains `.`, `/` or `\`) is
/// used as-is. Any other value names a profile `<config_dir>/<name>.ini`.
/// Without a request, `<exe>.ini` is tried before the default profile.
pub fn candidate_locations_in(
    requested: Option<&str>,
    exe: Option<&Path>,
    config_dir: Option<&Path>,
) -> Vec<PathBuf> {
    let profile = |name: &str| config_dir.map(|dir| dir.join(format!("{}.ini", name)));

    match requested {
        Some(value) if value.contains(['.', '/', '\\']) => {
            vec![PathBuf::from(paths::normalize(value))]
        }
        Some(name) => profile(name).into_iter().collect(),
        None => exe
            .map(|exe| exe.with_extension("ini"))
            .into_iter()
            .chain(profile(DEFAULT_PROFILE))
            .collect(),
    }
}

/// Return the first existing candidate.
pub fn locate_config(candidates: &[PathBuf]) -> Result<PathBuf, ImportError> {
    candidates
        .iter()
        .find(|p| p.is_file())
        .cloned()
        .ok_or_else(|| ImportError::ConfigurationNotFound {
            candidates: candidates.to_vec(),
        })
}

/// Find and parse the configuration for a run.
pub fn load_config(requested: Option<&str>) -> Result<(PathBuf, Config), ImportError> {
    let path = locate_config(&candidate_locations(requested))?;
    log::debug!("Using configuration {}", path.display());
    let config = Config::load(&path)?;
    Ok((path, config))
}
