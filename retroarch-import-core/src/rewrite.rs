//! Remaps content and core paths of a playlist onto the local layout.

use std::path::Path;

use crate::config::Config;
use crate::error::ImportError;
use crate::paths;
use crate::playlist::{BASE_CONTENT_DIRECTORY, DETECT_CORE, Item, Playlist, SCAN_CONTENT_DIR};

/// What happened to the items of one playlist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RewriteReport {
    /// Items matched to a database rule and remapped.
    pub rewritten: usize,
    /// Items without a matching rule, passed through as-is.
    pub untouched: usize,
    /// Remapped content paths that did not exist and whose items were dropped.
    pub dropped: Vec<String>,
}

/// A rewritten playlist together with its report.
#[derive(Debug, Clone)]
pub struct Rewritten {
    pub playlist: Playlist,
    pub report: RewriteReport,
}

/// Where an item's new `core_path` comes from.
enum CoreSource<'a> {
    /// The item names its own core; keep that file name.
    Own(&'a str),
    /// The item defers to the playlist default core.
    PlaylistDefault(&'a str),
}

/// Remap every path in `playlist` according to `config`.
///
/// Items whose database has no rule are left exactly as they were. With
/// `validate_rom_path` enabled, items whose remapped content file is missing
/// are removed; all other items keep their relative order.
pub fn rewrite_playlist(mut playlist: Playlist, config: &Config) -> Result<Rewritten, ImportError> {
    let default_core = rewrite_default_core(&mut playlist, config);

    if playlist.has_field(BASE_CONTENT_DIRECTORY) {
        playlist.set_field(BASE_CONTENT_DIRECTORY, config.base_content_directory.clone());
    }
    playlist.remove_field(SCAN_CONTENT_DIR);

    let mut report = RewriteReport::default();
    let mut items = Vec::with_capacity(playlist.items.len());

    for item in std::mem::take(&mut playlist.items) {
        match rewrite_item(item, config, default_core.as_deref())? {
            ItemOutcome::Rewritten(item) => {
                report.rewritten += 1;
                items.push(item);
            }
            ItemOutcome::Untouched(item) => {
                report.untouched += 1;
                items.push(item);
            }
            ItemOutcome::Dropped(path) => {
                log::warn!("Dropping entry, content not found: {}", path);
                report.dropped.push(path);
            }
        }
    }

    playlist.items = items;
    Ok(Rewritten { playlist, report })
}

/// Re-root `default_core_path` under the core directory.
///
/// Returns the new default core path, or `None` when the playlist has no
/// usable default core.
fn rewrite_default_core(playlist: &mut Playlist, config: &Config) -> Option<String> {
    let current = playlist.default_core_path().filter(|p| !p.is_empty())?;
    let core = core_location(current, config)?;
    playlist.set_default_core_path(core.clone());
    Some(core)
}

/// `<core_directory>/<file name of raw with the core extension>`.
fn core_location(raw: &str, config: &Config) -> Option<String> {
    let normalized = paths::normalize(raw);
    let name = paths::file_name(&normalized);
    if name.is_empty() {
        return None;
    }
    let name = paths::replace_extension(name, &config.core_extension);
    Some(paths::join(&config.core_directory, &name))
}

enum ItemOutcome {
    Rewritten(Item),
    Untouched(Item),
    Dropped(String),
}

fn rewrite_item(
    mut item: Item,
    config: &Config,
    default_core: Option<&str>,
) -> Result<ItemOutcome, ImportError> {
    let Some(db_name) = item.db_name().map(|n| n.strip_suffix(".lpl").unwrap_or(n)) else {
        return Ok(ItemOutcome::Untouched(item));
    };
    let Some(rule) = config.database(db_name) else {
        log::debug!("No rule for database '{}', leaving entry as-is", db_name);
        return Ok(ItemOutcome::Untouched(item));
    };
    let subdirectory = rule
        .content_directory()
        .ok_or_else(|| ImportError::MissingRequiredField {
            section: db_name.to_string(),
            key: "content_directory".to_string(),
        })?;
    let content_directory =
        paths::join(&config.base_content_directory, &paths::normalize(subdirectory));

    if let Some(path) = item.path() {
        let normalized = paths::normalize(path);
        let target = paths::join(&content_directory, paths::file_name(&normalized));
        if config.validate_rom_path && !Path::new(&target).exists() {
            return Ok(ItemOutcome::Dropped(target));
        }
        item.set_path(target);
    }

    let new_core = match core_source(&item, default_core) {
        Some(CoreSource::Own(core_path)) => core_location(core_path, config),
        Some(CoreSource::PlaylistDefault(core)) => Some(core.to_string()),
        None => None,
    };
    if let Some(core) = new_core {
        item.set_core_path(core);
    }

    Ok(ItemOutcome::Rewritten(item))
}

/// Decide which core an item should point at after the import.
///
/// An item naming a real core keeps that core's file name, provided it also
/// has a content path. `DETECT`, empty, or missing `core_path` values fall
/// back to the playlist default core when there is one.
fn core_source<'a>(item: &'a Item, default_core: Option<&'a str>) -> Option<CoreSource<'a>> {
    match item.core_path() {
        Some(core_path) if core_path != DETECT_CORE && !core_path.is_empty() => {
            let has_content_name = item
                .path()
                .map(|p| !paths::file_name(&paths::normalize(p)).is_empty())
                .unwrap_or(false);
            has_content_name.then_some(CoreSource::Own(core_path))
        }
        _ => default_core.map(CoreSource::PlaylistDefault),
    }
}

#[cfg(test)]
#[path = "tests/rewrite_tests.rs"]
mod tests;
