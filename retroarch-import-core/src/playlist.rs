//! In-memory RetroArch playlist (`.lpl`) documents.
//!
//! A playlist is kept as its original JSON objects so that fields the
//! rewriter never looks at (labels, CRCs, thumbnail modes, ...) survive
//! untouched and in their original order. The fields the rewriter does care
//! about are exposed through typed accessors.

use std::path::Path;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::error::{ImportError, PlaylistError};

pub const DEFAULT_CORE_PATH: &str = "default_core_path";
pub const BASE_CONTENT_DIRECTORY: &str = "base_content_directory";
pub const SCAN_CONTENT_DIR: &str = "scan_content_dir";
pub const ITEMS: &str = "items";

pub const PATH: &str = "path";
pub const CORE_PATH: &str = "core_path";
pub const DB_NAME: &str = "db_name";

/// `core_path` value asking RetroArch to pick the core itself.
pub const DETECT_CORE: &str = "DETECT";

/// One playable entry in a playlist.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(transparent)]
pub struct Item {
    fields: Map<String, Value>,
}

impl Item {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    /// Content file location, if present as a string.
    pub fn path(&self) -> Option<&str> {
        self.string(PATH)
    }

    /// Core location, `DETECT`, or empty.
    pub fn core_path(&self) -> Option<&str> {
        self.string(CORE_PATH)
    }

    /// Source database, normally ending in `.lpl`.
    pub fn db_name(&self) -> Option<&str> {
        self.string(DB_NAME)
    }

    pub fn set_path(&mut self, path: String) {
        self.fields.insert(PATH.to_string(), Value::String(path));
    }

    pub fn set_core_path(&mut self, core_path: String) {
        self.fields.insert(CORE_PATH.to_string(), Value::String(core_path));
    }

    /// Raw access to every field of the item.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    fn string(&self, key: &str) -> Option<&str> {
        self.fields.get(key).and_then(Value::as_str)
    }
}

/// A parsed playlist document.
#[derive(Debug, Clone, PartialEq)]
pub struct Playlist {
    /// Top-level fields in input order. The `items` entry is a placeholder;
    /// the real items live in `items`.
    fields: Map<String, Value>,
    pub items: Vec<Item>,
}

impl Playlist {
    pub fn default_core_path(&self) -> Option<&str> {
        self.fields.get(DEFAULT_CORE_PATH).and_then(Value::as_str)
    }

    pub fn set_default_core_path(&mut self, path: String) {
        self.fields
            .insert(DEFAULT_CORE_PATH.to_string(), Value::String(path));
    }

    /// Whether a top-level key is present, whatever its value.
    pub fn has_field(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Overwrite a top-level string field in place.
    pub fn set_field(&mut self, key: &str, value: String) {
        self.fields.insert(key.to_string(), Value::String(value));
    }

    /// Remove a top-level key, keeping the order of the remaining keys.
    pub fn remove_field(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Top-level keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Pretty-printed JSON with two-space indentation.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

impl TryFrom<Value> for Playlist {
    type Error = PlaylistError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let Value::Object(mut fields) = value else {
            return Err(PlaylistError::NotAnObject);
        };

        let raw_items = match fields.get_mut(ITEMS) {
            Some(Value::Array(items)) => std::mem::take(items),
            _ => return Err(PlaylistError::MissingItems),
        };

        let items = raw_items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(map) => Ok(Item::new(map)),
                _ => Err(PlaylistError::InvalidItem { index }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { fields, items })
    }
}

impl FromStr for Playlist {
    type Err = PlaylistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: Value = serde_json::from_str(s)?;
        Self::try_from(value)
    }
}

impl Serialize for Playlist {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            if key == ITEMS {
                map.serialize_entry(key, &self.items)?;
            } else {
                map.serialize_entry(key, value)?;
            }
        }
        map.end()
    }
}

/// Read and parse a playlist file.
///
/// The file extension is ignored; only the content decides.
pub fn load_playlist(path: &Path) -> Result<Playlist, ImportError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ImportError::ReadFailure {
        path: path.to_path_buf(),
        source,
    })?;

    contents
        .parse()
        .map_err(|source| ImportError::MalformedPlaylist {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "tests/playlist_tests.rs"]
mod tests;
