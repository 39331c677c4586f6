//! Import rules: global settings plus one rule-set per playlist database.
//!
//! Two file formats are understood. INI files use a `[DEFAULT]` section for
//! the global keys and one section per database name:
//!
//! ```ini
//! [DEFAULT]
//! base_content_directory = /media/games
//! core_directory = /media/cores
//! core_extension = so
//! output_filename_append = .lpl
//!
//! [Nintendo - Game Boy]
//! content_directory = gb
//! ```
//!
//! TOML files carry the same data as a `[DEFAULT]` table (bare top-level keys
//! also count as globals) and quoted tables such as `["Nintendo - Game Boy"]`.
//! Database sections inherit any key they lack from the defaults.

use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, ImportError};
use crate::paths;

/// Name of the section holding global settings.
pub const DEFAULT_SECTION: &str = "DEFAULT";

/// Rules for playlist items whose `db_name` matches a configured section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseRule {
    content_directory: Option<String>,
}

impl DatabaseRule {
    /// Content subdirectory relative to the base content directory, as written
    /// in the configuration (not yet normalized).
    pub fn content_directory(&self) -> Option<&str> {
        self.content_directory.as_deref()
    }
}

/// Fully resolved import configuration.
///
/// Directory values are normalized to forward-slash form when loaded.
#[derive(Debug, Clone)]
pub struct Config {
    pub base_content_directory: String,
    pub core_directory: String,
    /// Core file extension including its leading dot (e.g. `.so`).
    pub core_extension: String,
    pub output_filename_prefix: String,
    pub output_filename_append: String,
    /// Raw output directory; empty means "next to the input file".
    pub output_directory: String,
    pub overwrite_existing_playlist: bool,
    pub validate_rom_path: bool,
    databases: BTreeMap<String, DatabaseRule>,
}

/// On-disk configuration format, picked from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Ini,
    Toml,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Self::Toml,
            _ => Self::Ini,
        }
    }
}

impl Config {
    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self, ImportError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ImportError::ReadFailure {
            path: path.to_path_buf(),
            source,
        })?;

        let parsed = match ConfigFormat::from_path(path) {
            ConfigFormat::Ini => Self::from_ini_str(&contents),
            ConfigFormat::Toml => Self::from_toml_str(&contents),
        };

        parsed.map_err(|source| ImportError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn from_ini_str(source: &str) -> Result<Self, ConfigError> {
        Self::from_raw(parse_ini(source)?)
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        Self::from_raw(parse_toml(source)?)
    }

    /// Rule-set for a database name (already stripped of `.lpl`).
    pub fn database(&self, name: &str) -> Option<&DatabaseRule> {
        self.databases.get(name)
    }

    pub fn database_names(&self) -> impl Iterator<Item = &str> {
        self.databases.keys().map(String::as_str)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let required = |key: &str| {
            raw.defaults
                .get(key)
                .map(String::as_str)
                .ok_or_else(|| ConfigError::MissingRequiredField {
                    section: DEFAULT_SECTION.to_string(),
                    key: key.to_string(),
                })
        };
        let optional = |key: &str| raw.defaults.get(key).cloned().unwrap_or_default();
        let flag = |key: &str| match raw.defaults.get(key) {
            Some(value) => parse_bool(key, value),
            None => Ok(false),
        };

        let base_content_directory = paths::normalize(required("base_content_directory")?);
        let core_directory = paths::normalize(required("core_directory")?);
        let core_extension = normalize_extension(required("core_extension")?)?;

        let databases = raw
            .sections
            .iter()
            .map(|(name, keys)| {
                let content_directory = keys
                    .get("content_directory")
                    .or_else(|| raw.defaults.get("content_directory"))
                    .cloned();
                (name.clone(), DatabaseRule { content_directory })
            })
            .collect();

        Ok(Self {
            base_content_directory,
            core_directory,
            core_extension,
            output_filename_prefix: optional("output_filename_prefix"),
            output_filename_append: optional("output_filename_append"),
            output_directory: optional("output_directory"),
            overwrite_existing_playlist: flag("overwrite_existing_playlist")?,
            validate_rom_path: flag("validate_rom_path")?,
            databases,
        })
    }
}

fn normalize_extension(value: &str) -> Result<String, ConfigError> {
    let extension = if value.starts_with('.') {
        value.to_string()
    } else {
        format!(".{}", value)
    };
    if extension.len() < 2 || extension.contains('/') || extension.contains('\\') {
        return Err(ConfigError::InvalidValue {
            key: "core_extension".to_string(),
            value: value.to_string(),
            expected: "a file extension such as 'so' or '.dll'",
        });
    }
    Ok(extension)
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "yes" | "true" | "on" => Ok(true),
        "0" | "no" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            expected: "a boolean (yes/no, true/false, on/off, 1/0)",
        }),
    }
}

/// Untyped key/value view shared by both file formats. Keys are lowercase.
#[derive(Debug, Default)]
struct RawConfig {
    defaults: BTreeMap<String, String>,
    sections: BTreeMap<String, BTreeMap<String, String>>,
}

impl RawConfig {
    fn section_mut(&mut self, name: &str) -> &mut BTreeMap<String, String> {
        if name == DEFAULT_SECTION {
            &mut self.defaults
        } else {
            self.sections.entry(name.to_string()).or_default()
        }
    }
}

fn parse_ini(source: &str) -> Result<RawConfig, ConfigError> {
    let mut raw = RawConfig::default();
    let mut seen_sections: Vec<String> = Vec::new();
    let mut current: Option<String> = None;
    let mut last_key: Option<String> = None;

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            last_key = None;
            continue;
        }
        if trimmed.starts_with('#') || trimmed.starts_with(';') {
            continue;
        }

        // Indented lines continue the previous value.
        if line.starts_with(char::is_whitespace) {
            if let (Some(section), Some(key)) = (&current, &last_key) {
                if let Some(value) = raw.section_mut(section).get_mut(key) {
                    if !value.is_empty() {
                        value.push('\n');
                    }
                    value.push_str(trimmed);
                }
                continue;
            }
        }

        // Anything after the closing bracket, such as a comment, is ignored.
        if let Some(header) = trimmed
            .strip_prefix('[')
            .and_then(|s| s.rfind(']').map(|end| &s[..end]))
        {
            let name = header.trim();
            if name.is_empty() {
                return Err(ConfigError::parse(line_no, "empty section name"));
            }
            if seen_sections.iter().any(|s| s == name) {
                return Err(ConfigError::parse(
                    line_no,
                    format!("section [{}] defined more than once", name),
                ));
            }
            seen_sections.push(name.to_string());
            raw.section_mut(name);
            current = Some(name.to_string());
            last_key = None;
            continue;
        }

        let Some(section) = current.clone() else {
            return Err(ConfigError::parse(line_no, "key outside of any section"));
        };
        let Some(split) = trimmed.find(['=', ':']) else {
            return Err(ConfigError::parse(
                line_no,
                format!("expected 'key = value', found '{}'", trimmed),
            ));
        };

        let key = trimmed[..split].trim().to_lowercase();
        let value = trimmed[split + 1..].trim().to_string();
        if key.is_empty() {
            return Err(ConfigError::parse(line_no, "empty key"));
        }

        let entries = raw.section_mut(&section);
        if entries.contains_key(&key) {
            return Err(ConfigError::parse(
                line_no,
                format!("key '{}' repeated in section [{}]", key, section),
            ));
        }
        entries.insert(key.clone(), value);
        last_key = Some(key);
    }

    Ok(raw)
}

fn parse_toml(source: &str) -> Result<RawConfig, ConfigError> {
    let table: toml::Table = source.parse()?;
    let mut raw = RawConfig::default();

    for (name, value) in table {
        match value {
            toml::Value::Table(entries) => {
                let section = raw.section_mut(&name);
                for (key, value) in entries {
                    let value = toml_scalar(&key, value)?;
                    section.insert(key.to_lowercase(), value);
                }
            }
            other => {
                let value = toml_scalar(&name, other)?;
                raw.defaults.insert(name.to_lowercase(), value);
            }
        }
    }

    Ok(raw)
}

fn toml_scalar(key: &str, value: toml::Value) -> Result<String, ConfigError> {
    match value {
        toml::Value::String(s) => Ok(s),
        toml::Value::Boolean(b) => Ok(b.to_string()),
        toml::Value::Integer(i) => Ok(i.to_string()),
        toml::Value::Float(f) => Ok(f.to_string()),
        other => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: other.to_string(),
            expected: "a string, number or boolean",
        }),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
