use std::path::PathBuf;

/// Errors raised while reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("missing required key '{key}' in section [{section}]")]
    MissingRequiredField { section: String, key: String },

    #[error("invalid value '{value}' for '{key}': expected {expected}")]
    InvalidValue {
        key: String,
        value: String,
        expected: &'static str,
    },
}

impl ConfigError {
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Reasons a playlist document is rejected by the loader.
#[derive(Debug, thiserror::Error)]
pub enum PlaylistError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("top-level value is not an object")]
    NotAnObject,

    #[error("missing 'items' array")]
    MissingItems,

    #[error("item {index} is not an object")]
    InvalidItem { index: usize },
}

/// Errors that can occur while importing playlists.
///
/// Everything except [`ImportError::ConfigurationNotFound`] and
/// [`ImportError::Config`] is scoped to a single input file.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Configuration not found in possible locations: {}", display_paths(.candidates))]
    ConfigurationNotFound { candidates: Vec<PathBuf> },

    #[error("Invalid configuration {}: {source}", .path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: ConfigError,
    },

    #[error("Malformed playlist {}: {source}", .path.display())]
    MalformedPlaylist {
        path: PathBuf,
        #[source]
        source: PlaylistError,
    },

    #[error("Missing required key '{key}' in section [{section}]")]
    MissingRequiredField { section: String, key: String },

    #[error("Failed to read {}: {source}", .path.display())]
    ReadFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    DestinationWriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    let quoted: Vec<String> = paths
        .iter()
        .map(|p| format!("'{}'", p.display()))
        .collect();
    format!("[{}]", quoted.join(", "))
}
