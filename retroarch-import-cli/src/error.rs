use thiserror::Error;

use retroarch_import_core::ImportError;

/// Errors that end a CLI run with a failure status.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// Configuration could not be found or parsed
    #[error(transparent)]
    Import(#[from] ImportError),

    /// Some playlists could not be imported
    #[error("{failed} of {total} playlist(s) failed to import")]
    PartialFailure { failed: usize, total: usize },
}
