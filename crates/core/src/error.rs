use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("failed to read {}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{key} not found in {file}")]
    MissingKey { key: String, file: String },

    #[error("Invalid check target: {0}")]
    InvalidTarget(String),

    #[error("{0}")]
    Database(String),
}

impl CheckError {
    /// Process exit status for this failure.
    ///
    /// A missing required key gets its own status (2) so wrapper scripts can
    /// tell "not configured" apart from every other failure (1).
    pub fn exit_code(&self) -> u8 {
        match self {
            CheckError::MissingKey { .. } => 2,
            _ => 1,
        }
    }
}
