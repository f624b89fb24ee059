use std::path::PathBuf;

use thiserror::Error;

/// Errors from the layers that touch files. Parsing and naming never fail.
#[derive(Debug, Error)]
pub enum LexnormError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("profile '{profile}' not found in {}", path.display())]
    ProfileNotFound { profile: String, path: PathBuf },

    #[error("invalid config {}: {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid overrides file: {0}")]
    InvalidOverrides(#[from] toml::de::Error),
}
