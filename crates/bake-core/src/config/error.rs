//! Errors that stop configuration loading.

use std::io;
use std::path::PathBuf;

/// Fatal failures of [`crate::config::load`]. Everything else the resolver
/// encounters is logged and answered with a fallback value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("The given source folder '{}' does not exist.", .path.display())]
    SourceMissing { path: PathBuf },

    #[error("The given source folder '{}' is not a directory.", .path.display())]
    NotADirectory { path: PathBuf },

    #[error("failed to read properties file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
