use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the interactor outside of the transactions themselves.
#[derive(Error, Debug)]
pub enum InteractError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("no known contract, deploy first")]
    NotDeployed,
}

pub type Result<T> = std::result::Result<T, InteractError>;
