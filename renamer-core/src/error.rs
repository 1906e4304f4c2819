use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenameError {
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse preset {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to serialize preset: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid option: {0}")]
    InvalidOption(String),
}

pub type Result<T> = std::result::Result<T, RenameError>;
