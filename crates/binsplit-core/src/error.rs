use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BinsplitError {
    // IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create {}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Chunking
    #[error("Invalid chunk size: {0} (must be at least 1 byte)")]
    InvalidChunkSize(u64),

    #[error("Path has no file name component: {}", .0.display())]
    MissingFileName(PathBuf),

    // Config
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDe(String),

    #[error("TOML serialization error: {0}")]
    TomlSer(String),
}

impl BinsplitError {
    /// The underlying I/O error, if this failure came from the filesystem.
    pub fn io_error(&self) -> Option<&std::io::Error> {
        match self {
            Self::Io(e) => Some(e),
            Self::Open { source, .. } | Self::Create { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BinsplitError>;
