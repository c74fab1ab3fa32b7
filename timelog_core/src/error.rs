use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Failure to open or append to a log destination.
///
/// Single kind; the underlying `io::Error` is kept as the source and its
/// `ErrorKind` is available through `kind()`.
#[derive(Debug, Error)]
pub enum LogError {
    #[error("io error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl LogError {
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Destination the failed operation targeted.
    pub fn path(&self) -> &Path {
        match self {
            Self::Io { path, .. } => path,
        }
    }

    pub fn kind(&self) -> io::ErrorKind {
        match self {
            Self::Io { source, .. } => source.kind(),
        }
    }
}

pub type Result<T> = std::result::Result<T, LogError>;
