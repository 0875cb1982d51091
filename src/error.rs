//! Error type shared by the scanner and the tree builders.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TreeError {
    /// An I/O failure while reading the path or walking below it.
    #[error("{}: {source}", .path.display())]
    Filesystem {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{}: Not a directory", .path.display())]
    NotADirectory { path: PathBuf },
    #[error("invalid configuration: {0}")]
    Configuration(String),
    /// A path that yields no usable segments.
    #[error("empty path: {0}")]
    EmptyPath(String),
}

impl TreeError {
    pub(crate) fn fs(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TreeError::Filesystem {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from touching the filesystem.
    pub fn is_filesystem(&self) -> bool {
        matches!(
            self,
            TreeError::Filesystem { .. } | TreeError::NotADirectory { .. }
        )
    }
}

impl From<walkdir::Error> for TreeError {
    fn from(err: walkdir::Error) -> Self {
        let path = err.path().map(|p| p.to_path_buf()).unwrap_or_default();
        let source = match err.io_error() {
            Some(io_err) => std::io::Error::new(io_err.kind(), io_err.to_string()),
            None => std::io::Error::new(std::io::ErrorKind::Other, err.to_string()),
        };
        TreeError::Filesystem { path, source }
    }
}
