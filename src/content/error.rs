//! Content loading error types.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by the content loaders
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content root `{0}` does not exist")]
    RootNotFound(PathBuf),

    #[error("post `{slug}` could not be read from `{path}`")]
    NotFound {
        slug: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed front-matter in `{path}`")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("no posts could be loaded from `{0}`")]
    Empty(PathBuf),

    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] io::Error),
}

impl ContentError {
    /// Whether the error means "nothing there" rather than a broken site.
    ///
    /// A serving layer maps these to a not-found response and everything else
    /// to an internal error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::RootNotFound(_) | Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::io::ErrorKind;

    #[test]
    fn test_not_found_display_and_source() {
        let err = ContentError::NotFound {
            slug: "hello".to_string(),
            path: PathBuf::from("content/hello.md"),
            source: io::Error::new(ErrorKind::NotFound, "file not found"),
        };
        let display = format!("{err}");
        assert!(display.contains("hello"));
        assert!(display.contains("content/hello.md"));
        assert!(err.source().is_some());
        assert!(err.is_not_found());
    }

    #[test]
    fn test_not_found_classification() {
        assert!(ContentError::RootNotFound(PathBuf::from("content")).is_not_found());
        assert!(!ContentError::Empty(PathBuf::from("content")).is_not_found());

        let io_err = ContentError::Io(
            PathBuf::from("content"),
            io::Error::new(ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!io_err.is_not_found());
        assert!(format!("{io_err}").contains("IO error"));
    }
}
