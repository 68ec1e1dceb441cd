//! Error types for manifest loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or parsing a manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// Manifest file not found.
    #[error("Manifest not found: {path}")]
    NotFound { path: PathBuf },

    /// Permission denied opening the manifest.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Generic I/O error opening the manifest.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// I/O failure while reading manifest lines.
    #[error("Failed reading manifest at line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: std::io::Error,
    },

    /// Line begins with the `!` failure sentinel.
    #[error("Failed-record sentinel at line {line}: {content}")]
    SentinelLine { line: usize, content: String },

    /// Line has no tab between checksum and filename.
    #[error("Missing tab separator at line {line}")]
    MissingSeparator { line: usize },
}

impl ManifestError {
    /// Create an open error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_error_io() {
        let err = ManifestError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert!(matches!(err, ManifestError::NotFound { .. }));

        let err = ManifestError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(matches!(err, ManifestError::PermissionDenied { .. }));

        let err = ManifestError::io(
            "/test/path",
            std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof"),
        );
        assert!(matches!(err, ManifestError::Io { .. }));
    }

    #[test]
    fn test_error_messages_carry_line_numbers() {
        let err = ManifestError::SentinelLine {
            line: 4,
            content: "!ERROR opening file\tx.jpg".to_string(),
        };
        assert!(err.to_string().contains("line 4"));

        let err = ManifestError::MissingSeparator { line: 9 };
        assert!(err.to_string().contains("line 9"));
    }
}
