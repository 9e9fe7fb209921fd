use std::io;

use thiserror::Error;

/// Library-wide error type for site generation.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Embedded configuration could not be loaded.
    #[error("{0}")]
    Configuration(String),

    /// A template is missing from the embedded asset bundle.
    #[error("Missing embedded template: {path}")]
    TemplateMissing { path: String },

    /// An artifact expected on disk was not found while archiving.
    #[error("Artifact not found on disk: {path}")]
    ArtifactMissing { path: String },

    /// Zip archive could not be written.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateMissing { .. } | AppError::ArtifactMissing { .. } => {
                io::ErrorKind::NotFound
            }
            AppError::Archive(zip::result::ZipError::Io(err)) => err.kind(),
            AppError::Archive(_) => io::ErrorKind::InvalidData,
        }
    }
}
