use std::path::{Path, PathBuf};

use crate::domain::{AppError, Artifact};

/// Port for writing generated artifacts to an output location.
pub trait SiteStore {
    /// Root directory artifacts are written under.
    fn root(&self) -> &Path;

    /// Write one artifact, creating parent directories and overwriting any
    /// existing file. Returns the absolute path written.
    fn write_artifact(&self, artifact: &Artifact) -> Result<PathBuf, AppError>;
}
