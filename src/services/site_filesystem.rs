use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{AppError, Artifact};
use crate::ports::SiteStore;

/// Filesystem-based site store implementation.
#[derive(Debug, Clone)]
pub struct FilesystemSiteStore {
    root: PathBuf,
}

impl FilesystemSiteStore {
    /// Create a site store for the given root directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl SiteStore for FilesystemSiteStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn write_artifact(&self, artifact: &Artifact) -> Result<PathBuf, AppError> {
        let path = self.root.join(artifact.relative_path());
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &artifact.content)?;
        debug!(path = artifact.path(), bytes = artifact.content.len(), "wrote artifact");
        Ok(path)
    }
}
