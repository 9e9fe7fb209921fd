use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, Artifact};
use crate::ports::SiteStore;

/// In-memory site store recording every artifact written.
#[derive(Default)]
pub struct MockSiteStore {
    root: PathBuf,
    pub artifacts: RefCell<Vec<Artifact>>,
}

impl MockSiteStore {
    pub fn new() -> Self {
        Self { root: PathBuf::from("site"), artifacts: RefCell::default() }
    }

    pub fn written_paths(&self) -> Vec<&'static str> {
        self.artifacts.borrow().iter().map(Artifact::path).collect()
    }
}

impl SiteStore for MockSiteStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn write_artifact(&self, artifact: &Artifact) -> Result<PathBuf, AppError> {
        self.artifacts.borrow_mut().push(artifact.clone());
        Ok(self.root.join(artifact.relative_path()))
    }
}
