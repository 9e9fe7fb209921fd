use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for bundling emitted artifacts into a single archive.
pub trait SiteArchiver {
    /// Archive each relative path under `root`, reading the files back from
    /// disk. Entry names are the relative paths as given.
    fn archive(&self, root: &Path, paths: &[&str]) -> Result<PathBuf, AppError>;
}
