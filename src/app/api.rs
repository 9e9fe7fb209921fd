//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::app::{AppContext, commands::build};
use crate::domain::{ARCHIVE_NAME, BuildStamp};
use crate::services::{EmbeddedTemplateStore, FilesystemSiteStore, ZipArchiver, load_site_config};

pub use crate::app::commands::build::BuildOutcome;
pub use crate::domain::AppError;

/// Create an `AppContext` for a given path.
fn create_context(
    path: PathBuf,
) -> AppContext<FilesystemSiteStore, EmbeddedTemplateStore, ZipArchiver> {
    let site = FilesystemSiteStore::new(path);
    let templates = EmbeddedTemplateStore::new();
    let archiver = ZipArchiver::new(ARCHIVE_NAME);
    AppContext::new(site, templates, archiver)
}

/// Generate the site and its archive in the current directory.
pub fn build() -> Result<BuildOutcome, AppError> {
    let cwd = std::env::current_dir()?;
    build_at(cwd)
}

/// Generate the site and its archive under `root`.
///
/// The build stamp is taken once, when this function is called.
pub fn build_at(root: PathBuf) -> Result<BuildOutcome, AppError> {
    let config = load_site_config(BuildStamp::now())?;
    let ctx = create_context(root);
    build::execute(&ctx, &config)
}
