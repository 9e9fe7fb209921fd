use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::debug;
use zip::CompressionMethod;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::domain::AppError;
use crate::ports::SiteArchiver;

/// Writes a deflate-compressed zip archive of emitted artifacts.
#[derive(Debug, Clone)]
pub struct ZipArchiver {
    archive_name: String,
}

impl ZipArchiver {
    pub fn new(archive_name: impl Into<String>) -> Self {
        Self { archive_name: archive_name.into() }
    }
}

impl SiteArchiver for ZipArchiver {
    fn archive(&self, root: &Path, paths: &[&str]) -> Result<PathBuf, AppError> {
        // Every entry must be on disk before the archive is truncated.
        let mut entries = Vec::with_capacity(paths.len());
        for rel in paths {
            let source: PathBuf = root.join(rel.split('/').collect::<PathBuf>());
            let bytes = fs::read(&source).map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => AppError::ArtifactMissing { path: rel.to_string() },
                _ => AppError::Io(err),
            })?;
            entries.push((*rel, bytes));
        }

        let archive_path = root.join(&self.archive_name);
        let mut writer = ZipWriter::new(File::create(&archive_path)?);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, bytes) in entries {
            writer.start_file(name, options)?;
            writer.write_all(&bytes)?;
            debug!(entry = name, bytes = bytes.len(), "archived artifact");
        }

        writer.finish()?;
        Ok(archive_path)
    }
}
