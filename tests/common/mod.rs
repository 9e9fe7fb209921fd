//! Shared testing utilities for zerobyte-site tests.

use assert_cmd::Command;
use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use zip::ZipArchive;

/// Artifact paths every build must produce.
#[allow(dead_code)]
pub const EXPECTED_ARTIFACTS: [&str; 7] = [
    "index.html",
    "README.md",
    "manifest.webmanifest",
    "service-worker.js",
    "robots.txt",
    "sitemap.xml",
    "assets/icon.svg",
];

/// Testing harness providing an isolated output directory.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty work directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Directory the generator writes into.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("zerobyte-site").expect("Failed to locate binary");
        cmd.current_dir(&self.work_dir).env_remove("RUST_LOG");
        cmd
    }

    /// Read a generated file relative to the work directory.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.work_dir.join(rel))
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", rel, e))
    }

    /// Path of the generated archive.
    pub fn archive_path(&self) -> PathBuf {
        self.work_dir.join("zerobyte_terminal_site.zip")
    }

    /// Sorted entry names in the generated archive.
    pub fn archive_entries(&self) -> Vec<String> {
        let archive = ZipArchive::new(File::open(self.archive_path()).expect("archive should exist"))
            .expect("archive should be a valid zip");
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        names
    }

    /// Content of one archive entry.
    pub fn archive_entry(&self, name: &str) -> String {
        let mut archive =
            ZipArchive::new(File::open(self.archive_path()).expect("archive should exist"))
                .expect("archive should be a valid zip");
        let mut content = String::new();
        archive
            .by_name(name)
            .unwrap_or_else(|e| panic!("Missing archive entry {}: {}", name, e))
            .read_to_string(&mut content)
            .expect("entry should be UTF-8");
        content
    }

    /// Assert that every artifact exists on disk.
    pub fn assert_artifacts_exist(&self) {
        for rel in EXPECTED_ARTIFACTS {
            assert!(self.work_dir.join(rel).is_file(), "{} should exist", rel);
        }
    }
}
