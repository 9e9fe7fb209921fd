//! Generated site artifacts.

use std::path::PathBuf;

/// File name of the bundle written next to the generated site.
pub const ARCHIVE_NAME: &str = "zerobyte_terminal_site.zip";

/// Every file the generator emits.
///
/// `ArtifactKind::ALL` drives both emission and archiving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    IndexHtml,
    Readme,
    Manifest,
    ServiceWorker,
    Robots,
    Sitemap,
    Icon,
}

impl ArtifactKind {
    pub const ALL: [ArtifactKind; 7] = [
        ArtifactKind::IndexHtml,
        ArtifactKind::Readme,
        ArtifactKind::Manifest,
        ArtifactKind::ServiceWorker,
        ArtifactKind::Robots,
        ArtifactKind::Sitemap,
        ArtifactKind::Icon,
    ];

    /// Output path relative to the site root, `/`-separated.
    pub fn path(self) -> &'static str {
        match self {
            ArtifactKind::IndexHtml => "index.html",
            ArtifactKind::Readme => "README.md",
            ArtifactKind::Manifest => "manifest.webmanifest",
            ArtifactKind::ServiceWorker => "service-worker.js",
            ArtifactKind::Robots => "robots.txt",
            ArtifactKind::Sitemap => "sitemap.xml",
            ArtifactKind::Icon => "assets/icon.svg",
        }
    }

    /// Relative paths of all artifacts, in emission order.
    pub fn all_paths() -> Vec<&'static str> {
        Self::ALL.iter().map(|kind| kind.path()).collect()
    }
}

/// A rendered artifact ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub content: String,
}

impl Artifact {
    pub fn new(kind: ArtifactKind, content: impl Into<String>) -> Self {
        Self { kind, content: content.into() }
    }

    pub fn path(&self) -> &'static str {
        self.kind.path()
    }

    /// Relative path as a platform path.
    pub fn relative_path(&self) -> PathBuf {
        self.path().split('/').collect()
    }
}
