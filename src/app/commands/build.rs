//! Build command: render, emit and archive every site artifact.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::domain::{AppError, Artifact, ArtifactKind, SiteConfig, substitute};
use crate::ports::{SiteArchiver, SiteStore, TemplateStore};

/// Result of a completed build.
#[derive(Debug, Clone)]
pub struct BuildOutcome {
    /// Directory the site was generated into.
    pub root: PathBuf,
    /// Artifact paths written, relative to `root`, in emission order.
    pub written: Vec<&'static str>,
    /// Path of the generated archive.
    pub archive: PathBuf,
    /// Build identifier embedded in the output.
    pub build_id: String,
}

impl BuildOutcome {
    /// File name of the archive, for status output.
    pub fn archive_name(&self) -> String {
        self.archive
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.archive.display().to_string())
    }
}

/// Render the artifact of `kind` from its template.
pub fn render<T: TemplateStore>(
    templates: &T,
    config: &SiteConfig,
    kind: ArtifactKind,
) -> Result<Artifact, AppError> {
    let template = templates.template(kind)?;
    let content = substitute(&template, &config.token_values(kind));
    Ok(Artifact::new(kind, content))
}

/// Execute the build command.
///
/// Artifacts are written first, then archived from disk. Both steps walk
/// `ArtifactKind::ALL`.
pub fn execute<S, T, A>(ctx: &AppContext<S, T, A>, config: &SiteConfig) -> Result<BuildOutcome, AppError>
where
    S: SiteStore,
    T: TemplateStore,
    A: SiteArchiver,
{
    let mut written = Vec::with_capacity(ArtifactKind::ALL.len());
    for kind in ArtifactKind::ALL {
        let artifact = render(ctx.templates(), config, kind)?;
        ctx.site().write_artifact(&artifact)?;
        written.push(artifact.path());
    }

    let archive = ctx.archiver().archive(ctx.site().root(), &written)?;
    info!(artifacts = written.len(), archive = %archive.display(), build_id = config.build_id(), "site built");

    Ok(BuildOutcome {
        root: ctx.site().root().to_path_buf(),
        written,
        archive,
        build_id: config.build_id().to_string(),
    })
}
