use include_dir::{Dir, include_dir};

use crate::domain::{AppError, ArtifactKind};
use crate::ports::TemplateStore;

static SITE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/site");

/// Template store backed by files embedded at compile time.
///
/// Templates are stored under `src/assets/site/` at the same relative path as
/// the artifact they produce.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateStore for EmbeddedTemplateStore {
    fn template(&self, kind: ArtifactKind) -> Result<String, AppError> {
        SITE_DIR
            .get_file(kind.path())
            .and_then(|file| file.contents_utf8())
            .map(|content| content.to_string())
            .ok_or_else(|| AppError::TemplateMissing { path: kind.path().to_string() })
    }
}
