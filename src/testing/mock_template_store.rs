use std::collections::HashMap;

use crate::domain::{AppError, ArtifactKind};
use crate::ports::TemplateStore;

/// Template store serving only the templates it was given.
#[derive(Default)]
pub struct MockTemplateStore {
    templates: HashMap<ArtifactKind, String>,
}

impl MockTemplateStore {
    pub fn with_template(kind: ArtifactKind, content: &str) -> Self {
        let mut store = Self::default();
        store.templates.insert(kind, content.to_string());
        store
    }
}

impl TemplateStore for MockTemplateStore {
    fn template(&self, kind: ArtifactKind) -> Result<String, AppError> {
        self.templates
            .get(&kind)
            .cloned()
            .ok_or_else(|| AppError::TemplateMissing { path: kind.path().to_string() })
    }
}
