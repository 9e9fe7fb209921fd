use crate::domain::{AppError, ArtifactKind};

/// Port for reading the raw template of each artifact.
pub trait TemplateStore {
    /// Template text for `kind`, before token substitution.
    fn template(&self, kind: ArtifactKind) -> Result<String, AppError>;
}
