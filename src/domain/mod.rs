pub mod artifact;
pub mod config;
pub mod error;
pub mod substitution;

pub use artifact::{ARCHIVE_NAME, Artifact, ArtifactKind};
pub use config::{BuildStamp, SiteConfig, SiteLinks};
pub use error::AppError;
pub use substitution::{Token, substitute};
