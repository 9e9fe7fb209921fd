//! zerobyte-site: generate the ZeroByte terminal portfolio site and its zip bundle.

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{BuildOutcome, build, build_at};
pub use domain::{ARCHIVE_NAME, AppError, ArtifactKind};
