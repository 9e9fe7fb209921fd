//! Site settings compiled into the binary.

use crate::domain::{AppError, BuildStamp, SiteConfig};

static SITE_TOML: &str = include_str!("../assets/site.toml");

/// Load the embedded site configuration for a build started at `build`.
pub fn load_site_config(build: BuildStamp) -> Result<SiteConfig, AppError> {
    SiteConfig::from_toml(SITE_TOML, build)
}
