//! Site configuration constructed once per run.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::artifact::ArtifactKind;
use super::error::AppError;
use super::substitution::Token;

/// Social and profile links rendered into the site.
///
/// Keys keep the logical names used by the terminal UI (`YouTube`, `X`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteLinks {
    pub github: String,
    pub linkedin: String,
    #[serde(rename = "YouTube")]
    pub youtube: String,
    #[serde(rename = "X")]
    pub x: String,
    pub certificates: String,
}

/// Instant a build started, rendered as the build identifier and sitemap date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuildStamp(DateTime<Utc>);

impl BuildStamp {
    pub fn new(at: DateTime<Utc>) -> Self {
        Self(at)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// `YYYY-MM-DD HH:MM:SS UTC`
    pub fn build_id(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    }

    /// `YYYY-MM-DD`
    pub fn build_date(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Deserialize)]
struct SiteFile {
    site_url: String,
    links: SiteLinks,
}

/// Configuration for a single generator run.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    site_url: String,
    links: SiteLinks,
    build: BuildStamp,
    build_id: String,
    build_date: String,
}

impl SiteConfig {
    pub fn new(site_url: impl Into<String>, links: SiteLinks, build: BuildStamp) -> Self {
        Self {
            site_url: site_url.into(),
            links,
            build,
            build_id: build.build_id(),
            build_date: build.build_date(),
        }
    }

    /// Parse site settings from TOML text and attach the given build stamp.
    pub fn from_toml(content: &str, build: BuildStamp) -> Result<Self, AppError> {
        let file: SiteFile = toml::from_str(content)
            .map_err(|err| AppError::config_error(format!("Invalid site config: {}", err)))?;
        Ok(Self::new(file.site_url, file.links, build))
    }

    pub fn site_url(&self) -> &str {
        &self.site_url
    }

    pub fn links(&self) -> &SiteLinks {
        &self.links
    }

    pub fn build(&self) -> BuildStamp {
        self.build
    }

    pub fn build_id(&self) -> &str {
        &self.build_id
    }

    pub fn build_date(&self) -> &str {
        &self.build_date
    }

    /// Token values applied to the template of `kind`.
    pub fn token_values(&self, kind: ArtifactKind) -> Vec<(Token, &str)> {
        match kind {
            ArtifactKind::IndexHtml => vec![
                (Token::BuildId, self.build_id.as_str()),
                (Token::Github, self.links.github.as_str()),
                (Token::Linkedin, self.links.linkedin.as_str()),
                (Token::Youtube, self.links.youtube.as_str()),
                (Token::X, self.links.x.as_str()),
                (Token::Certificates, self.links.certificates.as_str()),
            ],
            ArtifactKind::Readme => vec![
                (Token::SiteUrl, self.site_url.as_str()),
                (Token::BuildId, self.build_id.as_str()),
            ],
            ArtifactKind::Sitemap => vec![
                (Token::SiteUrl, self.site_url.as_str()),
                (Token::BuildDate, self.build_date.as_str()),
            ],
            ArtifactKind::Manifest
            | ArtifactKind::ServiceWorker
            | ArtifactKind::Robots
            | ArtifactKind::Icon => Vec::new(),
        }
    }
}
