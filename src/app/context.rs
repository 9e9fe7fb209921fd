use crate::ports::{SiteArchiver, SiteStore, TemplateStore};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: SiteStore, T: TemplateStore, A: SiteArchiver> {
    site: S,
    templates: T,
    archiver: A,
}

impl<S: SiteStore, T: TemplateStore, A: SiteArchiver> AppContext<S, T, A> {
    /// Create a new application context.
    pub fn new(site: S, templates: T, archiver: A) -> Self {
        Self { site, templates, archiver }
    }

    /// Get a reference to the site store.
    pub fn site(&self) -> &S {
        &self.site
    }

    /// Get a reference to the template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    /// Get a reference to the archiver.
    pub fn archiver(&self) -> &A {
        &self.archiver
    }
}
