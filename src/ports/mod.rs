mod site_archiver;
mod site_store;
mod template_store;

pub use site_archiver::SiteArchiver;
pub use site_store::SiteStore;
pub use template_store::TemplateStore;
