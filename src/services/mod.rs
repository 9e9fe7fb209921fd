mod embedded_site_config;
mod embedded_template_store;
mod site_filesystem;
mod zip_archiver;

pub use embedded_site_config::load_site_config;
pub use embedded_template_store::EmbeddedTemplateStore;
pub use site_filesystem::FilesystemSiteStore;
pub use zip_archiver::ZipArchiver;
