mod mock_site_store;
mod mock_template_store;

pub use mock_archiver::MockArchiver;
pub use mock_site_store::MockSiteStore;
pub use mock_template_store::MockTemplateStore;
