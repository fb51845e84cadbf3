pub mod embedded_templates;
pub mod local_filesystem;
pub mod process_runner;

pub use embedded_templates::EmbeddedTemplateCatalog;
pub use local_filesystem::LocalFilesystem;
pub use process_runner::ProcessToolRunner;
