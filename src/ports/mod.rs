mod context_filesystem;
mod template_catalog;
mod tool_runner;

pub use context_filesystem::ContextFilesystem;
pub use template_catalog::TemplateCatalog;
pub use tool_runner::{ToolOutput, ToolRunner};
