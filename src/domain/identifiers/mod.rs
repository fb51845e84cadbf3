pub mod context_file_name;
pub mod validation;

pub use context_file_name::ContextFileName;
