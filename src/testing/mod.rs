mod fake_tool_runner;
mod memory_filesystem;

pub use fake_tool_runner::FakeToolRunner;
pub use memory_filesystem::MemoryFilesystem;
