use crate::domain::Toolchain;
use crate::ports::{ContextFilesystem, ToolRunner};

/// Application context holding dependencies for tool-driven commands.
pub struct AppContext<F: ContextFilesystem, R: ToolRunner> {
    filesystem: F,
    runner: R,
    toolchain: Toolchain,
}

impl<F: ContextFilesystem, R: ToolRunner> AppContext<F, R> {
    pub fn new(filesystem: F, runner: R, toolchain: Toolchain) -> Self {
        Self { filesystem, runner, toolchain }
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn toolchain(&self) -> &Toolchain {
        &self.toolchain
    }
}
