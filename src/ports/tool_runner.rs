use crate::domain::{AppError, ToolInvocation};

/// Captured result of a finished tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Port for running external tools (container runtime, VM toolchain).
pub trait ToolRunner {
    /// Run to completion, capturing output. Non-zero exit is `ToolFailed`.
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError>;

    /// Run attached to the current terminal until the program exits.
    fn run_attached(&self, invocation: &ToolInvocation) -> Result<(), AppError>;
}
