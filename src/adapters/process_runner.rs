use std::process::{Command, Stdio};

use crate::domain::{AppError, ToolInvocation};
use crate::ports::{ToolOutput, ToolRunner};

/// Runs tools as child processes with an argument vector; never via a shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessToolRunner;

impl ProcessToolRunner {
    pub fn new() -> Self {
        Self
    }

    fn command(invocation: &ToolInvocation) -> Command {
        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        command
    }
}

impl ToolRunner for ProcessToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        tracing::debug!(command = %invocation, "running tool");
        let output = Self::command(invocation).stdin(Stdio::null()).output().map_err(|e| {
            AppError::ToolFailed { command: invocation.to_string(), details: e.to_string() }
        })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            return Err(AppError::ToolFailed {
                command: invocation.to_string(),
                details: if stderr.is_empty() { exit_details(output.status) } else { stderr },
            });
        }

        Ok(ToolOutput { stdout, stderr })
    }

    fn run_attached(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        tracing::debug!(command = %invocation, "running tool attached");
        let status = Self::command(invocation).status().map_err(|e| AppError::ToolFailed {
            command: invocation.to_string(),
            details: e.to_string(),
        })?;

        if !status.success() {
            return Err(AppError::ToolFailed {
                command: invocation.to_string(),
                details: exit_details(status),
            });
        }
        Ok(())
    }
}

fn exit_details(status: std::process::ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with status {code}"),
        None => "terminated by signal".to_string(),
    }
}
