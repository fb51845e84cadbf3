use std::collections::VecDeque;
use std::sync::Mutex;

use crate::domain::{AppError, ToolInvocation};
use crate::ports::{ToolOutput, ToolRunner};

/// Records invocations and replays queued responses in order.
///
/// With an empty queue every call succeeds with empty output.
#[derive(Default)]
pub struct FakeToolRunner {
    pub invocations: Mutex<Vec<ToolInvocation>>,
    pub attached: Mutex<Vec<ToolInvocation>>,
    responses: Mutex<VecDeque<Result<ToolOutput, AppError>>>,
}

impl FakeToolRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_stdout(&self, stdout: &str) {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(ToolOutput { stdout: stdout.to_string(), stderr: String::new() }));
    }

    pub fn push_failure(&self, details: &str) {
        self.responses.lock().unwrap().push_back(Err(AppError::ToolFailed {
            command: "fake".to_string(),
            details: details.to_string(),
        }));
    }

    pub fn calls(&self) -> Vec<String> {
        self.invocations.lock().unwrap().iter().map(ToString::to_string).collect()
    }

    fn next_response(&self) -> Result<ToolOutput, AppError> {
        self.responses.lock().unwrap().pop_front().unwrap_or_else(|| Ok(ToolOutput::default()))
    }
}

impl ToolRunner for FakeToolRunner {
    fn run(&self, invocation: &ToolInvocation) -> Result<ToolOutput, AppError> {
        self.invocations.lock().unwrap().push(invocation.clone());
        self.next_response()
    }

    fn run_attached(&self, invocation: &ToolInvocation) -> Result<(), AppError> {
        self.attached.lock().unwrap().push(invocation.clone());
        self.next_response().map(|_| ())
    }
}
