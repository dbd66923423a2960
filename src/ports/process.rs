//! Child process port trait

use crate::domain::RigResult;

/// Result of a child process that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code, `None` if the process was killed by a signal
    pub code: Option<i32>,
    /// stdout and stderr combined, in the order they were written
    pub output: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Runs an external program and captures what it printed.
pub trait ProcessRunner {
    /// Run `program` with `args` and wait for it to exit.
    ///
    /// Returns `Err` only when the process could not be started; a non-zero
    /// exit is reported through `ProcessOutput::code`.
    fn run(&self, program: &str, args: &[String]) -> RigResult<ProcessOutput>;
}
