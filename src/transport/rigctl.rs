//! rigctl backend: hands the frequency to Hamlib's command-line tool.
//!
//! Runs `rigctl -m <model> F <frequency>`. The frequency is passed as the
//! raw text the operator entered, not as a CAT command.

use crate::domain::{Response, RigError, RigResult};
use crate::ports::ProcessRunner;

use super::reported;

pub const DEFAULT_RIGCTL_PROGRAM: &str = "rigctl";

/// Hamlib model 1 is the dummy rig
pub const DEFAULT_RIGCTL_MODEL: u32 = 1;

pub struct RigctlSender<R: ProcessRunner> {
    runner: R,
    program: String,
    default_model: u32,
}

impl<R: ProcessRunner> RigctlSender<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            program: DEFAULT_RIGCTL_PROGRAM.to_string(),
            default_model: DEFAULT_RIGCTL_MODEL,
        }
    }

    /// Use a different executable (e.g. a full path to rigctl)
    pub fn with_program(mut self, program: &str) -> Self {
        self.program = program.to_string();
        self
    }

    pub fn with_default_model(mut self, model: u32) -> Self {
        self.default_model = model;
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn default_model(&self) -> u32 {
        self.default_model
    }

    /// Set the frequency using the default model
    pub fn send(&self, frequency: &str) -> RigResult<Response> {
        self.send_to_model(self.default_model, frequency)
    }

    pub fn send_to_model(&self, model: u32, frequency: &str) -> RigResult<Response> {
        let args = vec![
            "-m".to_string(),
            model.to_string(),
            "F".to_string(),
            frequency.to_string(),
        ];
        let out = self.runner.run(&self.program, &args).map_err(reported)?;

        if out.success() {
            return Ok(Response::Output(out.output));
        }

        let status = match out.code {
            Some(code) => format!("exit status {code}"),
            None => "terminated by signal".to_string(),
        };
        Err(reported(RigError::Process {
            message: format!("{} failed ({status}): {}", self.program, out.output.trim_end()),
            output: out.output,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::ProcessOutput;
    use std::cell::RefCell;

    /// Records every invocation and answers with a canned result
    struct FakeRunner {
        calls: RefCell<Vec<(String, Vec<String>)>>,
        result: fn() -> RigResult<ProcessOutput>,
    }

    impl FakeRunner {
        fn new(result: fn() -> RigResult<ProcessOutput>) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                result,
            }
        }
    }

    impl ProcessRunner for FakeRunner {
        fn run(&self, program: &str, args: &[String]) -> RigResult<ProcessOutput> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec()));
            (self.result)()
        }
    }

    fn exits_ok() -> RigResult<ProcessOutput> {
        Ok(ProcessOutput {
            code: Some(0),
            output: "rigctl output\n".into(),
        })
    }

    fn exits_nonzero() -> RigResult<ProcessOutput> {
        Ok(ProcessOutput {
            code: Some(1),
            output: "rig_open: error = Communication timed out\n".into(),
        })
    }

    fn cannot_spawn() -> RigResult<ProcessOutput> {
        Err(RigError::Process {
            message: "Failed to run rigctl: No such file or directory".into(),
            output: String::new(),
        })
    }

    #[test]
    fn invokes_rigctl_with_model_and_raw_frequency() {
        let sender = RigctlSender::new(FakeRunner::new(exits_ok));
        let resp = sender.send("14250000").unwrap();

        assert_eq!(resp, Response::Output("rigctl output\n".into()));
        let calls = sender.runner().calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "rigctl");
        assert_eq!(calls[0].1, ["-m", "1", "F", "14250000"]);
    }

    #[test]
    fn explicit_model_overrides_default() {
        let sender = RigctlSender::new(FakeRunner::new(exits_ok))
            .with_program("/usr/local/bin/rigctl")
            .with_default_model(2);
        sender.send_to_model(3073, "7035000").unwrap();
        sender.send("7035000").unwrap();

        let calls = sender.runner().calls.borrow();
        assert_eq!(calls[0].0, "/usr/local/bin/rigctl");
        assert_eq!(calls[0].1[1], "3073");
        assert_eq!(calls[1].1[1], "2");
    }

    #[test]
    fn nonzero_exit_reports_captured_output() {
        let sender = RigctlSender::new(FakeRunner::new(exits_nonzero));
        match sender.send("12345678") {
            Err(RigError::Process { message, output }) => {
                assert!(message.contains("exit status 1"), "{message}");
                assert!(output.contains("Communication timed out"));
            }
            other => panic!("expected process error, got {other:?}"),
        }
    }

    #[test]
    fn spawn_failure_is_process_error() {
        let sender = RigctlSender::new(FakeRunner::new(cannot_spawn));
        assert!(matches!(
            sender.send("12345678"),
            Err(RigError::Process { .. })
        ));
    }
}
