//! Process runner adapter using `std::process::Command`

use std::io::Read;
use std::process::{Command, Stdio};

use crate::domain::{RigError, RigResult};
use crate::ports::{ProcessOutput, ProcessRunner};

/// Runs programs found on `PATH`.
///
/// stdout and stderr share one pipe, so the captured text reads in the
/// order the child wrote it.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, program: &str, args: &[String]) -> RigResult<ProcessOutput> {
        log::debug!("exec: {program} {}", args.join(" "));
        let failed = |e: std::io::Error| RigError::Process {
            message: format!("Failed to run {program}: {e}"),
            output: String::new(),
        };

        let (mut reader, writer) = std::io::pipe().map_err(failed)?;
        // The Command holds the parent's copies of the write end; it must be
        // dropped before reading or read_to_end never sees EOF.
        let mut child = {
            let mut cmd = Command::new(program);
            cmd.args(args)
                .stdin(Stdio::null())
                .stdout(writer.try_clone().map_err(failed)?)
                .stderr(writer);
            cmd.spawn().map_err(failed)?
        };

        let mut buf = Vec::new();
        let read = reader.read_to_end(&mut buf);
        let status = child.wait().map_err(failed)?;
        read.map_err(failed)?;

        Ok(ProcessOutput {
            code: status.code(),
            output: String::from_utf8_lossy(&buf).into_owned(),
        })
    }
}
