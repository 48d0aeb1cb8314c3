use std::cell::RefCell;
use std::collections::VecDeque;
use std::io;
use std::path::Path;

use super::{render_command, CmdOutput, RunCommand};
use crate::error::{CflintError, Result};

/// Scripted command runner for tests. Does NOT spawn processes.
///
/// Responses are keyed by the rendered command line and consumed in the
/// order they were scripted. A command with no scripted response fails the
/// same way a missing binary would.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<(String, CmdOutput)>>,
    calls: RefCell<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the next invocation of `command` to produce `output`.
    pub fn with_response(self, command: &str, output: CmdOutput) -> Self {
        self.responses
            .borrow_mut()
            .push_back((command.to_string(), output));
        self
    }

    /// Scripts a successful invocation with the given stdout.
    pub fn with_stdout(self, command: &str, stdout: &str) -> Self {
        self.with_response(
            command,
            CmdOutput {
                code: Some(0),
                stdout: stdout.as_bytes().to_vec(),
                stderr: Vec::new(),
            },
        )
    }

    /// Scripts a failing invocation with the given exit code and stderr.
    pub fn with_failure(self, command: &str, code: i32, stderr: &str) -> Self {
        self.with_response(
            command,
            CmdOutput {
                code: Some(code),
                stdout: Vec::new(),
                stderr: stderr.as_bytes().to_vec(),
            },
        )
    }

    /// Every command line this runner has seen, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl RunCommand for ScriptedRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<CmdOutput> {
        let command = render_command(program, args);
        self.calls.borrow_mut().push(command.clone());

        let mut responses = self.responses.borrow_mut();
        let position = responses
            .iter()
            .position(|(expected, _)| *expected == command);

        match position {
            Some(index) => {
                let (_, output) = responses.remove(index).expect("index came from position");
                Ok(output)
            }
            None => Err(CflintError::Spawn {
                command,
                source: io::Error::new(io::ErrorKind::NotFound, "command not scripted"),
            }),
        }
    }
}
