//! # Process Execution Seam
//!
//! Everything cflint knows, it learns from two external programs: `git` and
//! `clang-format`. All invocations go through the [`RunCommand`] trait so the
//! rest of the crate never touches `std::process` directly.
//!
//! ## Implementations
//!
//! - [`system::SystemRunner`]: production runner, spawns real processes
//! - [`fake::ScriptedRunner`]: in-memory fake for tests; no process is ever
//!   spawned
//!
//! ## Error split
//!
//! [`RunCommand::run`] fails only when the program cannot be launched at all;
//! a command that runs and exits non-zero is a normal [`CmdOutput`]. Callers
//! that need non-zero exits to be fatal use [`RunCommand::run_checked`] (raw
//! output, exact bytes) or [`RunCommand::capture`] (decoded and trimmed, for
//! line-oriented output like file listings).

use std::borrow::Cow;
use std::path::Path;

use crate::error::{CflintError, Result};

pub mod fake;
pub mod system;

/// Captured outcome of one external command.
#[derive(Debug, Clone)]
pub struct CmdOutput {
    /// Exit code; `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl CmdOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stdout_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    pub fn stderr_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }

    pub fn status_text(&self) -> String {
        match self.code {
            Some(code) => format!("exit code {}", code),
            None => "a signal".to_string(),
        }
    }
}

/// Narrow capability for running external commands.
pub trait RunCommand {
    /// Runs `program` with `args`, capturing stdout and stderr.
    fn run(&self, program: &Path, args: &[&str]) -> Result<CmdOutput>;

    /// Runs a command, treating a non-zero exit as an error, and returns the
    /// output otherwise untouched.
    fn run_checked(&self, program: &Path, args: &[&str]) -> Result<CmdOutput> {
        let output = self.run(program, args)?;
        if !output.success() {
            return Err(CflintError::CommandFailed {
                command: render_command(program, args),
                status: output.status_text(),
                stderr: output.stderr_text().trim_end().to_string(),
            });
        }
        Ok(output)
    }

    /// Runs a command and returns its trimmed stdout, treating a non-zero
    /// exit as an error.
    fn capture(&self, program: &Path, args: &[&str]) -> Result<String> {
        let output = self.run_checked(program, args)?;
        Ok(output.stdout_text().trim().to_string())
    }
}

/// Renders a command line for logs and error messages.
pub fn render_command(program: &Path, args: &[&str]) -> String {
    let mut line = program.display().to_string();
    for arg in args {
        line.push(' ');
        line.push_str(arg);
    }
    line
}
