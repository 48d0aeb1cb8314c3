use std::path::Path;
use std::process::Command;

use super::{render_command, CmdOutput, RunCommand};
use crate::error::{CflintError, Result};

/// Runs commands against the real system.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl RunCommand for SystemRunner {
    fn run(&self, program: &Path, args: &[&str]) -> Result<CmdOutput> {
        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|source| CflintError::Spawn {
                command: render_command(program, args),
                source,
            })?;

        Ok(CmdOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
