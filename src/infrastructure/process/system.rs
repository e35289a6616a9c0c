//! System process runner
//!
//! Spawns real `git`/`rsync` processes and blocks until they exit.

use std::process::{Command, Stdio};

use tracing::{debug, info};

use crate::domain::ports::{CommandResult, CommandSpec, OutputMode, ProcessError, ProcessRunner};

/// Runs commands with `std::process::Command`
///
/// Every command line is logged as `+ <program> <args>` before it starts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandResult, ProcessError> {
        info!("+ {}", spec);

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args).stdin(Stdio::null());
        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }

        let spawn_error = |error| ProcessError::Spawn {
            program: spec.program.clone(),
            error,
        };

        let result = match spec.output {
            OutputMode::Forward => {
                let status = cmd
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit())
                    .status()
                    .map_err(spawn_error)?;
                CommandResult {
                    code: status.code(),
                    ..CommandResult::default()
                }
            }
            OutputMode::Capture => {
                let output = cmd.output().map_err(spawn_error)?;
                CommandResult {
                    code: output.status.code(),
                    stdout: output.stdout,
                    stderr: output.stderr,
                }
            }
        };

        debug!("{} exited with {:?}", spec.program, result.code);
        Ok(result)
    }
}
