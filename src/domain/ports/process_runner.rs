//! ProcessRunner port - abstraction over external command execution
//!
//! The publish pipeline drives `git` and `rsync` through this trait so the
//! state machine can be exercised against scripted results instead of real
//! processes.

use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// How a command's stdout/stderr are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Stream output live to the run's own stdout/stderr
    #[default]
    Forward,
    /// Collect output into the returned `CommandResult`
    Capture,
}

/// A single external command invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    /// Working directory; `None` inherits the current directory
    pub cwd: Option<PathBuf>,
    pub output: OutputMode,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
            output: OutputMode::Forward,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn capture(mut self) -> Self {
        self.output = OutputMode::Capture;
        self
    }

    /// The invocation line as it is traced before execution
    pub fn command_line(&self) -> String {
        let mut line = self.program.clone();
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.command_line())
    }
}

/// Outcome of one external command
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandResult {
    /// Exit code; `None` when the process was terminated by a signal
    pub code: Option<i32>,
    /// Captured stdout (empty when forwarded)
    pub stdout: Vec<u8>,
    /// Captured stderr (empty when forwarded)
    pub stderr: Vec<u8>,
}

impl CommandResult {
    pub fn success() -> Self {
        Self {
            code: Some(0),
            ..Self::default()
        }
    }

    pub fn failure(code: i32) -> Self {
        Self {
            code: Some(code),
            ..Self::default()
        }
    }

    pub fn with_stdout(mut self, stdout: impl Into<Vec<u8>>) -> Self {
        self.stdout = stdout.into();
        self
    }

    pub fn with_stderr(mut self, stderr: impl Into<Vec<u8>>) -> Self {
        self.stderr = stderr.into();
        self
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    pub fn stdout_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stdout)
    }

    pub fn stderr_str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.stderr)
    }
}

/// External command failures
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The program could not be started at all
    #[error("failed to start `{program}`: {error}")]
    Spawn {
        program: String,
        error: std::io::Error,
    },

    /// The program ran and exited unsuccessfully
    #[error("`{command}` {}{}", describe_exit(.code), describe_stderr(.stderr))]
    Exit {
        command: String,
        code: Option<i32>,
        stderr: String,
    },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exited with status {}", code),
        None => "was terminated by a signal".to_string(),
    }
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Runs external programs to completion, one at a time
///
/// Implementations:
/// - `SystemRunner` - spawns real processes
/// - recording fakes in tests
pub trait ProcessRunner {
    /// Run a command to completion. A non-zero exit is reported in the
    /// result, not as an error.
    fn run(&self, command: &CommandSpec) -> Result<CommandResult, ProcessError>;

    /// Run a command, turning a non-zero exit into `ProcessError::Exit`
    fn run_checked(&self, command: &CommandSpec) -> Result<CommandResult, ProcessError> {
        let result = self.run(command)?;
        if result.is_success() {
            return Ok(result);
        }

        Err(ProcessError::Exit {
            command: command.command_line(),
            code: result.code,
            stderr: result.stderr_str().trim().to_string(),
        })
    }
}

impl<T: ProcessRunner + ?Sized> ProcessRunner for &T {
    fn run(&self, command: &CommandSpec) -> Result<CommandResult, ProcessError> {
        (**self).run(command)
    }
}
