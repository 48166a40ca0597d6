//! CommandRunner port - the only way the core reaches external processes
//!
//! Everything that touches privileged locations (site configs, the hosts file,
//! the web server) goes through this trait as an argument vector. No shell is
//! involved; generated file content travels on stdin.

use std::time::Duration;

use thiserror::Error;

/// Result type for command execution
pub type CommandResult<T> = Result<T, CommandError>;

/// Failures to run a command to completion (a non-zero exit is not one of these)
#[derive(Error, Debug)]
pub enum CommandError {
    /// Program could not be started
    #[error("could not run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Program did not finish within its time budget
    #[error("'{program}' timed out after {timeout:?}")]
    Timeout { program: String, timeout: Duration },

    /// Empty argument vector
    #[error("empty command")]
    Empty,

    /// I/O error while talking to the child
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when killed by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Merged stdout and stderr, trimmed
    pub fn combined(&self) -> String {
        let mut text = String::with_capacity(self.stdout.len() + self.stderr.len());
        text.push_str(&self.stdout);
        text.push_str(&self.stderr);
        text.trim().to_string()
    }
}

/// External process executor
///
/// Implementations:
/// - `SystemCommandRunner` - std::process with elevation prefix and timeout
/// - `FakeRunner` - applies argv effects to a temp tree (tests only)
pub trait CommandRunner {
    /// Run unprivileged
    fn run(&self, argv: &[&str]) -> CommandResult<CommandOutput>;

    /// Run with elevation
    fn run_privileged(&self, argv: &[&str]) -> CommandResult<CommandOutput>;

    /// Run with elevation, feeding `input` on stdin
    fn run_privileged_with_input(&self, argv: &[&str], input: &str)
        -> CommandResult<CommandOutput>;
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, argv: &[&str]) -> CommandResult<CommandOutput> {
        (**self).run(argv)
    }

    fn run_privileged(&self, argv: &[&str]) -> CommandResult<CommandOutput> {
        (**self).run_privileged(argv)
    }

    fn run_privileged_with_input(
        &self,
        argv: &[&str],
        input: &str,
    ) -> CommandResult<CommandOutput> {
        (**self).run_privileged_with_input(argv, input)
    }
}
