//! System Command Runner
//!
//! Implements the CommandRunner port with `std::process`. Commands are spawned
//! from an argument vector (never through a shell), optionally prefixed with
//! the elevation program and with `flatpak-spawn --host` inside a sandbox.

use std::io::{Read, Write};
use std::path::Path;
use std::process::{Child, Command, Stdio};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::{CommandsConfig, FlatpakMode};
use crate::domain::ports::{CommandError, CommandOutput, CommandResult, CommandRunner};

const POLL_INTERVAL: Duration = Duration::from_millis(20);
const FLATPAK_INFO: &str = "/.flatpak-info";
const FLATPAK_SPAWN: [&str; 2] = ["flatpak-spawn", "--host"];

/// Runs commands on the local system with a bounded wait
#[derive(Debug, Clone)]
pub struct SystemCommandRunner {
    elevate: Vec<String>,
    timeout: Duration,
    flatpak: bool,
}

impl SystemCommandRunner {
    pub fn new(elevate: Vec<String>, timeout: Duration, flatpak: bool) -> Self {
        Self {
            elevate,
            timeout,
            flatpak,
        }
    }

    pub fn from_config(config: &CommandsConfig) -> Self {
        let flatpak = match config.flatpak {
            FlatpakMode::Auto => Self::in_flatpak(),
            FlatpakMode::Always => true,
            FlatpakMode::Never => false,
        };
        Self::new(config.elevate.clone(), config.timeout(), flatpak)
    }

    /// True when running inside a Flatpak sandbox
    pub fn in_flatpak() -> bool {
        Path::new(FLATPAK_INFO).exists()
    }

    /// Full argv after applying the sandbox and elevation prefixes
    pub fn build_argv(&self, argv: &[&str], privileged: bool) -> Vec<String> {
        let mut full = Vec::with_capacity(argv.len() + self.elevate.len() + 2);
        if self.flatpak {
            full.extend(FLATPAK_SPAWN.iter().map(|s| s.to_string()));
        }
        if privileged {
            full.extend(self.elevate.iter().cloned());
        }
        full.extend(argv.iter().map(|s| s.to_string()));
        full
    }

    fn execute(&self, argv: Vec<String>, input: Option<&str>) -> CommandResult<CommandOutput> {
        let (program, args) = argv.split_first().ok_or(CommandError::Empty)?;
        tracing::debug!(?argv, "running command");

        let mut child = Command::new(program)
            .args(args)
            .stdin(if input.is_some() {
                Stdio::piped()
            } else {
                Stdio::null()
            })
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| CommandError::Spawn {
                program: program.clone(),
                source,
            })?;

        // Feed stdin from a thread so a child that never reads cannot block us
        // past the deadline.
        if let (Some(text), Some(mut stdin)) = (input, child.stdin.take()) {
            let text = text.to_string();
            thread::spawn(move || {
                let _ = stdin.write_all(text.as_bytes());
            });
        }

        let deadline = Instant::now() + self.timeout;
        let stdout = child.stdout.take().map(spawn_reader);
        let stderr = child.stderr.take().map(spawn_reader);

        let code = self.wait_with_deadline(&mut child, program, deadline)?;

        // A descendant that inherited the pipes keeps them open after the
        // child exits; the deadline covers draining them too.
        let stdout = collect_reader(stdout, deadline).ok_or_else(|| self.timed_out(program))?;
        let stderr = collect_reader(stderr, deadline).ok_or_else(|| self.timed_out(program))?;

        Ok(CommandOutput {
            code,
            stdout,
            stderr,
        })
    }

    fn wait_with_deadline(
        &self,
        child: &mut Child,
        program: &str,
        deadline: Instant,
    ) -> CommandResult<Option<i32>> {
        loop {
            if let Some(status) = child.try_wait()? {
                return Ok(status.code());
            }
            if Instant::now() >= deadline {
                let _ = child.kill();
                let _ = child.wait();
                return Err(self.timed_out(program));
            }
            thread::sleep(POLL_INTERVAL);
        }
    }

    fn timed_out(&self, program: &str) -> CommandError {
        tracing::warn!("'{program}' abandoned after {:?}", self.timeout);
        CommandError::Timeout {
            program: program.to_string(),
            timeout: self.timeout,
        }
    }
}

/// Read a pipe to EOF on its own thread; the text arrives on the channel
fn spawn_reader<R: Read + Send + 'static>(mut reader: R) -> Receiver<String> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = reader.read_to_end(&mut buf);
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });
    rx
}

/// `None` when the pipe is still open at the deadline
fn collect_reader(rx: Option<Receiver<String>>, deadline: Instant) -> Option<String> {
    let Some(rx) = rx else {
        return Some(String::new());
    };
    match rx.recv_timeout(deadline.saturating_duration_since(Instant::now())) {
        Ok(text) => Some(text),
        Err(RecvTimeoutError::Disconnected) => Some(String::new()),
        Err(RecvTimeoutError::Timeout) => None,
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, argv: &[&str]) -> CommandResult<CommandOutput> {
        self.execute(self.build_argv(argv, false), None)
    }

    fn run_privileged(&self, argv: &[&str]) -> CommandResult<CommandOutput> {
        self.execute(self.build_argv(argv, true), None)
    }

    fn run_privileged_with_input(
        &self,
        argv: &[&str],
        input: &str,
    ) -> CommandResult<CommandOutput> {
        self.execute(self.build_argv(argv, true), Some(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn direct_runner() -> SystemCommandRunner {
        SystemCommandRunner::new(Vec::new(), Duration::from_secs(10), false)
    }

    #[test]
    fn build_argv_applies_prefixes() {
        let runner = SystemCommandRunner::new(
            vec!["pkexec".to_string()],
            Duration::from_secs(30),
            true,
        );

        assert_eq!(
            runner.build_argv(&["rm", "/etc/nginx/sites-enabled/blog"], true),
            vec![
                "flatpak-spawn",
                "--host",
                "pkexec",
                "rm",
                "/etc/nginx/sites-enabled/blog"
            ]
        );
        assert_eq!(
            runner.build_argv(&["nginx", "-t"], false),
            vec!["flatpak-spawn", "--host", "nginx", "-t"]
        );
    }

    #[test]
    fn from_config_respects_flatpak_never() {
        let config = CommandsConfig {
            flatpak: FlatpakMode::Never,
            ..CommandsConfig::default()
        };
        let runner = SystemCommandRunner::from_config(&config);
        assert_eq!(runner.build_argv(&["true"], true), vec!["pkexec", "true"]);
    }

    #[test]
    fn captures_exit_code_and_output() {
        let runner = direct_runner();
        let output = runner.run(&["sh", "-c", "echo out; echo err >&2; exit 3"]).unwrap();

        assert_eq!(output.code, Some(3));
        assert!(!output.success());
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }

    #[test]
    fn feeds_stdin_payload() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("written.conf");
        let target_str = target.to_string_lossy().to_string();

        let output = direct_runner()
            .run_privileged_with_input(&["tee", &target_str], "server {\n}\n")
            .unwrap();

        assert!(output.success());
        assert_eq!(fs::read_to_string(&target).unwrap(), "server {\n}\n");
    }

    #[test]
    fn missing_program_is_spawn_error() {
        let err = direct_runner()
            .run(&["vhostctl-definitely-not-a-program"])
            .unwrap_err();
        assert!(matches!(err, CommandError::Spawn { .. }));
    }

    #[test]
    fn hung_command_times_out() {
        let runner = SystemCommandRunner::new(Vec::new(), Duration::from_millis(200), false);
        let started = Instant::now();
        let err = runner.run(&["sleep", "5"]).unwrap_err();

        assert!(matches!(err, CommandError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(4));
    }

    #[test]
    fn background_child_holding_pipes_is_bounded() {
        let runner = SystemCommandRunner::new(Vec::new(), Duration::from_millis(500), false);
        let started = Instant::now();
        let err = runner.run(&["sh", "-c", "sleep 4 & exit 0"]).unwrap_err();

        assert!(matches!(err, CommandError::Timeout { .. }));
        assert!(started.elapsed() < Duration::from_secs(3));
    }

    #[test]
    fn background_child_with_closed_pipes_completes() {
        let runner = SystemCommandRunner::new(Vec::new(), Duration::from_secs(2), false);
        let output = runner
            .run(&["sh", "-c", "sleep 4 >/dev/null 2>&1 & echo started"])
            .unwrap();

        assert!(output.success());
        assert_eq!(output.stdout, "started\n");
    }

    #[test]
    fn empty_argv_is_rejected() {
        let err = direct_runner().run(&[]).unwrap_err();
        assert!(matches!(err, CommandError::Empty));
    }
}
