//! Single command steps shared by the use cases

use crate::domain::ports::CommandRunner;
use crate::error::{VhostError, VhostResult};

/// Run one privileged step; a non-zero exit becomes `CommandFailed` carrying
/// the command's combined output.
pub(crate) fn privileged<R: CommandRunner>(
    runner: &R,
    argv: &[&str],
    input: Option<&str>,
    action: &str,
) -> VhostResult<()> {
    let result = match input {
        Some(text) => runner.run_privileged_with_input(argv, text),
        None => runner.run_privileged(argv),
    };

    match result {
        Ok(output) if output.success() => Ok(()),
        Ok(output) => Err(VhostError::CommandFailed {
            action: action.to_string(),
            output: output.combined(),
        }),
        Err(source) => Err(VhostError::Command {
            action: action.to_string(),
            source,
        }),
    }
}

/// Fire-and-forget privileged command; failures are logged, never returned.
pub(crate) fn best_effort<R: CommandRunner>(runner: &R, argv: &[String], what: &str) {
    if argv.is_empty() {
        return;
    }
    let argv: Vec<&str> = argv.iter().map(String::as_str).collect();
    match runner.run_privileged(&argv) {
        Ok(output) if output.success() => tracing::info!("{what} succeeded"),
        Ok(output) => tracing::warn!("{what} failed: {}", output.combined()),
        Err(e) => tracing::warn!("{what} failed: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::command_runner::fake::FakeRunner;

    #[test]
    fn failed_step_carries_action_and_output() {
        let runner = FakeRunner::new().failing("rm");
        let err = privileged(&runner, &["rm", "/nope"], None, "delete").unwrap_err();
        assert_eq!(err.to_string(), "Failed to delete: rm: operation failed");
    }

    #[test]
    fn best_effort_swallows_failures() {
        let runner = FakeRunner::new().failing("systemctl");
        let reload = vec![
            "systemctl".to_string(),
            "reload".to_string(),
            "nginx".to_string(),
        ];
        best_effort(&runner, &reload, "reload");
        assert_eq!(runner.programs(), vec!["systemctl"]);
    }

    #[test]
    fn best_effort_skips_empty_command() {
        let runner = FakeRunner::new();
        best_effort(&runner, &[], "reload");
        assert!(runner.calls().is_empty());
    }
}
