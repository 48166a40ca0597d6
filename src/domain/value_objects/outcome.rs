//! Outcome value object - the `(success, message)` pair every operation returns

use serde::Serialize;

use crate::error::VhostError;

/// Classification of an operation result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    /// The requested change was made
    Applied,
    /// Nothing to do; treated as success
    AlreadyInDesiredState,
    /// Target site or file is absent
    NotFound,
    /// Target config already present on create
    AlreadyExists,
    /// Rejected before any side effect
    InvalidInput,
    /// External command failed or could not run
    CommandFailed,
    /// A later step failed after an earlier step committed
    PartialCompletion,
}

/// Result of a vhost or hosts operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub kind: OutcomeKind,
    pub message: String,
}

impl Outcome {
    pub fn new(kind: OutcomeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn applied(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::Applied, message)
    }

    pub fn unchanged(message: impl Into<String>) -> Self {
        Self::new(OutcomeKind::AlreadyInDesiredState, message)
    }

    /// Mark a failure as happening after earlier steps took effect
    pub fn partial(err: VhostError) -> Self {
        Self::new(OutcomeKind::PartialCompletion, err.to_string())
    }

    pub fn is_success(&self) -> bool {
        matches!(
            self.kind,
            OutcomeKind::Applied | OutcomeKind::AlreadyInDesiredState
        )
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<VhostError> for Outcome {
    fn from(err: VhostError) -> Self {
        let kind = match &err {
            VhostError::NotFound { .. } => OutcomeKind::NotFound,
            VhostError::AlreadyExists { .. } => OutcomeKind::AlreadyExists,
            VhostError::InvalidName { .. } | VhostError::InvalidDirective { .. } => {
                OutcomeKind::InvalidInput
            }
            VhostError::CommandFailed { .. }
            | VhostError::Command { .. }
            | VhostError::Io(_)
            | VhostError::Config { .. } => OutcomeKind::CommandFailed,
        };
        Outcome::new(kind, err.to_string())
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_counts_as_success() {
        assert!(Outcome::unchanged("Virtual host already enabled").is_success());
        assert!(Outcome::applied("Virtual host enabled").is_success());
    }

    #[test]
    fn errors_map_to_failed_kinds() {
        let outcome = Outcome::from(VhostError::not_found("blog"));
        assert_eq!(outcome.kind, OutcomeKind::NotFound);
        assert!(!outcome.is_success());
        assert_eq!(outcome.message(), "Virtual host 'blog' not found");

        let outcome = Outcome::from(VhostError::already_exists("blog"));
        assert_eq!(outcome.kind, OutcomeKind::AlreadyExists);
    }

    #[test]
    fn partial_keeps_failing_step_message() {
        let outcome = Outcome::partial(VhostError::CommandFailed {
            action: "create config".to_string(),
            output: "tee: denied".to_string(),
        });
        assert_eq!(outcome.kind, OutcomeKind::PartialCompletion);
        assert!(!outcome.is_success());
        assert_eq!(outcome.message, "Failed to create config: tee: denied");
    }
}
