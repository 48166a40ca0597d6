//! Provision result types

use serde::Serialize;

use crate::domain::value_objects::Outcome;

/// Individual provisioning step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProvisionStep {
    Create,
    HostsAlias,
    Enable,
}

impl std::fmt::Display for ProvisionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProvisionStep::Create => write!(f, "create"),
            ProvisionStep::HostsAlias => write!(f, "hosts alias"),
            ProvisionStep::Enable => write!(f, "enable"),
        }
    }
}

/// A step that ran, with what it reported
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepOutcome {
    pub step: ProvisionStep,
    pub outcome: Outcome,
}

/// Steps run so far; stops growing at the first failure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProvisionResult {
    pub steps: Vec<StepOutcome>,
}

impl ProvisionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, step: ProvisionStep, outcome: Outcome) {
        self.steps.push(StepOutcome { step, outcome });
    }

    pub fn is_success(&self) -> bool {
        self.steps.iter().all(|s| s.outcome.is_success())
    }

    /// The step that stopped provisioning, if any
    pub fn failure(&self) -> Option<&StepOutcome> {
        self.steps.iter().find(|s| !s.outcome.is_success())
    }

    /// Outcome to report for the whole run: the failing step's, else the
    /// create step's
    pub fn outcome(&self) -> Option<&Outcome> {
        match self.failure() {
            Some(failed) => Some(&failed.outcome),
            None => self.steps.first().map(|s| &s.outcome),
        }
    }
}
