//! Provision Use Case
//!
//! Sets up a new site in one go:
//! - Creating the site config (and document root)
//! - Optionally aliasing the primary server name in the hosts file
//! - Optionally enabling the site

mod options;
mod result;
mod use_case;

pub use options::ProvisionOptions;
pub use result::{ProvisionResult, ProvisionStep, StepOutcome};
pub use use_case::ProvisionUseCase;
