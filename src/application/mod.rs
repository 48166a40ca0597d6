//! Application Layer
//!
//! Use cases that drive the domain through the `CommandRunner` port.
//!
//! ## Use Cases
//!
//! - `VhostRepository` - enumerate sites under the active layout
//! - `VhostOperations` - enable, disable, toggle, create, delete, test
//! - `HostAliasManager` - hosts file aliases
//! - `ProvisionUseCase` - create + alias + enable in one run

pub mod hosts;
pub mod provision;
mod steps;
pub mod vhosts;

pub use hosts::HostAliasManager;
pub use provision::{ProvisionOptions, ProvisionResult, ProvisionStep, ProvisionUseCase};
pub use vhosts::{VhostOperations, VhostRepository};
