//! vhostctl - local nginx virtual host manager
//!
//! Discovers site configs under either the `sites-available`/`sites-enabled`
//! or the `conf.d` layout, and creates, enables, disables and deletes them
//! through a privileged command runner. Also maintains hosts-file aliases
//! for local development hostnames.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    HostAliasManager, ProvisionOptions, ProvisionResult, ProvisionUseCase, VhostOperations,
    VhostRepository,
};
pub use config::Config;
pub use domain::entities::VirtualHost;
pub use domain::ports::{CommandOutput, CommandRunner};
pub use domain::value_objects::{Layout, LayoutStyle, Outcome, OutcomeKind};
pub use error::{VhostError, VhostResult};
pub use infrastructure::SystemCommandRunner;
