//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod hosts_alias;
mod layout;
mod outcome;

pub use hosts_alias::{HostsAlias, DEFAULT_ALIAS_IP};
pub use layout::{Layout, LayoutStyle, DISABLED_SUFFIX};
pub use outcome::{Outcome, OutcomeKind};
