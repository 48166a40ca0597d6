//! Configuration module for vhostctl
//!
//! Configuration hierarchy:
//! 1. `--config <path>` (highest priority)
//! 2. User config (`$XDG_CONFIG_HOME/vhostctl/config.toml`)
//! 3. Built-in defaults (lowest priority)
//!
//! Environment variables (`VHOSTCTL_*`) are applied on top of whichever file won.

mod loader;
#[cfg(test)]
mod tests;
mod types;

pub use loader::{user_config_path, ConfigWarning};
pub use types::{CommandsConfig, Config, FlatpakMode, HostsConfig, LayoutConfig, PhpFpmConfig};
