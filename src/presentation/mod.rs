//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text/JSON)
//!
//! ## Usage
//!
//! ```ignore
//! use vhostctl::presentation::factory;
//!
//! let ops = factory::create_vhost_operations(&config);
//! let outcome = ops.enable("blog");
//! ```

pub mod cli;
pub mod factory;
pub mod output;

pub use cli::{Cli, Commands, HostsCommands};
pub use output::OutputFormat;
