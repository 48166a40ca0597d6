//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;

pub use command_runner::{CommandError, CommandOutput, CommandResult, CommandRunner};
