//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! ## Structure
//!
//! - `command/` - Process execution (`SystemCommandRunner`)

pub mod command;

// Re-export for convenience
pub use command::SystemCommandRunner;
