//! Domain Layer
//!
//! The vhost model and the rules that read it off disk.
//!
//! ## Structure
//!
//! - `entities/` - `VirtualHost`
//! - `value_objects/` - `Layout`, `LayoutStyle`, `HostsAlias`, `Outcome`
//! - `services/` - Layout detection, config parsing, site template
//! - `policies/` - Input validation
//! - `ports/` - `CommandRunner`, the boundary to external processes
//!
//! Mutations never happen here; they go through `ports::CommandRunner` from
//! the application layer.

pub mod entities;
pub mod policies;
pub mod ports;
pub mod services;
pub mod value_objects;
