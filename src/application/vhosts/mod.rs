//! Virtual host use cases
//!
//! - `VhostRepository` - read-only enumeration of site configs
//! - `VhostOperations` - enable, disable, toggle, create, delete, test

mod operations;
mod repository;

pub use operations::VhostOperations;
pub use repository::VhostRepository;
