//! Domain Entities
//!
//! - `VirtualHost` - A site config discovered under the active layout

mod virtual_host;

pub use virtual_host::VirtualHost;
