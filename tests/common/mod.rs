//! Common test utilities for vhostctl CLI tests.
//!
//! - `TestEnv`: isolated nginx tree, hosts file and config in a temp dir
//! - Fixtures: site config content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
