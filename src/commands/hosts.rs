//! Hosts alias command handlers

use anyhow::Result;

use vhostctl::presentation::{factory, OutputFormat};
use vhostctl::Config;

use super::report;

pub fn cmd_hosts_add(
    config: &Config,
    hostname: &str,
    ip: Option<&str>,
    format: OutputFormat,
) -> Result<bool> {
    let outcome = factory::create_host_alias_manager(config).add_alias(hostname, ip);
    report("hosts add", &outcome, format)
}

pub fn cmd_hosts_remove(config: &Config, hostname: &str, format: OutputFormat) -> Result<bool> {
    let outcome = factory::create_host_alias_manager(config).remove_alias(hostname);
    report("hosts remove", &outcome, format)
}
