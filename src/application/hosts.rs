//! Host Alias Manager
//!
//! Adds and removes `ip<TAB>hostname` lines in the hosts file. The file is
//! read directly and written back through the privileged runner.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::application::steps;
use crate::config::HostsConfig;
use crate::domain::policies::{validate_hostname, validate_single_token};
use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::{HostsAlias, Outcome};
use crate::error::VhostResult;

/// Hosts file alias use case
pub struct HostAliasManager<R: CommandRunner> {
    runner: R,
    hosts_file: PathBuf,
    default_ip: String,
}

impl<R: CommandRunner> HostAliasManager<R> {
    pub fn new(runner: R, config: &HostsConfig) -> Self {
        Self {
            runner,
            hosts_file: config.file.clone(),
            default_ip: config.default_ip.clone(),
        }
    }

    /// A missing hosts file reads as empty
    fn read_hosts(&self) -> VhostResult<String> {
        match fs::read_to_string(&self.hosts_file) {
            Ok(content) => Ok(content),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
            Err(e) => Err(e.into()),
        }
    }

    /// Append an alias unless any line already mentions `hostname`
    pub fn add_alias(&self, hostname: &str, ip: Option<&str>) -> Outcome {
        self.try_add(hostname, ip).unwrap_or_else(Outcome::from)
    }

    fn try_add(&self, hostname: &str, ip: Option<&str>) -> VhostResult<Outcome> {
        validate_hostname(hostname)?;
        let ip = ip.unwrap_or(&self.default_ip);
        validate_single_token("ip", ip)?;

        let content = self.read_hosts()?;
        if content
            .lines()
            .any(|line| HostsAlias::matches_line(hostname, line))
        {
            return Ok(Outcome::unchanged("Hosts entry already exists"));
        }

        let alias = HostsAlias::new(hostname, ip);
        let target = self.hosts_file.to_string_lossy().into_owned();
        steps::privileged(
            &self.runner,
            &["tee", "-a", target.as_str()],
            Some(&alias.to_line()),
            "add hosts entry",
        )?;

        tracing::info!("added hosts alias {} -> {}", alias.hostname(), alias.ip());
        Ok(Outcome::applied("Hosts entry added"))
    }

    /// Drop every line that mentions `hostname`
    pub fn remove_alias(&self, hostname: &str) -> Outcome {
        self.try_remove(hostname).unwrap_or_else(Outcome::from)
    }

    fn try_remove(&self, hostname: &str) -> VhostResult<Outcome> {
        validate_hostname(hostname)?;

        let content = self.read_hosts()?;
        let mut removed = 0usize;
        let mut kept = String::with_capacity(content.len());
        for line in content.lines() {
            if HostsAlias::matches_line(hostname, line) {
                removed += 1;
            } else {
                kept.push_str(line);
                kept.push('\n');
            }
        }

        if removed == 0 {
            return Ok(Outcome::unchanged("Hosts entry not present"));
        }

        let target = self.hosts_file.to_string_lossy().into_owned();
        steps::privileged(
            &self.runner,
            &["tee", target.as_str()],
            Some(&kept),
            "remove hosts entry",
        )?;

        tracing::info!("removed {removed} hosts line(s) matching {hostname}");
        Ok(Outcome::applied("Hosts entry removed"))
    }
}
