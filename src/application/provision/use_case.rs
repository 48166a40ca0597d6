//! Provision Use Case
//!
//! Chains create, hosts alias and enable. Nothing is rolled back: a failing
//! step ends the run and earlier steps stay applied.

use crate::application::hosts::HostAliasManager;
use crate::application::vhosts::VhostOperations;
use crate::domain::ports::CommandRunner;

use super::options::ProvisionOptions;
use super::result::{ProvisionResult, ProvisionStep};

/// New-site use case
pub struct ProvisionUseCase<VR, HR>
where
    VR: CommandRunner,
    HR: CommandRunner,
{
    vhosts: VhostOperations<VR>,
    hosts: HostAliasManager<HR>,
}

impl<VR, HR> ProvisionUseCase<VR, HR>
where
    VR: CommandRunner,
    HR: CommandRunner,
{
    pub fn new(vhosts: VhostOperations<VR>, hosts: HostAliasManager<HR>) -> Self {
        Self { vhosts, hosts }
    }

    pub fn execute(&self, options: &ProvisionOptions) -> ProvisionResult {
        let mut result = ProvisionResult::new();

        let created = self
            .vhosts
            .create(&options.name, &options.server_name, &options.document_root);
        let ok = created.is_success();
        result.push(ProvisionStep::Create, created);
        if !ok {
            return result;
        }

        if options.add_hosts_alias {
            if let Some(hostname) = options.primary_server_name() {
                let aliased = self.hosts.add_alias(hostname, None);
                let ok = aliased.is_success();
                result.push(ProvisionStep::HostsAlias, aliased);
                if !ok {
                    return result;
                }
            }
        }

        if options.enable {
            let enabled = self.vhosts.enable(&options.name);
            result.push(ProvisionStep::Enable, enabled);
        }

        if let Some(failed) = result.failure() {
            tracing::warn!("provisioning '{}' stopped at {}", options.name, failed.step);
        }
        result
    }
}
