//! Use Case Factory
//!
//! Wires the use cases to `SystemCommandRunner` built from the loaded config.

use crate::application::{HostAliasManager, ProvisionUseCase, VhostOperations, VhostRepository};
use crate::config::Config;
use crate::infrastructure::SystemCommandRunner;

/// Concrete operations over real processes
pub type ConcreteVhostOperations = VhostOperations<SystemCommandRunner>;

/// Concrete hosts alias manager over real processes
pub type ConcreteHostAliasManager = HostAliasManager<SystemCommandRunner>;

/// Concrete provisioning use case
pub type ConcreteProvisionUseCase = ProvisionUseCase<SystemCommandRunner, SystemCommandRunner>;

pub fn create_runner(config: &Config) -> SystemCommandRunner {
    SystemCommandRunner::from_config(&config.commands)
}

pub fn create_vhost_repository(config: &Config) -> VhostRepository {
    VhostRepository::new(config.layout.clone())
}

pub fn create_vhost_operations(config: &Config) -> ConcreteVhostOperations {
    VhostOperations::new(create_runner(config), config.clone())
}

pub fn create_host_alias_manager(config: &Config) -> ConcreteHostAliasManager {
    HostAliasManager::new(create_runner(config), &config.hosts)
}

pub fn create_provision_use_case(config: &Config) -> ConcreteProvisionUseCase {
    ProvisionUseCase::new(
        create_vhost_operations(config),
        create_host_alias_manager(config),
    )
}
