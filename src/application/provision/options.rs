//! Provision options

/// What to provision for a new site
#[derive(Debug, Clone, Default)]
pub struct ProvisionOptions {
    pub name: String,
    /// One or more hostnames, space separated
    pub server_name: String,
    pub document_root: String,
    /// Alias the primary server name in the hosts file
    pub add_hosts_alias: bool,
    /// Enable the site once created
    pub enable: bool,
}

impl ProvisionOptions {
    pub fn new(
        name: impl Into<String>,
        server_name: impl Into<String>,
        document_root: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            server_name: server_name.into(),
            document_root: document_root.into(),
            ..Self::default()
        }
    }

    pub fn with_hosts_alias(mut self, add: bool) -> Self {
        self.add_hosts_alias = add;
        self
    }

    pub fn with_enable(mut self, enable: bool) -> Self {
        self.enable = enable;
        self
    }

    /// First hostname of `server_name`
    pub fn primary_server_name(&self) -> Option<&str> {
        self.server_name.split_whitespace().next()
    }
}
