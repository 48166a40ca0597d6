//! VirtualHost entity - one discovered site
//!
//! Built fresh on every enumeration; `enabled` is derived from the filesystem
//! at that moment and never updated in place.

use std::path::PathBuf;

use serde::Serialize;

/// A virtual host configuration discovered on disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VirtualHost {
    /// Identifier derived from the config file name
    pub name: String,
    /// Definitive config file (renamed on toggle in the flagged layout)
    pub config_path: PathBuf,
    pub enabled: bool,
    /// Raw `server_name` arguments, possibly several hostnames
    pub server_name: Option<String>,
    /// Raw top-level `root` argument
    pub document_root: Option<String>,
}

impl VirtualHost {
    pub fn new(name: impl Into<String>, config_path: impl Into<PathBuf>, enabled: bool) -> Self {
        Self {
            name: name.into(),
            config_path: config_path.into(),
            enabled,
            server_name: None,
            document_root: None,
        }
    }

    pub fn with_server_name(mut self, server_name: Option<String>) -> Self {
        self.server_name = server_name;
        self
    }

    pub fn with_document_root(mut self, document_root: Option<String>) -> Self {
        self.document_root = document_root;
        self
    }

    /// First hostname of `server_name`
    pub fn primary_server_name(&self) -> Option<&str> {
        self.server_name
            .as_deref()
            .and_then(|names| names.split_whitespace().next())
    }

    /// Browser URL for the primary hostname
    pub fn url(&self) -> Option<String> {
        self.primary_server_name()
            .map(|host| format!("http://{host}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_server_name_takes_first_host() {
        let vhost = VirtualHost::new("blog", "/etc/nginx/sites-available/blog", true)
            .with_server_name(Some("blog.local www.blog.local".to_string()));

        assert_eq!(vhost.primary_server_name(), Some("blog.local"));
        assert_eq!(vhost.url().as_deref(), Some("http://blog.local"));
    }

    #[test]
    fn url_absent_without_server_name() {
        let vhost = VirtualHost::new("blog", "/etc/nginx/sites-available/blog", false);
        assert_eq!(vhost.primary_server_name(), None);
        assert_eq!(vhost.url(), None);
    }
}
