//! Configuration type definitions
//!
//! Defaults reproduce the well-known paths of Debian-style and conf.d-style
//! nginx installs, the usual PHP-FPM socket locations and `/etc/hosts`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::VhostResult;

use super::loader::{self, ConfigWarning};

/// Where site configs live for each layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutConfig {
    #[serde(default = "default_sites_available")]
    pub sites_available: PathBuf,

    #[serde(default = "default_sites_enabled")]
    pub sites_enabled: PathBuf,

    #[serde(default = "default_conf_dir")]
    pub conf_dir: PathBuf,

    /// Site config extension in the conf.d layout, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            sites_available: default_sites_available(),
            sites_enabled: default_sites_enabled(),
            conf_dir: default_conf_dir(),
            extension: default_extension(),
        }
    }
}

fn default_sites_available() -> PathBuf {
    PathBuf::from("/etc/nginx/sites-available")
}

fn default_sites_enabled() -> PathBuf {
    PathBuf::from("/etc/nginx/sites-enabled")
}

fn default_conf_dir() -> PathBuf {
    PathBuf::from("/etc/nginx/conf.d")
}

fn default_extension() -> String {
    "conf".to_string()
}

/// PHP-FPM socket probing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhpFpmConfig {
    /// Probed in order; the first existing path is used
    #[serde(default = "default_socket_candidates")]
    pub socket_candidates: Vec<PathBuf>,

    #[serde(default = "default_fallback_socket")]
    pub fallback_socket: PathBuf,
}

impl Default for PhpFpmConfig {
    fn default() -> Self {
        Self {
            socket_candidates: default_socket_candidates(),
            fallback_socket: default_fallback_socket(),
        }
    }
}

fn default_socket_candidates() -> Vec<PathBuf> {
    [
        "/run/php-fpm/php-fpm.sock",
        "/run/php-fpm/www.sock",
        "/var/run/php-fpm/php-fpm.sock",
        "/var/run/php-fpm/www.sock",
        "/run/php/php-fpm.sock",
        "/var/run/php/php-fpm.sock",
        "/run/php/php8.3-fpm.sock",
        "/run/php/php8.2-fpm.sock",
        "/run/php/php8.1-fpm.sock",
    ]
    .into_iter()
    .map(PathBuf::from)
    .collect()
}

fn default_fallback_socket() -> PathBuf {
    PathBuf::from("/run/php-fpm/php-fpm.sock")
}

/// Hosts file aliasing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostsConfig {
    #[serde(default = "default_hosts_file")]
    pub file: PathBuf,

    #[serde(default = "default_ip")]
    pub default_ip: String,
}

impl Default for HostsConfig {
    fn default() -> Self {
        Self {
            file: default_hosts_file(),
            default_ip: default_ip(),
        }
    }
}

fn default_hosts_file() -> PathBuf {
    PathBuf::from("/etc/hosts")
}

fn default_ip() -> String {
    crate::domain::value_objects::DEFAULT_ALIAS_IP.to_string()
}

/// Whether to route commands to the host through `flatpak-spawn`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FlatpakMode {
    /// Detect the sandbox via `/.flatpak-info`
    #[default]
    Auto,
    Always,
    Never,
}

/// External command settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandsConfig {
    /// Argv prefix for privileged commands; empty runs them directly
    #[serde(default = "default_elevate")]
    pub elevate: Vec<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Privileged web server reload
    #[serde(default = "default_reload")]
    pub reload: Vec<String>,

    /// Unprivileged configuration syntax check
    #[serde(default = "default_test")]
    pub test: Vec<String>,

    #[serde(default)]
    pub flatpak: FlatpakMode,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            elevate: default_elevate(),
            timeout_secs: default_timeout_secs(),
            reload: default_reload(),
            test: default_test(),
            flatpak: FlatpakMode::default(),
        }
    }
}

impl CommandsConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

fn default_elevate() -> Vec<String> {
    vec!["pkexec".to_string()]
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_reload() -> Vec<String> {
    ["systemctl", "reload", "nginx"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_test() -> Vec<String> {
    vec!["nginx".to_string(), "-t".to_string()]
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub layout: LayoutConfig,

    #[serde(default)]
    pub php_fpm: PhpFpmConfig,

    #[serde(default)]
    pub hosts: HostsConfig,

    #[serde(default)]
    pub commands: CommandsConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> VhostResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> VhostResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from the user config, or defaults
    pub fn load_or_default() -> Self {
        loader::load_or_default()
    }

    /// Apply environment variable overrides (VHOSTCTL_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
