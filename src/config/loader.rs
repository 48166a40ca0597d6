//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{VhostError, VhostResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> VhostResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| VhostError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Location of the per-user config file
pub fn user_config_path() -> Option<PathBuf> {
    dirs_config_dir().map(|dir| dir.join("vhostctl/config.toml"))
}

/// Load from user config, or defaults. Env overrides are applied separately.
pub fn load_or_default() -> Config {
    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            match load_with_warnings(&user_config) {
                Ok((config, warnings)) => {
                    for warning in warnings {
                        tracing::warn!("{warning}");
                    }
                    return config;
                }
                Err(e) => tracing::warn!("ignoring {}: {}", user_config.display(), e),
            }
        }
    }

    Config::default()
}

/// Apply environment variable overrides (VHOSTCTL_* prefix)
pub fn with_env_overrides(mut config: Config) -> Config {
    // VHOSTCTL_ELEVATE (whitespace-separated argv prefix, empty = none)
    if let Ok(elevate) = std::env::var("VHOSTCTL_ELEVATE") {
        config.commands.elevate = elevate.split_whitespace().map(String::from).collect();
    }

    // VHOSTCTL_TIMEOUT_SECS
    if let Ok(timeout) = std::env::var("VHOSTCTL_TIMEOUT_SECS") {
        match timeout.trim().parse::<u64>() {
            Ok(secs) => config.commands.timeout_secs = secs,
            Err(_) => tracing::warn!("ignoring VHOSTCTL_TIMEOUT_SECS={timeout}: not a number"),
        }
    }

    // VHOSTCTL_HOSTS_FILE
    if let Some(hosts) = std::env::var_os("VHOSTCTL_HOSTS_FILE") {
        config.hosts.file = PathBuf::from(hosts);
    }

    config
}

/// Get XDG config directory
fn dirs_config_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "layout",
        "sites_available",
        "sites_enabled",
        "conf_dir",
        "extension",
        "php_fpm",
        "socket_candidates",
        "fallback_socket",
        "hosts",
        "file",
        "default_ip",
        "commands",
        "elevate",
        "timeout_secs",
        "reload",
        "test",
        "flatpak",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
