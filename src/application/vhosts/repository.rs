//! Vhost Repository
//!
//! Enumerates every site under the active layout. Nothing is cached: each call
//! re-detects the layout and re-reads the directories.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::domain::entities::VirtualHost;
use crate::domain::services::{detect_layout, is_site_config, parse_config};
use crate::domain::value_objects::{Layout, DISABLED_SUFFIX};

/// Read-only view of the site configs on disk
#[derive(Debug, Clone)]
pub struct VhostRepository {
    config: LayoutConfig,
}

impl VhostRepository {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    /// Detect the layout in effect right now
    pub fn layout(&self) -> Layout {
        detect_layout(&self.config)
    }

    /// True if the active layout's config directory exists
    pub fn has_sites(&self) -> bool {
        self.layout().available_dir().is_dir()
    }

    /// All sites, sorted by name
    pub fn list(&self) -> Vec<VirtualHost> {
        let layout = self.layout();
        if !layout.available_dir().exists() {
            return Vec::new();
        }

        let mut vhosts = match &layout {
            Layout::Separated { available, enabled } => list_separated(available, enabled),
            Layout::Flagged { dir, extension } => list_flagged(dir, extension),
        };

        // Stable: an enabled entry stays ahead of a disabled one with the same name
        vhosts.sort_by(|a, b| a.name.cmp(&b.name));
        vhosts
    }

    /// First site named `name`, preferring the enabled one on conflict
    pub fn find(&self, name: &str) -> Option<VirtualHost> {
        self.list().into_iter().find(|v| v.name == name)
    }
}

fn read_entries(dir: &Path) -> Vec<PathBuf> {
    match fs::read_dir(dir) {
        Ok(entries) => entries.filter_map(|e| e.ok()).map(|e| e.path()).collect(),
        Err(e) => {
            tracing::warn!("cannot read {}: {}", dir.display(), e);
            Vec::new()
        }
    }
}

fn file_name(path: &Path) -> Option<&str> {
    path.file_name().and_then(|n| n.to_str())
}

/// File name a symlink resolves to
fn link_target_name(link: &Path) -> Option<String> {
    // Fall back to the raw link text for dangling links
    let target = fs::canonicalize(link)
        .ok()
        .or_else(|| fs::read_link(link).ok())?;
    file_name(&target).map(str::to_string)
}

fn enabled_links(enabled: &Path) -> Vec<PathBuf> {
    if !enabled.exists() {
        return Vec::new();
    }
    read_entries(enabled)
        .into_iter()
        .filter(|link| link.is_symlink())
        .collect()
}

/// File names that symlinks in `enabled` point at
fn enabled_targets(enabled: &Path) -> HashSet<String> {
    enabled_links(enabled)
        .iter()
        .filter_map(|link| link_target_name(link))
        .collect()
}

/// Every symlink in `enabled` that enables `name`: links resolving to a file
/// called `name` plus a link literally named `name`, dangling or not.
pub(crate) fn aliases_of(enabled: &Path, name: &str) -> Vec<PathBuf> {
    let mut aliases: Vec<PathBuf> = enabled_links(enabled)
        .into_iter()
        .filter(|link| {
            file_name(link) == Some(name) || link_target_name(link).as_deref() == Some(name)
        })
        .collect();
    aliases.sort();
    aliases
}

fn build_vhost(name: &str, path: PathBuf, enabled: bool) -> VirtualHost {
    let parsed = parse_config(&path);
    VirtualHost::new(name, path, enabled)
        .with_server_name(parsed.server_name)
        .with_document_root(parsed.document_root)
}

fn list_separated(available: &Path, enabled: &Path) -> Vec<VirtualHost> {
    let enabled_sites = enabled_targets(enabled);

    read_entries(available)
        .into_iter()
        .filter(|path| path.is_file())
        .filter_map(|path| {
            let name = file_name(&path)?.to_string();
            if name.starts_with('.') {
                return None;
            }
            let is_enabled = enabled_sites.contains(&name);
            Some(build_vhost(&name, path, is_enabled))
        })
        .collect()
}

fn list_flagged(dir: &Path, extension: &str) -> Vec<VirtualHost> {
    let enabled_suffix = format!(".{extension}");
    let disabled_suffix = format!(".{extension}{DISABLED_SUFFIX}");

    let candidates: Vec<PathBuf> = read_entries(dir)
        .into_iter()
        .filter(|path| path.is_file())
        .collect();

    let mut vhosts = Vec::new();
    for (suffix, enabled) in [(&enabled_suffix, true), (&disabled_suffix, false)] {
        for path in &candidates {
            let Some(name) = file_name(path).and_then(|n| n.strip_suffix(suffix.as_str())) else {
                continue;
            };
            if name.is_empty() || name.starts_with('.') || !is_site_config(path) {
                continue;
            }
            vhosts.push(build_vhost(name, path.clone(), enabled));
        }
    }
    vhosts
}
