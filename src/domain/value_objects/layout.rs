//! Layout value objects - how a web server arranges its site configs
//!
//! - `SeparatedAvailableEnabled`: configs in `sites-available`, symlinks in `sites-enabled`
//! - `SingleDirectoryFlagged`: configs in `conf.d`, disabled ones carry a `.disabled` suffix

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Suffix appended to a flagged-directory config to disable it
pub const DISABLED_SUFFIX: &str = ".disabled";

/// Site layout convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutStyle {
    /// Available directory plus a directory of enabling symlinks
    #[default]
    SeparatedAvailableEnabled,
    /// One directory, disabled state encoded in the file name
    SingleDirectoryFlagged,
}

impl std::fmt::Display for LayoutStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutStyle::SeparatedAvailableEnabled => write!(f, "sites-available/sites-enabled"),
            LayoutStyle::SingleDirectoryFlagged => write!(f, "conf.d"),
        }
    }
}

/// A detected layout bound to its directories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Layout {
    Separated {
        available: PathBuf,
        enabled: PathBuf,
    },
    Flagged {
        dir: PathBuf,
        /// Config extension without the leading dot (e.g. `conf`)
        extension: String,
    },
}

impl Layout {
    pub fn style(&self) -> LayoutStyle {
        match self {
            Layout::Separated { .. } => LayoutStyle::SeparatedAvailableEnabled,
            Layout::Flagged { .. } => LayoutStyle::SingleDirectoryFlagged,
        }
    }

    /// Directory holding the definitive config files
    pub fn available_dir(&self) -> &Path {
        match self {
            Layout::Separated { available, .. } => available,
            Layout::Flagged { dir, .. } => dir,
        }
    }

    /// Path of the config file a new site would be written to.
    ///
    /// In the flagged layout this is the enabled (bare) name.
    pub fn config_path(&self, name: &str) -> PathBuf {
        match self {
            Layout::Separated { available, .. } => available.join(name),
            Layout::Flagged { dir, extension } => dir.join(format!("{name}.{extension}")),
        }
    }

    /// Path of the disabled variant in the flagged layout
    pub fn disabled_path(&self, name: &str) -> Option<PathBuf> {
        match self {
            Layout::Separated { .. } => None,
            Layout::Flagged { dir, extension } => {
                Some(dir.join(format!("{name}.{extension}{DISABLED_SUFFIX}")))
            }
        }
    }

    /// Path of the enabling symlink in the separated layout
    pub fn enabled_link(&self, name: &str) -> Option<PathBuf> {
        match self {
            Layout::Separated { enabled, .. } => Some(enabled.join(name)),
            Layout::Flagged { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separated() -> Layout {
        Layout::Separated {
            available: PathBuf::from("/etc/nginx/sites-available"),
            enabled: PathBuf::from("/etc/nginx/sites-enabled"),
        }
    }

    fn flagged() -> Layout {
        Layout::Flagged {
            dir: PathBuf::from("/etc/nginx/conf.d"),
            extension: "conf".to_string(),
        }
    }

    #[test]
    fn layout_style_default_is_separated() {
        assert_eq!(LayoutStyle::default(), LayoutStyle::SeparatedAvailableEnabled);
    }

    #[test]
    fn layout_style_matches_variant() {
        assert_eq!(separated().style(), LayoutStyle::SeparatedAvailableEnabled);
        assert_eq!(flagged().style(), LayoutStyle::SingleDirectoryFlagged);
    }

    #[test]
    fn separated_paths() {
        let layout = separated();
        assert_eq!(
            layout.config_path("blog"),
            PathBuf::from("/etc/nginx/sites-available/blog")
        );
        assert_eq!(
            layout.enabled_link("blog"),
            Some(PathBuf::from("/etc/nginx/sites-enabled/blog"))
        );
        assert_eq!(layout.disabled_path("blog"), None);
    }

    #[test]
    fn flagged_paths() {
        let layout = flagged();
        assert_eq!(
            layout.config_path("blog"),
            PathBuf::from("/etc/nginx/conf.d/blog.conf")
        );
        assert_eq!(
            layout.disabled_path("blog"),
            Some(PathBuf::from("/etc/nginx/conf.d/blog.conf.disabled"))
        );
        assert_eq!(layout.enabled_link("blog"), None);
    }

    #[test]
    fn layout_style_serializes_kebab_case() {
        let json = serde_json::to_string(&LayoutStyle::SingleDirectoryFlagged).unwrap();
        assert_eq!(json, "\"single-directory-flagged\"");
    }
}
