//! Layout detection
//!
//! Decides which site layout is in effect from directory existence alone.
//! Called fresh before every listing or operation; the answer is never cached.

use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::domain::value_objects::Layout;

/// Return the first candidate that exists on disk, in priority order.
pub fn find_first_existing<I, P>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    candidates
        .into_iter()
        .find(|p| p.as_ref().exists())
        .map(|p| p.as_ref().to_path_buf())
}

/// Detect the active layout.
///
/// Separated wins when its available directory exists, then the flagged
/// directory; with neither present the separated layout is returned so that
/// `create` still has a target.
pub fn detect_layout(config: &LayoutConfig) -> Layout {
    if !config.sites_available.exists() && config.conf_dir.exists() {
        return Layout::Flagged {
            dir: config.conf_dir.clone(),
            extension: config.extension.clone(),
        };
    }

    Layout::Separated {
        available: config.sites_available.clone(),
        enabled: config.sites_enabled.clone(),
    }
}
