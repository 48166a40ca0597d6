//! Output Rendering
//!
//! Text tables for people and single-line JSON documents for scripts.

use std::io::{self, Write};

use serde::Serialize;

use crate::application::ProvisionResult;
use crate::domain::entities::VirtualHost;
use crate::domain::value_objects::{Layout, Outcome};

/// Output format for rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output for scripting
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

const CHECK: &str = "✓";
const CROSS: &str = "✗";

/// Write one JSON document followed by a newline.
pub fn write_json(out: &mut impl Write, value: &impl Serialize) -> io::Result<()> {
    let line = serde_json::to_string(value).map_err(io::Error::other)?;
    out.write_all(line.as_bytes())?;
    out.write_all(b"\n")
}

/// Site table: state, name, primary URL, config path
pub fn render_sites(sites: &[VirtualHost]) -> String {
    if sites.is_empty() {
        return "No virtual hosts found\n".to_string();
    }

    let name_width = sites.iter().map(|s| s.name.len()).max().unwrap_or(0);
    let url_width = sites
        .iter()
        .map(|s| s.url().map_or(1, |u| u.len()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for site in sites {
        let state = if site.enabled { "enabled " } else { "disabled" };
        let url = site.url().unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{state}  {:<name_width$}  {:<url_width$}  {}\n",
            site.name,
            url,
            site.config_path.display(),
        ));
    }
    out
}

#[derive(Serialize)]
struct SiteJson<'a> {
    #[serde(flatten)]
    site: &'a VirtualHost,
    url: Option<String>,
}

/// `{"type":"sites","count":N,"sites":[...]}`
pub fn sites_json(sites: &[VirtualHost]) -> serde_json::Value {
    let items: Vec<SiteJson<'_>> = sites
        .iter()
        .map(|site| SiteJson {
            site,
            url: site.url(),
        })
        .collect();

    serde_json::json!({
        "type": "sites",
        "count": items.len(),
        "sites": items,
    })
}

/// One-line status for an operation
pub fn render_outcome(outcome: &Outcome) -> String {
    let icon = if outcome.is_success() { CHECK } else { CROSS };
    format!("{icon} {}\n", outcome.message)
}

pub fn outcome_json(command: &str, outcome: &Outcome) -> serde_json::Value {
    serde_json::json!({
        "type": "outcome",
        "command": command,
        "success": outcome.is_success(),
        "kind": outcome.kind,
        "message": outcome.message,
    })
}

/// Each step that ran, one per line
pub fn render_provision(result: &ProvisionResult) -> String {
    result
        .steps
        .iter()
        .map(|s| {
            let icon = if s.outcome.is_success() { CHECK } else { CROSS };
            format!("{icon} {}: {}\n", s.step, s.outcome.message)
        })
        .collect()
}

pub fn provision_json(result: &ProvisionResult) -> serde_json::Value {
    serde_json::json!({
        "type": "provision",
        "success": result.is_success(),
        "steps": result.steps,
    })
}

/// Layout description used by `vhostctl layout`
pub fn render_layout(layout: &Layout) -> String {
    match layout {
        Layout::Separated { available, enabled } => format!(
            "layout: {}\navailable: {}\nenabled: {}\n",
            layout.style(),
            available.display(),
            enabled.display()
        ),
        Layout::Flagged { dir, extension } => format!(
            "layout: {}\ndirectory: {}\nextension: .{extension}\n",
            layout.style(),
            dir.display()
        ),
    }
}

pub fn layout_json(layout: &Layout) -> serde_json::Value {
    match layout {
        Layout::Separated { available, enabled } => serde_json::json!({
            "type": "layout",
            "style": layout.style(),
            "available": available,
            "enabled": enabled,
        }),
        Layout::Flagged { dir, extension } => serde_json::json!({
            "type": "layout",
            "style": layout.style(),
            "directory": dir,
            "extension": extension,
        }),
    }
}
