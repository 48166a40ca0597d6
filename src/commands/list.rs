//! List and layout command handlers

use anyhow::Result;

use vhostctl::presentation::{factory, output, OutputFormat};
use vhostctl::Config;

use super::emit_json;

pub fn cmd_list(config: &Config, format: OutputFormat) -> Result<bool> {
    let repository = factory::create_vhost_repository(config);
    let sites = repository.list();
    tracing::debug!("found {} site(s) under {}", sites.len(), repository.layout().style());

    match format {
        OutputFormat::Json => emit_json(&output::sites_json(&sites))?,
        OutputFormat::Text => print!("{}", output::render_sites(&sites)),
    }
    Ok(true)
}

pub fn cmd_layout(config: &Config, format: OutputFormat) -> Result<bool> {
    let repository = factory::create_vhost_repository(config);
    let layout = repository.layout();

    match format {
        OutputFormat::Json => emit_json(&output::layout_json(&layout))?,
        OutputFormat::Text => {
            print!("{}", output::render_layout(&layout));
            if !repository.has_sites() {
                eprintln!("warning: {} does not exist", layout.available_dir().display());
            }
        }
    }
    Ok(true)
}
