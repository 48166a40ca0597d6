//! Site command handlers: enable, disable, toggle, create, delete, test

use anyhow::Result;

use vhostctl::presentation::{factory, output, OutputFormat};
use vhostctl::{Config, ProvisionOptions};

use super::{emit_json, report};

pub fn cmd_enable(config: &Config, name: &str, format: OutputFormat) -> Result<bool> {
    let outcome = factory::create_vhost_operations(config).enable(name);
    report("enable", &outcome, format)
}

pub fn cmd_disable(config: &Config, name: &str, format: OutputFormat) -> Result<bool> {
    let outcome = factory::create_vhost_operations(config).disable(name);
    report("disable", &outcome, format)
}

pub fn cmd_toggle(config: &Config, name: &str, format: OutputFormat) -> Result<bool> {
    let outcome = factory::create_vhost_operations(config).toggle(name);
    report("toggle", &outcome, format)
}

pub fn cmd_delete(config: &Config, name: &str, format: OutputFormat) -> Result<bool> {
    let outcome = factory::create_vhost_operations(config).delete(name);
    report("delete", &outcome, format)
}

pub fn cmd_test(config: &Config, format: OutputFormat) -> Result<bool> {
    let outcome = factory::create_vhost_operations(config).test_config();
    report("test", &outcome, format)
}

/// Arguments of `vhostctl create`
#[derive(Debug)]
pub struct CreateArgs {
    pub name: String,
    pub server_name: String,
    pub root: String,
    pub add_host: bool,
    pub enable: bool,
}

pub fn cmd_create(config: &Config, args: CreateArgs, format: OutputFormat) -> Result<bool> {
    // Plain create keeps the single-outcome output shape
    if !args.add_host && !args.enable {
        let ops = factory::create_vhost_operations(config);
        let outcome = ops.create(&args.name, &args.server_name, &args.root);
        return report("create", &outcome, format);
    }

    let options = ProvisionOptions::new(args.name, args.server_name, args.root)
        .with_hosts_alias(args.add_host)
        .with_enable(args.enable);
    let result = factory::create_provision_use_case(config).execute(&options);

    match format {
        OutputFormat::Json => emit_json(&output::provision_json(&result))?,
        OutputFormat::Text => {
            let text = output::render_provision(&result);
            if result.is_success() {
                print!("{text}");
            } else {
                eprint!("{text}");
            }
        }
    }
    Ok(result.is_success())
}
