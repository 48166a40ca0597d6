//! vhostctl CLI - manage local nginx virtual hosts
//!
//! Usage: vhostctl [--json] [-v] [--config <PATH>] <COMMAND>
//!
//! Commands:
//!   list     List sites and their state
//!   enable   Enable a site
//!   disable  Disable a site
//!   toggle   Flip a site's state
//!   create   Create a site from the template
//!   delete   Delete a site
//!   hosts    Add or remove hosts file aliases
//!   test     Check the web server configuration
//!   layout   Show the detected layout

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use vhostctl::presentation::{Cli, Commands, HostsCommands, OutputFormat};
use vhostctl::Config;

mod commands;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = load_config(&cli)?;
    let format = OutputFormat::from_flag(cli.json);

    let success = match cli.command {
        Commands::List => commands::list::cmd_list(&config, format)?,
        Commands::Layout => commands::list::cmd_layout(&config, format)?,
        Commands::Enable { name } => commands::site::cmd_enable(&config, &name, format)?,
        Commands::Disable { name } => commands::site::cmd_disable(&config, &name, format)?,
        Commands::Toggle { name } => commands::site::cmd_toggle(&config, &name, format)?,
        Commands::Create {
            name,
            server_name,
            root,
            add_host,
            enable,
        } => commands::site::cmd_create(
            &config,
            commands::site::CreateArgs {
                name,
                server_name,
                root,
                add_host,
                enable,
            },
            format,
        )?,
        Commands::Delete { name } => commands::site::cmd_delete(&config, &name, format)?,
        Commands::Test => commands::site::cmd_test(&config, format)?,
        Commands::Hosts(HostsCommands::Add { hostname, ip }) => {
            commands::hosts::cmd_hosts_add(&config, &hostname, ip.as_deref(), format)?
        }
        Commands::Hosts(HostsCommands::Remove { hostname }) => {
            commands::hosts::cmd_hosts_remove(&config, &hostname, format)?
        }
    };

    Ok(if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// `VHOSTCTL_LOG` / `RUST_LOG` win over `-v`; logs go to stderr
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            std::env::var("VHOSTCTL_LOG")
                .or_else(|_| std::env::var("RUST_LOG"))
                .unwrap_or_else(|_| default_level.to_string()),
        )
        .try_init();
}

fn load_config(cli: &Cli) -> Result<Config> {
    let config = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            for warning in warnings {
                tracing::warn!("{warning}");
            }
            config
        }
        None => Config::load_or_default(),
    };
    Ok(config.with_env_overrides())
}
