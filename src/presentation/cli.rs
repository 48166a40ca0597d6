//! CLI Argument Parsing
//!
//! Global flags (`--json`, `--verbose`, `--config`) are accepted before or
//! after the subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// vhostctl - manage local nginx virtual hosts
#[derive(Parser, Debug)]
#[command(name = "vhostctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output JSON instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to $XDG_CONFIG_HOME/vhostctl/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every site and whether it is enabled
    List,

    /// Enable a site and reload the web server
    Enable {
        /// Site name
        name: String,
    },

    /// Disable a site and reload the web server
    Disable {
        /// Site name
        name: String,
    },

    /// Flip a site between enabled and disabled
    Toggle {
        /// Site name
        name: String,
    },

    /// Create a new site from the built-in template
    Create {
        /// Site name (config file name)
        name: String,

        /// Hostname(s) for `server_name`, space separated
        #[arg(long)]
        server_name: String,

        /// Document root (created if missing)
        #[arg(long, value_name = "DIR")]
        root: String,

        /// Also alias the primary server name in the hosts file
        #[arg(long)]
        add_host: bool,

        /// Enable the site once created
        #[arg(long)]
        enable: bool,
    },

    /// Delete a site's config (and its enabled alias)
    Delete {
        /// Site name
        name: String,
    },

    /// Manage hosts file aliases
    #[command(subcommand)]
    Hosts(HostsCommands),

    /// Run the web server's configuration check
    Test,

    /// Show which site layout is in effect
    Layout,
}

#[derive(Subcommand, Debug)]
pub enum HostsCommands {
    /// Add an alias line unless the hostname is already present
    Add {
        hostname: String,

        /// Address to map (defaults to the configured default_ip)
        #[arg(long)]
        ip: Option<String>,
    },

    /// Remove every line mentioning the hostname
    Remove { hostname: String },
}
