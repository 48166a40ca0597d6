//! Isolated environment for running the vhostctl binary.
//!
//! The generated config runs privileged commands directly (empty elevation
//! prefix), reloads with `true` and never routes through flatpak-spawn.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;
use vhostctl::config::FlatpakMode;
use vhostctl::Config;

use super::fixtures::HOSTS;

/// Result of running a vhostctl command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim()).expect("stdout is not JSON")
    }
}

/// Which directories to create up front
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeLayout {
    Separated,
    Flagged,
    Empty,
}

pub struct TestEnv {
    pub root: TempDir,
    config_path: PathBuf,
}

impl TestEnv {
    pub fn new(layout: TreeLayout) -> Self {
        let root = tempfile::tempdir().expect("tempdir");
        let base = root.path();

        match layout {
            TreeLayout::Separated => {
                std::fs::create_dir_all(base.join("nginx/sites-available")).unwrap();
                std::fs::create_dir_all(base.join("nginx/sites-enabled")).unwrap();
            }
            TreeLayout::Flagged => std::fs::create_dir_all(base.join("nginx/conf.d")).unwrap(),
            TreeLayout::Empty => {}
        }
        std::fs::write(base.join("hosts"), HOSTS).unwrap();

        let mut config = Config::default();
        config.layout.sites_available = base.join("nginx/sites-available");
        config.layout.sites_enabled = base.join("nginx/sites-enabled");
        config.layout.conf_dir = base.join("nginx/conf.d");
        config.php_fpm.socket_candidates = vec![base.join("php-fpm.sock")];
        config.hosts.file = base.join("hosts");
        config.commands.elevate = Vec::new();
        config.commands.reload = vec!["true".to_string()];
        config.commands.test = vec!["true".to_string()];
        config.commands.flatpak = FlatpakMode::Never;

        let config_path = base.join("config.toml");
        std::fs::write(&config_path, toml::to_string(&config).unwrap()).unwrap();

        Self { root, config_path }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn available(&self, name: &str) -> PathBuf {
        self.path("nginx/sites-available").join(name)
    }

    pub fn enabled(&self, name: &str) -> PathBuf {
        self.path("nginx/sites-enabled").join(name)
    }

    pub fn conf_d(&self, file: &str) -> PathBuf {
        self.path("nginx/conf.d").join(file)
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn hosts(&self) -> String {
        std::fs::read_to_string(self.path("hosts")).unwrap()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_vhostctl"));
        cmd.arg("--config")
            .arg(&self.config_path)
            .args(args)
            .env("XDG_CONFIG_HOME", self.root.path())
            .env_remove("VHOSTCTL_ELEVATE")
            .env_remove("VHOSTCTL_TIMEOUT_SECS")
            .env_remove("VHOSTCTL_HOSTS_FILE")
            .env_remove("VHOSTCTL_LOG")
            .env_remove("RUST_LOG");

        let output = cmd.output().expect("failed to execute vhostctl");
        to_result(output)
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
