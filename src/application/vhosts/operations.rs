//! Vhost Operations
//!
//! Enable, disable, toggle, create and delete a site. Every call re-detects
//! the layout, runs a short sequence of privileged steps and reports an
//! [`Outcome`]. Steps are not rolled back: a failure stops the sequence and
//! only the failing step is reported.

use std::path::{Path, PathBuf};

use crate::application::steps;
use crate::config::Config;
use crate::domain::policies::{
    validate_directive_value, validate_new_site_name, validate_single_token, validate_site_name,
};
use crate::domain::ports::CommandRunner;
use crate::domain::services::{detect_fpm_socket, detect_layout, SiteTemplate};
use crate::domain::value_objects::{Layout, Outcome, OutcomeKind, DISABLED_SUFFIX};
use crate::error::{VhostError, VhostResult};

use super::repository::{aliases_of, VhostRepository};

/// Site lifecycle use case
pub struct VhostOperations<R: CommandRunner> {
    runner: R,
    config: Config,
}

impl<R: CommandRunner> VhostOperations<R> {
    pub fn new(runner: R, config: Config) -> Self {
        Self { runner, config }
    }

    fn layout(&self) -> Layout {
        detect_layout(&self.config.layout)
    }

    fn reload(&self) {
        steps::best_effort(&self.runner, &self.config.commands.reload, "web server reload");
    }

    /// Enable a site (symlink it, or drop its `.disabled` suffix)
    pub fn enable(&self, name: &str) -> Outcome {
        self.try_enable(name).unwrap_or_else(Outcome::from)
    }

    fn try_enable(&self, name: &str) -> VhostResult<Outcome> {
        validate_site_name(name)?;

        match self.layout() {
            Layout::Separated { available, enabled } => {
                let source = available.join(name);
                let link = enabled.join(name);

                if !source.exists() {
                    return Err(VhostError::not_found(name));
                }
                if aliases_of(&enabled, name).iter().any(|alias| alias.exists()) {
                    return Ok(Outcome::unchanged("Virtual host already enabled"));
                }

                let (source, link) = (path_arg(&source), path_arg(&link));
                steps::privileged(
                    &self.runner,
                    &["ln", "-s", source.as_str(), link.as_str()],
                    None,
                    "enable",
                )?;
            }
            Layout::Flagged { dir, extension } => {
                let (enabled_path, disabled_path) = flagged_paths(&dir, &extension, name);

                if enabled_path.exists() {
                    return Ok(Outcome::unchanged("Virtual host already enabled"));
                }
                if !disabled_path.exists() {
                    return Err(VhostError::not_found(name));
                }

                let (from, to) = (path_arg(&disabled_path), path_arg(&enabled_path));
                steps::privileged(
                    &self.runner,
                    &["mv", from.as_str(), to.as_str()],
                    None,
                    "enable",
                )?;
            }
        }

        tracing::info!("enabled virtual host '{name}'");
        self.reload();
        Ok(Outcome::applied("Virtual host enabled"))
    }

    /// Disable a site. An absent target counts as already disabled.
    pub fn disable(&self, name: &str) -> Outcome {
        self.try_disable(name).unwrap_or_else(Outcome::from)
    }

    fn try_disable(&self, name: &str) -> VhostResult<Outcome> {
        validate_site_name(name)?;

        match self.layout() {
            Layout::Separated { enabled, .. } => {
                let aliases = aliases_of(&enabled, name);
                if aliases.is_empty() {
                    return Ok(Outcome::unchanged("Virtual host already disabled"));
                }

                for (removed, alias) in aliases.iter().enumerate() {
                    let alias = path_arg(alias);
                    let result =
                        steps::privileged(&self.runner, &["rm", alias.as_str()], None, "disable");
                    match result {
                        Ok(()) => {}
                        Err(e) if removed > 0 => return Ok(Outcome::partial(e)),
                        Err(e) => return Err(e),
                    }
                }
            }
            Layout::Flagged { dir, extension } => {
                let (enabled_path, disabled_path) = flagged_paths(&dir, &extension, name);

                if disabled_path.exists() || !enabled_path.exists() {
                    return Ok(Outcome::unchanged("Virtual host already disabled"));
                }

                let (from, to) = (path_arg(&enabled_path), path_arg(&disabled_path));
                steps::privileged(
                    &self.runner,
                    &["mv", from.as_str(), to.as_str()],
                    None,
                    "disable",
                )?;
            }
        }

        tracing::info!("disabled virtual host '{name}'");
        self.reload();
        Ok(Outcome::applied("Virtual host disabled"))
    }

    /// Flip a site between enabled and disabled
    pub fn toggle(&self, name: &str) -> Outcome {
        if let Err(e) = validate_site_name(name) {
            return e.into();
        }

        let repository = VhostRepository::new(self.config.layout.clone());
        match repository.find(name) {
            Some(site) if site.enabled => self.disable(name),
            Some(_) => self.enable(name),
            None => VhostError::not_found(name).into(),
        }
    }

    /// Create a new site: disabled in the separated layout, enabled (and the
    /// server reloaded) in the flagged one.
    ///
    /// The document root is created first when missing; if the config write
    /// then fails the directory is left in place and the outcome is
    /// `PartialCompletion`.
    pub fn create(&self, name: &str, server_name: &str, document_root: &str) -> Outcome {
        self.try_create(name, server_name, document_root)
            .unwrap_or_else(Outcome::from)
    }

    fn try_create(
        &self,
        name: &str,
        server_name: &str,
        document_root: &str,
    ) -> VhostResult<Outcome> {
        validate_new_site_name(name)?;
        validate_directive_value("server_name", server_name)?;
        validate_single_token("document root", document_root.trim())?;
        let (server_name, document_root) = (server_name.trim(), document_root.trim());

        let layout = self.layout();
        let config_path = layout.config_path(name);
        let disabled_twin = layout.disabled_path(name);
        if config_path.exists() || disabled_twin.is_some_and(|p| p.exists()) {
            return Err(VhostError::already_exists(name));
        }

        let mut created_root = false;
        if !Path::new(document_root).exists() {
            steps::privileged(
                &self.runner,
                &["mkdir", "-p", document_root],
                None,
                "create document root",
            )?;
            created_root = true;
        }

        let php_socket = detect_fpm_socket(
            &self.config.php_fpm.socket_candidates,
            &self.config.php_fpm.fallback_socket,
        );
        let content = SiteTemplate {
            name,
            server_name,
            document_root,
            php_socket: &php_socket,
        }
        .render();

        let target = path_arg(&config_path);
        let written = steps::privileged(
            &self.runner,
            &["tee", target.as_str()],
            Some(&content),
            "create config",
        );
        if let Err(e) = written {
            return Ok(if created_root {
                Outcome::partial(e)
            } else {
                e.into()
            });
        }

        tracing::info!("created virtual host '{name}' at {}", config_path.display());
        // A flagged config is live as soon as it is written
        if matches!(layout, Layout::Flagged { .. }) {
            self.reload();
        }
        Ok(Outcome::applied(format!("Virtual host '{name}' created")))
    }

    /// Delete a site's alias (if any) and its config file
    pub fn delete(&self, name: &str) -> Outcome {
        self.try_delete(name).unwrap_or_else(Outcome::from)
    }

    fn try_delete(&self, name: &str) -> VhostResult<Outcome> {
        validate_site_name(name)?;

        let (config_path, aliases) = match self.layout() {
            Layout::Separated { available, enabled } => {
                (available.join(name), aliases_of(&enabled, name))
            }
            Layout::Flagged { dir, extension } => {
                let (enabled_path, disabled_path) = flagged_paths(&dir, &extension, name);
                let config_path = if enabled_path.exists() {
                    enabled_path
                } else {
                    disabled_path
                };
                (config_path, Vec::new())
            }
        };

        if !config_path.exists() {
            return Err(VhostError::not_found(name));
        }

        let mut alias_removed = false;
        for alias in &aliases {
            let alias = path_arg(alias);
            match steps::privileged(&self.runner, &["rm", alias.as_str()], None, "remove alias") {
                Ok(()) => alias_removed = true,
                Err(e) => tracing::warn!("{e}"),
            }
        }

        let target = path_arg(&config_path);
        if let Err(e) = steps::privileged(&self.runner, &["rm", target.as_str()], None, "delete") {
            return Ok(if alias_removed {
                Outcome::partial(e)
            } else {
                e.into()
            });
        }

        tracing::info!("deleted virtual host '{name}'");
        self.reload();
        Ok(Outcome::applied("Virtual host deleted"))
    }

    /// Run the web server's configuration syntax check
    pub fn test_config(&self) -> Outcome {
        let argv: Vec<&str> = self.config.commands.test.iter().map(String::as_str).collect();
        match self.runner.run(&argv) {
            Ok(output) if output.success() => Outcome::applied(output.combined()),
            Ok(output) => Outcome::new(OutcomeKind::CommandFailed, output.combined()),
            Err(source) => VhostError::Command {
                action: "test configuration".to_string(),
                source,
            }
            .into(),
        }
    }
}

/// `(<name>.<ext>, <name>.<ext>.disabled)` in the flagged directory
fn flagged_paths(dir: &Path, extension: &str, name: &str) -> (PathBuf, PathBuf) {
    (
        dir.join(format!("{name}.{extension}")),
        dir.join(format!("{name}.{extension}{DISABLED_SUFFIX}")),
    )
}

fn path_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}
