//! Tests for the config module

use super::types::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn test_config_default() {
    let config = Config::default();

    assert_eq!(
        config.layout.sites_available,
        PathBuf::from("/etc/nginx/sites-available")
    );
    assert_eq!(config.layout.conf_dir, PathBuf::from("/etc/nginx/conf.d"));
    assert_eq!(config.layout.extension, "conf");
    assert_eq!(config.hosts.file, PathBuf::from("/etc/hosts"));
    assert_eq!(config.hosts.default_ip, "127.0.0.1");
    assert_eq!(config.commands.elevate, vec!["pkexec"]);
    assert_eq!(config.commands.reload, vec!["systemctl", "reload", "nginx"]);
    assert_eq!(config.commands.flatpak, FlatpakMode::Auto);
}

#[test]
fn test_default_socket_candidates_order() {
    let config = Config::default();

    assert_eq!(config.php_fpm.socket_candidates.len(), 9);
    assert_eq!(
        config.php_fpm.socket_candidates[0],
        PathBuf::from("/run/php-fpm/php-fpm.sock")
    );
    assert_eq!(
        config.php_fpm.fallback_socket,
        PathBuf::from("/run/php-fpm/php-fpm.sock")
    );
}

#[test]
fn test_config_parse_toml() {
    let toml = r#"
[layout]
sites_available = "/tmp/nginx/sites-available"
extension = "nginx"

[php_fpm]
socket_candidates = ["/tmp/php.sock"]

[commands]
elevate = []
timeout_secs = 5
flatpak = "never"
"#;

    let config: Config = toml::from_str(toml).unwrap();

    assert_eq!(
        config.layout.sites_available,
        PathBuf::from("/tmp/nginx/sites-available")
    );
    // Unset fields keep their defaults
    assert_eq!(
        config.layout.sites_enabled,
        PathBuf::from("/etc/nginx/sites-enabled")
    );
    assert_eq!(config.layout.extension, "nginx");
    assert_eq!(
        config.php_fpm.socket_candidates,
        vec![PathBuf::from("/tmp/php.sock")]
    );
    assert!(config.commands.elevate.is_empty());
    assert_eq!(config.commands.timeout().as_secs(), 5);
    assert_eq!(config.commands.flatpak, FlatpakMode::Never);
}

#[test]
fn test_zero_timeout_is_clamped() {
    let mut config = Config::default();
    config.commands.timeout_secs = 0;
    assert_eq!(config.commands.timeout().as_secs(), 1);
}

#[test]
fn test_load_with_warnings_reports_unknown_keys() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[commands]\nelevat = [\"sudo\"]\n").unwrap();

    let (config, warnings) = Config::load_with_warnings(&path).unwrap();

    assert_eq!(config.commands.elevate, vec!["pkexec"]);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].key, "elevat");
    assert_eq!(warnings[0].line, Some(2));
    assert_eq!(warnings[0].suggestion.as_deref(), Some("elevate"));
}

#[test]
fn test_load_invalid_toml_is_config_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "[commands\n").unwrap();

    let err = Config::load(&path).unwrap_err();
    assert!(matches!(err, crate::error::VhostError::Config { .. }));
}

#[test]
fn test_load_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = Config::load(&dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, crate::error::VhostError::Io(_)));
}
