//! Input Policy
//!
//! Rejects site names and directive values that would escape the config
//! directory or break out of a generated nginx statement.

use crate::error::{VhostError, VhostResult};

/// Check that `name` addresses a single file directly under the config dir.
///
/// Existing sites are named by their file names, so anything `list` can
/// report (spaces included) is accepted here.
pub fn validate_site_name(name: &str) -> VhostResult<()> {
    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.starts_with('.') {
        Some("name must not start with '.'")
    } else if name.contains('/') || name.contains('\0') {
        Some("name must not contain '/' or NUL")
    } else {
        None
    };
    invalid_name(name, reason)
}

/// Stricter check for names of sites about to be created.
pub fn validate_new_site_name(name: &str) -> VhostResult<()> {
    validate_site_name(name)?;
    let reason = name
        .chars()
        .any(char::is_whitespace)
        .then_some("name must not contain whitespace");
    invalid_name(name, reason)
}

fn invalid_name(name: &str, reason: Option<&'static str>) -> VhostResult<()> {
    match reason {
        Some(reason) => Err(VhostError::InvalidName {
            name: name.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Check that a value is safe to place inside a `;`-terminated directive.
///
/// `#` starts an nginx comment and would swallow the terminating `;`.
pub fn validate_directive_value(field: &'static str, value: &str) -> VhostResult<()> {
    let unsafe_char = |c: char| matches!(c, ';' | '#' | '{' | '}' | '\n' | '\r' | '\0');
    if value.trim().is_empty() {
        return Err(invalid_value(field, value, "must not be empty"));
    }
    if value.chars().any(unsafe_char) {
        return Err(invalid_value(
            field,
            value,
            "must not contain ';', '#', braces or line breaks",
        ));
    }
    Ok(())
}

/// Check a value that must stay a single whitespace-free token: a document
/// root directive argument or a hosts-file field.
pub fn validate_single_token(field: &'static str, value: &str) -> VhostResult<()> {
    validate_directive_value(field, value)?;
    if value.chars().any(char::is_whitespace) {
        return Err(invalid_value(field, value, "must not contain whitespace"));
    }
    Ok(())
}

/// Check a single hostname for the hosts file.
pub fn validate_hostname(hostname: &str) -> VhostResult<()> {
    validate_single_token("hostname", hostname)
}

fn invalid_value(field: &'static str, value: &str, reason: &'static str) -> VhostError {
    VhostError::InvalidDirective {
        field,
        value: value.to_string(),
        reason,
    }
}
