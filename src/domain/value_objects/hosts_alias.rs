//! HostsAlias value object - one `ip<TAB>hostname` line of the hosts file

/// Address used when the caller does not name one
pub const DEFAULT_ALIAS_IP: &str = "127.0.0.1";

/// A hostname mapping recorded in the hosts file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostsAlias {
    hostname: String,
    ip: String,
}

impl HostsAlias {
    pub fn new(hostname: impl Into<String>, ip: impl Into<String>) -> Self {
        Self {
            hostname: hostname.into(),
            ip: ip.into(),
        }
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Render as a hosts-file line (newline terminated)
    pub fn to_line(&self) -> String {
        format!("{}\t{}\n", self.ip, self.hostname)
    }

    /// Substring match used for both the existence check and removal.
    ///
    /// Not anchored: `foo.local` also matches a line for `foo.local.bak`.
    pub fn matches_line(hostname: &str, line: &str) -> bool {
        line.contains(hostname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alias_renders_tab_separated_line() {
        let alias = HostsAlias::new("blog.local", DEFAULT_ALIAS_IP);
        assert_eq!(alias.to_line(), "127.0.0.1\tblog.local\n");
    }

    #[test]
    fn matches_line_is_substring() {
        assert!(HostsAlias::matches_line("foo.local", "127.0.0.1\tfoo.local"));
        assert!(HostsAlias::matches_line(
            "foo.local",
            "127.0.0.1\tfoo.local.bak"
        ));
        assert!(!HostsAlias::matches_line("foo.local", "127.0.0.1\tbar.local"));
    }
}
