//! Site config parsing
//!
//! Single-pass text search for the two identifying directives. This is not a
//! structural nginx parser: nesting and comments are ignored and the first
//! textual match wins.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

/// Fields extracted from a site config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSite {
    pub server_name: Option<String>,
    pub document_root: Option<String>,
}

fn server_name_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"server_name\s+([^;]+);").expect("valid regex"))
}

fn root_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^\s*root\s+([^;]+);").expect("valid regex"))
}

fn server_block_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"server\s*\{").expect("valid regex"))
}

/// Extract `server_name` and the line-anchored `root` from config text.
pub fn parse_config_text(content: &str) -> ParsedSite {
    let capture = |re: &Regex| {
        re.captures(content)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string())
    };

    ParsedSite {
        server_name: capture(server_name_re()),
        document_root: capture(root_re()),
    }
}

/// Parse a config file; any read failure yields an empty result.
pub fn parse_config(path: &Path) -> ParsedSite {
    match std::fs::read_to_string(path) {
        Ok(content) => parse_config_text(&content),
        Err(e) => {
            tracing::debug!("could not read {}: {}", path.display(), e);
            ParsedSite::default()
        }
    }
}

/// True if the text opens a `server {` block.
pub fn is_site_config_text(content: &str) -> bool {
    server_block_re().is_match(content)
}

/// True if the file opens a `server {` block; read errors yield `false`.
pub fn is_site_config(path: &Path) -> bool {
    std::fs::read_to_string(path)
        .map(|content| is_site_config_text(&content))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"server {
    listen 80;
    server_name example.local;
    root /var/www/example;
    index index.php index.html;

    location / {
        try_files $uri $uri/ /index.php?$query_string;
    }

    location ~ \.php$ {
        fastcgi_pass unix:/run/php-fpm/php-fpm.sock;
        fastcgi_index index.php;
        include fastcgi_params;
    }
}
"#;

    #[test]
    fn parses_server_name_and_root() {
        let parsed = parse_config_text(SAMPLE);
        assert_eq!(parsed.server_name.as_deref(), Some("example.local"));
        assert_eq!(parsed.document_root.as_deref(), Some("/var/www/example"));
    }

    #[test]
    fn keeps_multiple_server_names_verbatim() {
        let parsed = parse_config_text("server_name a.local b.local;\nroot /var/www/x;\n");
        assert_eq!(parsed.server_name.as_deref(), Some("a.local b.local"));
        assert_eq!(parsed.document_root.as_deref(), Some("/var/www/x"));
    }

    #[test]
    fn missing_server_name_still_extracts_root() {
        let parsed = parse_config_text("server {\n    root /var/www/example;\n}");
        assert_eq!(parsed.server_name, None);
        assert_eq!(parsed.document_root.as_deref(), Some("/var/www/example"));
    }

    #[test]
    fn root_must_start_a_line() {
        let parsed = parse_config_text("server { alias_root /nope; }\n# document_root /x;\n");
        assert_eq!(parsed.document_root, None);
    }

    #[test]
    fn first_match_wins_regardless_of_nesting() {
        let text = "server {\n  location /a {\n    root /nested;\n  }\n  root /outer;\n}\n";
        let parsed = parse_config_text(text);
        assert_eq!(parsed.document_root.as_deref(), Some("/nested"));
    }

    #[test]
    fn nonexistent_file_yields_nothing() {
        let dir = tempdir().unwrap();
        let parsed = parse_config(&dir.path().join("nonexistent.conf"));
        assert_eq!(parsed, ParsedSite::default());
    }

    #[test]
    fn non_utf8_file_yields_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("binary.conf");
        fs::write(&path, [0xff, 0xfe, 0x00, 0x73]).unwrap();
        assert_eq!(parse_config(&path), ParsedSite::default());
        assert!(!is_site_config(&path));
    }

    #[test]
    fn site_config_detection() {
        let dir = tempdir().unwrap();
        let site = dir.path().join("site.conf");
        let upstream = dir.path().join("upstream.conf");
        let empty = dir.path().join("empty.conf");
        fs::write(&site, SAMPLE).unwrap();
        fs::write(
            &upstream,
            "# Some other nginx config\nupstream backend {\n    server 127.0.0.1:8080;\n}\n",
        )
        .unwrap();
        fs::write(&empty, "").unwrap();

        assert!(is_site_config(&site));
        assert!(!is_site_config(&upstream));
        assert!(!is_site_config(&empty));
        assert!(!is_site_config(&dir.path().join("missing.conf")));
    }

    proptest! {
        #[test]
        fn server_block_tolerates_whitespace(ws in "[ \t\r\n]{0,8}") {
            let text = format!("server{ws}{{\n}}");
            prop_assert!(is_site_config_text(&text));
        }

        #[test]
        fn text_without_server_keyword_is_not_a_site(text in "[a-rt-z {};\n]{0,64}") {
            prop_assert!(!is_site_config_text(&text));
        }

        #[test]
        fn server_name_round_trips(name in "[a-z][a-z0-9.-]{0,20}( [a-z][a-z0-9.-]{0,20}){0,2}") {
            let text = format!("server {{\n    server_name {name};\n}}\n");
            let parsed = parse_config_text(&text);
            prop_assert_eq!(parsed.server_name, Some(name));
        }
    }
}
