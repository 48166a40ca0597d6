//! Site config template and PHP-FPM socket probing

use std::path::{Path, PathBuf};

use super::layout_detector::find_first_existing;

const SITE_TEMPLATE: &str = r#"server {
    listen 80;
    server_name {server_name};
    root {document_root};
    index index.php index.html;

    location / {
        try_files $uri $uri/ /index.php?$query_string;
    }

    location ~ \.php$ {
        fastcgi_pass unix:{php_socket};
        fastcgi_index index.php;
        fastcgi_param SCRIPT_FILENAME $document_root$fastcgi_script_name;
        include fastcgi_params;
    }

    location ~ /\.ht {
        deny all;
    }

    error_log /var/log/nginx/{name}_error.log;
    access_log /var/log/nginx/{name}_access.log;
}
"#;

/// Values substituted into the site template
#[derive(Debug, Clone)]
pub struct SiteTemplate<'a> {
    pub name: &'a str,
    pub server_name: &'a str,
    pub document_root: &'a str,
    pub php_socket: &'a Path,
}

impl SiteTemplate<'_> {
    /// Render the nginx server block.
    ///
    /// Inputs are validated upstream to contain no braces, so substitution
    /// order cannot re-expand a placeholder.
    pub fn render(&self) -> String {
        SITE_TEMPLATE
            .replace("{php_socket}", &self.php_socket.to_string_lossy())
            .replace("{server_name}", self.server_name)
            .replace("{document_root}", self.document_root)
            .replace("{name}", self.name)
    }
}

/// First existing socket among `candidates`, else `fallback`.
pub fn detect_fpm_socket(candidates: &[PathBuf], fallback: &Path) -> PathBuf {
    find_first_existing(candidates).unwrap_or_else(|| fallback.to_path_buf())
}
