//! Reusable test content

pub const BLOG_SITE: &str = r#"server {
    listen 80;
    server_name blog.local www.blog.local;
    root /srv/www/blog;
}
"#;

pub const UPSTREAM_ONLY: &str = r#"upstream backend {
    server 127.0.0.1:9000;
}
"#;

pub const HOSTS: &str = "127.0.0.1\tlocalhost\n::1\tlocalhost\n";
