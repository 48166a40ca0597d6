//! Domain Services
//!
//! Stateless logic over the filesystem snapshot:
//! - `layout_detector` - which site layout is active
//! - `config_parser` - `server_name` / `root` extraction
//! - `site_template` - new site rendering and FPM socket probing

pub mod config_parser;
pub mod layout_detector;
pub mod site_template;

pub use config_parser::{
    is_site_config, is_site_config_text, parse_config, parse_config_text, ParsedSite,
};
pub use layout_detector::{detect_layout, find_first_existing};
pub use site_template::{detect_fpm_socket, SiteTemplate};
