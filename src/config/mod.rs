//! Configuration module for path-hours
//!
//! The built-in defaults describe the Ray Wenderlich iOS catalog. A TOML file
//! can override any of them.
//!
//! # Example
//!
//! ```no_run
//! use path_hours::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("catalog.toml")).unwrap();
//! println!("Crawling {}{}", config.site.base_url, config.site.index_path);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{BlacklistConfig, Config, SelectorConfig, SiteConfig, UserAgentConfig};

pub use parser::{load_config, parse_config};
pub use validation::validate;
