use crate::config::types::{BlacklistConfig, Config, SelectorConfig, SiteConfig, UserAgentConfig};
use crate::ConfigError;
use scraper::Selector;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_site_config(&config.site)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_selectors(&config.selectors)?;
    validate_blacklist(&config.blacklist)?;
    Ok(())
}

/// Validates the site section
fn validate_site_config(config: &SiteConfig) -> Result<(), ConfigError> {
    let base = Url::parse(&config.base_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid base-url: {}", e)))?;

    if base.scheme() != "http" && base.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url must use http or https, got: {}",
            base.scheme()
        )));
    }

    if base.host_str().is_none() {
        return Err(ConfigError::InvalidUrl(format!(
            "base-url has no host: {}",
            config.base_url
        )));
    }

    if config.index_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "index-path cannot be empty".to_string(),
        ));
    }

    if config.catalog_name.trim().is_empty() {
        return Err(ConfigError::Validation(
            "catalog-name cannot be empty".to_string(),
        ));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler-name cannot be empty".to_string(),
        ));
    }

    if config.crawler_name.chars().any(char::is_whitespace) {
        return Err(ConfigError::Validation(format!(
            "crawler-name cannot contain whitespace, got '{}'",
            config.crawler_name
        )));
    }

    Ok(())
}

/// Checks that every configured selector compiles
fn validate_selectors(config: &SelectorConfig) -> Result<(), ConfigError> {
    let selectors = [
        ("path-item", &config.path_item),
        ("path-link", &config.path_link),
        ("course-item", &config.course_item),
        ("course-link", &config.course_link),
        ("course-title", &config.course_title),
        ("course-metadata", &config.course_metadata),
    ];

    for (name, selector) in selectors {
        Selector::parse(selector).map_err(|e| {
            ConfigError::InvalidSelector(format!("{} '{}': {}", name, selector, e))
        })?;
    }

    Ok(())
}

/// Validates blacklist entries
fn validate_blacklist(config: &BlacklistConfig) -> Result<(), ConfigError> {
    for entry in config.paths.iter().chain(config.courses.iter()) {
        validate_segment(entry)?;
    }
    Ok(())
}

/// Validates a single blacklist entry: one path segment, optional leading `/`
fn validate_segment(entry: &str) -> Result<(), ConfigError> {
    let segment = entry.strip_prefix('/').unwrap_or(entry);

    if segment.is_empty() {
        return Err(ConfigError::Validation(
            "blacklist entries cannot be empty".to_string(),
        ));
    }

    if segment.contains('/') {
        return Err(ConfigError::Validation(format!(
            "blacklist entry must be a single path segment, got '{}'",
            entry
        )));
    }

    Ok(())
}
