//! path-hours: learning-path watch time calculator
//!
//! This crate crawls a tutorial catalog's learning-path index, follows every
//! learning path concurrently and adds up the duration of each course listed
//! on those pages.

pub mod catalog;
pub mod config;
pub mod crawler;
pub mod output;

use thiserror::Error;

/// Main error type for path-hours operations
#[derive(Debug, Error)]
pub enum HoursError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Could not build a URL from '{href}': {source}")]
    InvalidUrl {
        href: String,
        source: ::url::ParseError,
    },

    #[error("HTTP client error: {0}")]
    Client(#[from] reqwest::Error),

    #[error("HTTP error for {url}: {source}")]
    Http { url: String, source: reqwest::Error },

    #[error("Response body of {url} is not valid UTF-8: {source}")]
    Decode {
        url: String,
        source: std::string::FromUtf8Error,
    },

    #[error("Duration parse error: {0}")]
    DurationParse(#[from] DurationError),

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("Page task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),

    #[error("Invalid selector in config: {0}")]
    InvalidSelector(String),
}

/// Errors raised while reading a duration out of course metadata
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("no parenthesized duration in '{0}'")]
    MissingParentheses(String),

    #[error("hours without a minutes part in '{0}'")]
    MissingMinutes(String),

    #[error("no digits in '{0}'")]
    NoDigits(String),

    #[error("duration too large in '{0}'")]
    Overflow(String),
}

/// Result type alias for path-hours operations
pub type Result<T> = std::result::Result<T, HoursError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use catalog::{parse_duration, Blacklist, Course, CrawlReport, PathLink};
pub use config::Config;
pub use crawler::{crawl, Coordinator};
