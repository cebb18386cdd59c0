//! HTTP fetcher implementation
//!
//! This module handles every HTTP request made during a crawl:
//! - Building the HTTP client with the configured user agent
//! - GET requests returning the page body as UTF-8 text
//!
//! There are no retries and no timeout beyond the client defaults. The
//! response status is not interpreted; a non-success status only produces a
//! warning and its body is returned like any other.

use crate::config::UserAgentConfig;
use crate::HoursError;
use reqwest::Client;
use url::Url;

/// Builds an HTTP client with proper configuration
///
/// # Example
///
/// ```no_run
/// use path_hours::config::UserAgentConfig;
/// use path_hours::crawler::build_http_client;
///
/// let config = UserAgentConfig {
///     crawler_name: "path-hours".to_string(),
///     crawler_version: "0.1.0".to_string(),
/// };
///
/// let client = build_http_client(&config).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    let user_agent = format!("{}/{}", config.crawler_name, config.crawler_version);

    Client::builder()
        .user_agent(user_agent)
        .gzip(true)
        .brotli(true)
        .build()
}

/// Retrieves pages as text
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Builds a fetcher with its own client
    pub fn from_config(config: &UserAgentConfig) -> Result<Self, HoursError> {
        Ok(Self::new(build_http_client(config)?))
    }

    /// Fetches a URL and returns its body
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The response body
    /// * `Err(HoursError::Http)` - The request failed or the body could not be read
    /// * `Err(HoursError::Decode)` - The body is not valid UTF-8
    pub async fn fetch(&self, url: &Url) -> Result<String, HoursError> {
        let http_error = |source| HoursError::Http {
            url: url.to_string(),
            source,
        };

        let response = self.client.get(url.clone()).send().await.map_err(http_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("{} answered with status {}", url, status);
        }

        let bytes = response.bytes().await.map_err(http_error)?;
        tracing::debug!("Fetched {} ({} bytes)", url, bytes.len());

        String::from_utf8(bytes.to_vec()).map_err(|source| HoursError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> UserAgentConfig {
        UserAgentConfig {
            crawler_name: "TestCrawler".to_string(),
            crawler_version: "1.0".to_string(),
        }
    }

    #[test]
    fn test_build_http_client() {
        let config = create_test_config();
        let client = build_http_client(&config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_fetcher_from_config() {
        let fetcher = PageFetcher::from_config(&create_test_config());
        assert!(fetcher.is_ok());
    }

    // Fetching against live responses is covered by the wiremock
    // integration tests
}
