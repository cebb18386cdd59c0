//! Crawler module for catalog fetching and processing
//!
//! This module contains the core crawling logic, including:
//! - HTTP fetching of index and learning-path pages
//! - HTML extraction of learning-path links and courses
//! - Concurrent crawl coordination

mod coordinator;
mod fetcher;
mod parser;

pub use coordinator::{run_crawl, Coordinator};
pub use fetcher::{build_http_client, PageFetcher};
pub use parser::LinkExtractor;

use crate::catalog::CrawlReport;
use crate::config::Config;
use crate::HoursError;

/// Runs a complete crawl operation
///
/// This is the main entry point for starting a crawl. It will:
/// 1. Build the HTTP client and the extractor
/// 2. Fetch the learning-path index
/// 3. Fetch every learning path concurrently
/// 4. Collect the courses into a report
///
/// # Arguments
///
/// * `config` - The crawler configuration
///
/// # Returns
///
/// * `Ok(CrawlReport)` - Crawl completed successfully
/// * `Err(HoursError)` - The first failure encountered
pub async fn crawl(config: &Config) -> Result<CrawlReport, HoursError> {
    run_crawl(config).await
}
