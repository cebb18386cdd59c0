//! Crawler coordinator - main crawl orchestration logic
//!
//! A crawl runs in strictly ordered stages:
//! - Fetch the learning-path index page
//! - Extract the learning-path links
//! - Fetch and parse every learning-path page concurrently
//! - Flatten the courses into a single report
//!
//! The first failing stage or page task aborts the whole crawl.

use crate::catalog::{Course, CrawlReport, PathLink};
use crate::config::Config;
use crate::crawler::fetcher::PageFetcher;
use crate::crawler::parser::LinkExtractor;
use crate::HoursError;
use std::sync::Arc;
use tokio::task::JoinSet;
use url::Url;

/// Main crawler coordinator structure
#[derive(Debug, Clone)]
pub struct Coordinator {
    fetcher: Arc<PageFetcher>,
    extractor: Arc<LinkExtractor>,
    index_url: Url,
}

impl Coordinator {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `config` - The crawler configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Successfully created coordinator
    /// * `Err(HoursError)` - A URL, selector or the HTTP client could not be built
    pub fn new(config: &Config) -> Result<Self, HoursError> {
        let fetcher = PageFetcher::from_config(&config.user_agent)?;
        let extractor = LinkExtractor::from_config(config)?;

        let index_url = extractor
            .base_url()
            .join(&config.site.index_path)
            .map_err(|source| HoursError::InvalidUrl {
                href: config.site.index_path.clone(),
                source,
            })?;

        Ok(Self::with_parts(fetcher, extractor, index_url))
    }

    /// Creates a coordinator from already built parts
    pub fn with_parts(fetcher: PageFetcher, extractor: LinkExtractor, index_url: Url) -> Self {
        Self {
            fetcher: Arc::new(fetcher),
            extractor: Arc::new(extractor),
            index_url,
        }
    }

    pub fn index_url(&self) -> &Url {
        &self.index_url
    }

    /// Runs the crawl and returns every course found
    pub async fn run(&self) -> Result<CrawlReport, HoursError> {
        tracing::info!("Fetching learning-path index {}", self.index_url);
        let index_html = self.fetcher.fetch(&self.index_url).await?;

        let path_links = self.extractor.extract_path_links(&index_html)?;
        tracing::info!("Found {} learning paths", path_links.len());

        let courses = self.fetch_courses(path_links).await?;
        let report = CrawlReport::new(courses);

        tracing::info!(
            "Found {} courses totalling {} minutes",
            report.courses.len(),
            report.total_minutes()
        );

        Ok(report)
    }

    /// Fetches and parses every learning-path page concurrently
    ///
    /// One task is spawned per link. Results are flattened in completion
    /// order. On the first error the remaining tasks are aborted when the
    /// set is dropped and the error is returned.
    async fn fetch_courses(&self, links: Vec<PathLink>) -> Result<Vec<Course>, HoursError> {
        let mut tasks = JoinSet::new();

        for link in links {
            let fetcher = Arc::clone(&self.fetcher);
            let extractor = Arc::clone(&self.extractor);

            tasks.spawn(async move {
                let html = fetcher.fetch(&link.url).await?;
                let courses = extractor.extract_courses(&html)?;
                tracing::debug!("{} lists {} courses", link.url, courses.len());
                Ok::<_, HoursError>(courses)
            });
        }

        let mut courses = Vec::new();
        while let Some(joined) = tasks.join_next().await {
            courses.extend(joined??);
        }

        Ok(courses)
    }
}

/// Runs a complete crawl with the given configuration
pub async fn run_crawl(config: &Config) -> Result<CrawlReport, HoursError> {
    Coordinator::new(config)?.run().await
}
