//! Catalog data model
//!
//! Courses found on learning-path pages, the links to those pages, the
//! blacklists that filter them and the aggregated report.

mod blacklist;
mod duration;

pub use blacklist::{last_path_segment, Blacklist};
pub use duration::parse_duration;

use url::Url;

/// A single watchable course listed on a learning-path page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Raw inner markup of the course title
    pub name: String,

    /// Duration in minutes
    pub duration: u32,

    /// Absolute URL of the course page
    pub url: Url,
}

/// Absolute URL of one learning-path page found on the index page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathLink {
    pub url: Url,
}

/// Result of a complete crawl
///
/// Courses are kept in the order their pages finished, which varies between
/// runs. Totals do not depend on that order.
#[derive(Debug, Clone, Default)]
pub struct CrawlReport {
    pub courses: Vec<Course>,
}

impl CrawlReport {
    pub fn new(courses: Vec<Course>) -> Self {
        Self { courses }
    }

    /// Sum of every course duration, in minutes
    pub fn total_minutes(&self) -> u64 {
        self.courses.iter().map(|c| u64::from(c.duration)).sum()
    }

    /// Whole hours in the total
    pub fn hours(&self) -> u64 {
        self.total_minutes() / 60
    }

    /// Minutes left over after the whole hours
    pub fn minutes(&self) -> u64 {
        self.total_minutes() % 60
    }
}
