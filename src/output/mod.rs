//! Human-readable crawl output

use crate::catalog::CrawlReport;

/// Formats the one-line summary printed at the end of a crawl
///
/// The wording is fixed: units are always plural, even for `1 hours`.
///
/// # Example
///
/// ```
/// use path_hours::output::summary_line;
/// use path_hours::CrawlReport;
///
/// let line = summary_line("Ray Wenderlich iOS", &CrawlReport::default());
/// assert_eq!(
///     line,
///     "The total time to watch the Ray Wenderlich iOS path is 0 hours and 0 minutes."
/// );
/// ```
pub fn summary_line(catalog_name: &str, report: &CrawlReport) -> String {
    format!(
        "The total time to watch the {} path is {} hours and {} minutes.",
        catalog_name,
        report.hours(),
        report.minutes()
    )
}
