//! HTML extraction of learning paths and courses
//!
//! Two modes share one set of compiled selectors:
//! - Index mode reads the learning-path links from the catalog index page,
//!   dropping blacklisted paths
//! - Path mode reads every course (title, link and duration) from one
//!   learning-path page

use crate::catalog::{last_path_segment, parse_duration, Blacklist, Course, PathLink};
use crate::config::{Config, SelectorConfig};
use crate::HoursError;
use scraper::{ElementRef, Html, Selector};
use url::Url;

/// Selectors compiled once from the configuration
#[derive(Debug, Clone)]
struct CompiledSelectors {
    path_item: Selector,
    path_link: Selector,
    course_item: Selector,
    course_link: Selector,
    course_title: Selector,
    course_metadata: Selector,
}

impl CompiledSelectors {
    fn compile(config: &SelectorConfig) -> Result<Self, HoursError> {
        Ok(Self {
            path_item: compile(&config.path_item)?,
            path_link: compile(&config.path_link)?,
            course_item: compile(&config.course_item)?,
            course_link: compile(&config.course_link)?,
            course_title: compile(&config.course_title)?,
            course_metadata: compile(&config.course_metadata)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, HoursError> {
    Selector::parse(selector).map_err(|e| HoursError::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })
}

/// Extracts learning-path links and courses from catalog pages
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    base_url: Url,
    selectors: CompiledSelectors,
    path_blacklist: Blacklist,
    course_blacklist: Blacklist,
}

impl LinkExtractor {
    /// Creates an extractor from its parts
    ///
    /// # Arguments
    ///
    /// * `base_url` - Site root that hrefs are resolved against
    /// * `selectors` - CSS selectors for paths and courses
    /// * `path_blacklist` - Learning paths to skip in index mode
    /// * `course_blacklist` - Courses to report (they are not filtered)
    pub fn new(
        base_url: Url,
        selectors: &SelectorConfig,
        path_blacklist: Blacklist,
        course_blacklist: Blacklist,
    ) -> Result<Self, HoursError> {
        Ok(Self {
            base_url,
            selectors: CompiledSelectors::compile(selectors)?,
            path_blacklist,
            course_blacklist,
        })
    }

    /// Creates an extractor from the crawler configuration
    pub fn from_config(config: &Config) -> Result<Self, HoursError> {
        let base_url = resolve(&config.site.base_url, None)?;
        Self::new(
            base_url,
            &config.selectors,
            Blacklist::new(&config.blacklist.paths),
            Blacklist::new(&config.blacklist.courses),
        )
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Extracts the learning-path links from the index page
    ///
    /// Paths whose last href segment is blacklisted are skipped. The rest are
    /// returned in document order, duplicates included.
    ///
    /// # Example
    ///
    /// ```
    /// use path_hours::crawler::LinkExtractor;
    /// use path_hours::Config;
    ///
    /// let extractor = LinkExtractor::from_config(&Config::default()).unwrap();
    /// let html = r#"
    ///     <div class="c-tutorial-item c-tutorial-item--learning-path">
    ///         <a class="c-tutorial-item__overlay" href="/ios/paths/swiftui"></a>
    ///     </div>
    ///     <div class="c-tutorial-item c-tutorial-item--learning-path">
    ///         <a class="c-tutorial-item__overlay" href="/ios/paths/learn"></a>
    ///     </div>"#;
    /// let links = extractor.extract_path_links(html).unwrap();
    /// assert_eq!(links.len(), 1);
    /// assert_eq!(links[0].url.as_str(), "https://www.raywenderlich.com/ios/paths/swiftui");
    /// ```
    pub fn extract_path_links(&self, html: &str) -> Result<Vec<PathLink>, HoursError> {
        let document = Html::parse_document(html);
        let mut links = Vec::new();

        for item in document.select(&self.selectors.path_item) {
            let href = first_attr(item, &self.selectors.path_link, "href");

            if self.path_blacklist.matches(href) {
                tracing::debug!("Skipping blacklisted path {}", href);
                continue;
            }

            links.push(PathLink {
                url: resolve(href, Some(&self.base_url))?,
            });
        }

        Ok(links)
    }

    /// Extracts every course listed on a learning-path page
    ///
    /// Each selected course item yields exactly one [`Course`]. The course
    /// blacklist is only reported here, never applied.
    pub fn extract_courses(&self, html: &str) -> Result<Vec<Course>, HoursError> {
        let document = Html::parse_document(html);
        let mut courses = Vec::new();

        for item in document.select(&self.selectors.course_item) {
            let href = first_attr(item, &self.selectors.course_link, "href");
            let name = item
                .select(&self.selectors.course_title)
                .next()
                .map(|title| title.inner_html())
                .unwrap_or_default();
            let metadata = item
                .select(&self.selectors.course_metadata)
                .next()
                .map(|meta| meta.text().collect::<String>())
                .unwrap_or_default();

            let url = resolve(href, Some(&self.base_url))?;
            let duration = parse_duration(&metadata)?;

            if self.course_blacklist.matches(href) {
                tracing::debug!(
                    "Course {} is blacklisted ({}) but still counted",
                    last_path_segment(href).unwrap_or_default(),
                    url
                );
            }

            courses.push(Course {
                name,
                duration,
                url,
            });
        }

        Ok(courses)
    }
}

/// Reads an attribute of the first element matching `selector` under `item`
///
/// A missing element or attribute reads as an empty string, which resolves
/// to the base URL itself.
fn first_attr<'a>(item: ElementRef<'a>, selector: &Selector, name: &str) -> &'a str {
    item.select(selector)
        .next()
        .and_then(|element| element.value().attr(name))
        .unwrap_or_default()
}

/// Resolves an href against an optional base URL
fn resolve(href: &str, base: Option<&Url>) -> Result<Url, HoursError> {
    let resolved = match base {
        Some(base) => base.join(href),
        None => Url::parse(href),
    };

    resolved.map_err(|source| HoursError::InvalidUrl {
        href: href.to_string(),
        source,
    })
}
