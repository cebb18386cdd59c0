use serde::Deserialize;

/// Main configuration structure for path-hours
///
/// Every section has a default, so an empty TOML file (or no file at all)
/// describes the built-in catalog.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub selectors: SelectorConfig,
    #[serde(default)]
    pub blacklist: BlacklistConfig,
}

/// The catalog site being crawled
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Site root that every relative href is resolved against
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Path of the learning-path index page under the base URL
    #[serde(rename = "index-path")]
    pub index_path: String,

    /// Catalog name used in the summary line
    #[serde(rename = "catalog-name")]
    pub catalog_name: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.raywenderlich.com".to_string(),
            index_path: "/ios/paths".to_string(),
            catalog_name: "Ray Wenderlich iOS".to_string(),
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the crawler
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the crawler
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: env!("CARGO_PKG_NAME").to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// CSS selectors locating learning paths and courses in the markup
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SelectorConfig {
    /// Learning-path entries on the index page
    #[serde(rename = "path-item")]
    pub path_item: String,

    /// Link inside a learning-path entry
    #[serde(rename = "path-link")]
    pub path_link: String,

    /// Course entries on a learning-path page
    #[serde(rename = "course-item")]
    pub course_item: String,

    /// Link inside a course entry
    #[serde(rename = "course-link")]
    pub course_link: String,

    /// Title element inside a course entry
    #[serde(rename = "course-title")]
    pub course_title: String,

    /// Metadata element (holding the duration) inside a course entry
    #[serde(rename = "course-metadata")]
    pub course_metadata: String,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            path_item: ".c-tutorial-item.c-tutorial-item--learning-path".to_string(),
            path_link: "a.c-tutorial-item__overlay".to_string(),
            course_item: ".c-tutorial-item".to_string(),
            course_link: "a".to_string(),
            course_title: ".c-tutorial-item__title".to_string(),
            course_metadata: ".c-tutorial-item__metadata".to_string(),
        }
    }
}

/// Path segments excluded from the crawl
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BlacklistConfig {
    /// Learning paths that are never fetched
    pub paths: Vec<String>,

    /// Courses listed as not worth watching (reported, not filtered)
    pub courses: Vec<String>,
}

impl Default for BlacklistConfig {
    fn default() -> Self {
        Self {
            paths: vec!["/learn".to_string(), "/uikit".to_string()],
            courses: vec![
                "/4418-beginning-git".to_string(),
                "/4729-command-line-basics".to_string(),
            ],
        }
    }
}
