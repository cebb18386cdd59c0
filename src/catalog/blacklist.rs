use std::collections::HashSet;

/// A set of URL path segments to leave out of a crawl
///
/// Entries are compared against the last non-empty `/`-delimited segment of
/// an href, so `/learn` matches both `/ios/paths/learn` and `learn/`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    segments: HashSet<String>,
}

impl Blacklist {
    /// Builds a blacklist from entries written with or without a leading `/`
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let segments = entries
            .into_iter()
            .map(|entry| entry.as_ref().trim_matches('/').to_string())
            .filter(|entry| !entry.is_empty())
            .collect();

        Self { segments }
    }

    /// Returns true if the href's last path segment is blacklisted
    pub fn matches(&self, href: &str) -> bool {
        last_path_segment(href).is_some_and(|segment| self.segments.contains(segment))
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Returns the last non-empty `/`-delimited segment of an href
pub fn last_path_segment(href: &str) -> Option<&str> {
    href.split('/').rfind(|s| !s.is_empty())
}
