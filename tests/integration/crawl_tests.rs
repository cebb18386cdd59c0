//! Integration tests for the crawler
//!
//! These tests use wiremock to serve a small catalog and run the full
//! fetch, extract and aggregate cycle against it.

use path_hours::config::Config;
use path_hours::crawler::Coordinator;
use path_hours::output::summary_line;
use path_hours::HoursError;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing at the mock server
fn create_test_config(base_url: &str) -> Config {
    let mut config = Config::default();
    config.site.base_url = base_url.to_string();
    config.site.catalog_name = "Test Catalog".to_string();
    config
}

fn index_page(hrefs: &[&str]) -> String {
    let items: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="c-tutorial-item c-tutorial-item--learning-path">
                    <a class="c-tutorial-item__overlay" href="{}"></a>
                    <h3 class="c-tutorial-item__title">Path</h3>
                </div>"#,
                href
            )
        })
        .collect();
    format!("<html><head><title>Paths</title></head><body>{}</body></html>", items)
}

fn path_page(courses: &[(&str, &str)]) -> String {
    let items: String = courses
        .iter()
        .map(|(href, metadata)| {
            format!(
                r#"<div class="c-tutorial-item">
                    <a class="c-tutorial-item__overlay" href="{}"></a>
                    <h3 class="c-tutorial-item__title">Course</h3>
                    <p class="c-tutorial-item__metadata">Video Course {}</p>
                </div>"#,
                href, metadata
            )
        })
        .collect();
    format!("<html><head><title>Path</title></head><body>{}</body></html>", items)
}

async fn mount_html(server: &MockServer, route: &str, body: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .mount(server)
        .await;
}

async fn mount_never_requested(server: &MockServer, route: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(server)
        .await;
}

/// Serves an index with two kept and two blacklisted learning paths
async fn mount_catalog(server: &MockServer, first: &str, second: &str) {
    mount_html(
        server,
        "/ios/paths",
        index_page(&[
            "/ios/paths/learn",
            "/ios/paths/swiftui",
            "/ios/paths/uikit",
            "/ios/paths/concurrency",
        ]),
    )
    .await;
    mount_html(
        server,
        "/ios/paths/swiftui",
        path_page(&[("/ios/courses/1-swiftui", first)]),
    )
    .await;
    mount_html(
        server,
        "/ios/paths/concurrency",
        path_page(&[("/ios/courses/2-concurrency", second)]),
    )
    .await;
    mount_never_requested(server, "/ios/paths/learn").await;
    mount_never_requested(server, "/ios/paths/uikit").await;
}

#[tokio::test]
async fn test_full_crawl_skips_blacklisted_paths() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, "(30 min)", "(1 hr, 30 min)").await;

    let config = create_test_config(&mock_server.uri());
    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");
    let report = coordinator.run().await.expect("Crawl failed");

    assert_eq!(report.courses.len(), 2);
    assert_eq!(report.total_minutes(), 120);

    let mut urls: Vec<String> = report.courses.iter().map(|c| c.url.to_string()).collect();
    urls.sort();
    assert_eq!(
        urls,
        vec![
            format!("{}/ios/courses/1-swiftui", mock_server.uri()),
            format!("{}/ios/courses/2-concurrency", mock_server.uri()),
        ]
    );

    assert_eq!(
        summary_line(&config.site.catalog_name, &report),
        "The total time to watch the Test Catalog path is 2 hours and 0 minutes."
    );
}

#[tokio::test]
async fn test_summary_keeps_plural_for_one_hour() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, "(15 min)", "(45 min)").await;

    let config = create_test_config(&mock_server.uri());
    let report = path_hours::crawl(&config).await.expect("Crawl failed");

    assert_eq!(
        summary_line(&config.site.catalog_name, &report),
        "The total time to watch the Test Catalog path is 1 hours and 0 minutes."
    );
}

#[tokio::test]
async fn test_repeated_crawls_give_same_total() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, "(12 hrs, 34 min)", "(45 min)").await;

    let config = create_test_config(&mock_server.uri());
    let coordinator = Coordinator::new(&config).expect("Failed to create coordinator");

    let first = coordinator.run().await.expect("First crawl failed");
    let second = coordinator.run().await.expect("Second crawl failed");

    assert_eq!(first.total_minutes(), 799);
    assert_eq!(first.total_minutes(), second.total_minutes());
}

#[tokio::test]
async fn test_undecodable_page_fails_crawl() {
    let mock_server = MockServer::start().await;

    mount_html(
        &mock_server,
        "/ios/paths",
        index_page(&["/ios/paths/swiftui", "/ios/paths/broken"]),
    )
    .await;
    mount_html(
        &mock_server,
        "/ios/paths/swiftui",
        path_page(&[("/ios/courses/1-swiftui", "(30 min)")]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/ios/paths/broken"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0xff, 0xfe, 0xfd]))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let result = path_hours::crawl(&config).await;

    assert!(matches!(result, Err(HoursError::Decode { .. })));
}

#[tokio::test]
async fn test_unreachable_page_fails_crawl() {
    let mock_server = MockServer::start().await;

    mount_html(
        &mock_server,
        "/ios/paths",
        index_page(&["/ios/paths/swiftui", "http://127.0.0.1:1/ios/paths/gone"]),
    )
    .await;
    mount_html(
        &mock_server,
        "/ios/paths/swiftui",
        path_page(&[("/ios/courses/1-swiftui", "(30 min)")]),
    )
    .await;

    let config = create_test_config(&mock_server.uri());
    let result = path_hours::crawl(&config).await;

    assert!(matches!(result, Err(HoursError::Http { .. })));
}

#[tokio::test]
async fn test_malformed_duration_fails_crawl() {
    let mock_server = MockServer::start().await;
    mount_catalog(&mock_server, "(30 min)", "ninety minutes").await;

    let config = create_test_config(&mock_server.uri());
    let result = path_hours::crawl(&config).await;

    assert!(matches!(result, Err(HoursError::DurationParse(_))));
}

#[tokio::test]
async fn test_non_success_status_body_is_still_parsed() {
    let mock_server = MockServer::start().await;

    mount_html(
        &mock_server,
        "/ios/paths",
        index_page(&["/ios/paths/archived"]),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/ios/paths/archived"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_string(path_page(&[("/ios/courses/9-old", "(20 min)")])),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri());
    let report = path_hours::crawl(&config).await.expect("Crawl failed");

    assert_eq!(report.total_minutes(), 20);
}

#[tokio::test]
async fn test_index_unreachable_fails_crawl() {
    let config = create_test_config("http://127.0.0.1:1");
    let result = path_hours::crawl(&config).await;

    assert!(matches!(result, Err(HoursError::Http { .. })));
}
