//! HTTP fetching tests against a mock review site.

use std::fs;
use std::path::{Path, PathBuf};

use review_harvester::config::{BROWSER_USER_AGENT, MAX_REDIRECTS};
use review_harvester::extract::extract_reviews;
use review_harvester::{
    HarvesterError, HttpPageFetcher, PageFetcher, ResultCap, ReviewHarvester, ReviewQuery,
};
use scraper::Html;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACCOUNT: &str = "www.example.com";

fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("trustpilot")
        .join(name)
}

fn redirect_to(location: &str) -> ResponseTemplate {
    ResponseTemplate::new(302).insert_header("location", location)
}

fn listing(names: &[&str], total_pages: u32) -> String {
    let articles: String = names
        .iter()
        .map(|name| format!(r#"<article><span data-consumer-name-typography>{name}</span></article>"#))
        .collect();
    let buttons: String = (1..=total_pages)
        .map(|n| format!(r#"<a name="pagination-button-{n}">{n}</a>"#))
        .collect();
    format!("<html><body>{articles}<nav>{buttons}</nav></body></html>")
}

fn html_response(status: u16, body: String) -> ResponseTemplate {
    ResponseTemplate::new(status)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

async fn mount_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path(format!("/review/{ACCOUNT}")))
        .and(query_param("languages", "all"))
        .and(query_param("sort", "recency"))
        .and(query_param("page", "2"))
        .respond_with(html_response(200, listing(&["Carol"], 2)))
        .with_priority(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path(format!("/review/{ACCOUNT}")))
        .and(query_param("languages", "all"))
        .and(query_param("sort", "recency"))
        .respond_with(html_response(200, listing(&["Alice", "Bob"], 2)))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_fetches_all_pages_over_http() {
    let server = MockServer::start().await;
    mount_pages(&server).await;

    let base_url = server.uri();
    let reviews = tokio::task::spawn_blocking(move || {
        let fetcher = HttpPageFetcher::with_base_url(base_url).unwrap();
        ReviewHarvester::new(ReviewQuery::new(ACCOUNT), fetcher)
            .unwrap()
            .get_reviews()
    })
    .await
    .unwrap()
    .unwrap();

    let names: Vec<&str> = reviews.iter().map(|r| r.consumer.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[0].url.query(),
        Some("languages=all&sort=recency"),
        "first page must not carry a page parameter"
    );
    assert_eq!(requests[1].url.query(), Some("languages=all&page=2&sort=recency"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cap_stops_before_second_request() {
    let server = MockServer::start().await;
    mount_pages(&server).await;

    let base_url = server.uri();
    let reviews = tokio::task::spawn_blocking(move || {
        let fetcher = HttpPageFetcher::with_base_url(base_url).unwrap();
        let query = ReviewQuery::new(ACCOUNT).with_cap(ResultCap::from_count(1).unwrap());
        ReviewHarvester::new(query, fetcher).unwrap().get_reviews()
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(reviews.len(), 1);
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_sends_browser_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_response(200, listing(&["Alice"], 1)))
        .expect(1)
        .mount(&server)
        .await;

    let base_url = server.uri();
    let body = tokio::task::spawn_blocking(move || {
        HttpPageFetcher::with_base_url(base_url)
            .unwrap()
            .fetch(ACCOUNT, 1)
    })
    .await
    .unwrap()
    .unwrap();

    assert!(body.contains("Alice"));

    let requests = server.received_requests().await.unwrap();
    let user_agent = requests[0]
        .headers
        .get("user-agent")
        .and_then(|value| value.to_str().ok());
    assert_eq!(user_agent, Some(BROWSER_USER_AGENT));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_error_status_with_body_is_not_a_failure() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_response(503, listing(&["Stale"], 1)))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let reviews = tokio::task::spawn_blocking(move || {
        let fetcher = HttpPageFetcher::with_base_url(base_url).unwrap();
        ReviewHarvester::new(ReviewQuery::new(ACCOUNT), fetcher)
            .unwrap()
            .get_reviews()
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(reviews.len(), 1);
    assert_eq!(reviews[0].consumer, "Stale");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_follows_redirect_to_listing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/review/{ACCOUNT}")))
        .respond_with(redirect_to(&format!("/moved/review/{ACCOUNT}?languages=all")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/moved/review/{ACCOUNT}")))
        .respond_with(html_response(200, listing(&["Alice", "Bob"], 1)))
        .mount(&server)
        .await;

    let base_url = server.uri();
    let reviews = tokio::task::spawn_blocking(move || {
        let fetcher = HttpPageFetcher::with_base_url(base_url).unwrap();
        ReviewHarvester::new(ReviewQuery::new(ACCOUNT), fetcher)
            .unwrap()
            .get_reviews()
    })
    .await
    .unwrap()
    .unwrap();

    let names: Vec<&str> = reviews.iter().map(|r| r.consumer.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob"]);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_too_many_redirects_is_a_fetch_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/review/{ACCOUNT}")))
        .respond_with(redirect_to("/hop/1"))
        .mount(&server)
        .await;
    // Every hop points to a fresh URL, so the chain ends only at the limit.
    let hops = u32::try_from(MAX_REDIRECTS).unwrap() + 2;
    for hop in 1..=hops {
        Mock::given(method("GET"))
            .and(path(format!("/hop/{hop}")))
            .respond_with(redirect_to(&format!("/hop/{}", hop + 1)))
            .mount(&server)
            .await;
    }

    let base_url = server.uri();
    let result = tokio::task::spawn_blocking(move || {
        let fetcher = HttpPageFetcher::with_base_url(base_url).unwrap();
        ReviewHarvester::new(ReviewQuery::new(ACCOUNT), fetcher)
            .unwrap()
            .get_reviews()
    })
    .await
    .unwrap();

    match result {
        Err(HarvesterError::Fetch { page, source, .. }) => {
            assert_eq!(page, 1);
            assert!(source.is_redirect());
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), MAX_REDIRECTS + 1);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_gzip_body_is_decoded() {
    let server = MockServer::start().await;
    let compressed = fs::read(fixture_path("page1.html.gz")).unwrap();
    Mock::given(method("GET"))
        .and(path(format!("/review/{ACCOUNT}")))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html; charset=utf-8")
                .insert_header("content-encoding", "gzip")
                .set_body_bytes(compressed),
        )
        .mount(&server)
        .await;

    let base_url = server.uri();
    let body = tokio::task::spawn_blocking(move || {
        HttpPageFetcher::with_base_url(base_url)
            .unwrap()
            .fetch(ACCOUNT, 1)
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(body, fs::read_to_string(fixture_path("page1.html")).unwrap());
    let reviews = extract_reviews(&Html::parse_document(&body));
    assert_eq!(reviews.len(), 10);
    assert_eq!(reviews[0].consumer, "Maria Jensen");

    let requests = server.received_requests().await.unwrap();
    let accept_encoding = requests[0]
        .headers
        .get("accept-encoding")
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    assert!(accept_encoding.contains("gzip"));
}

#[test]
fn test_connection_failure_names_page() {
    // Nothing listens on the discard port.
    let fetcher = HttpPageFetcher::with_base_url("http://127.0.0.1:9").unwrap();
    let result = ReviewHarvester::new(ReviewQuery::new(ACCOUNT), fetcher)
        .unwrap()
        .get_reviews();

    match result {
        Err(HarvesterError::Fetch {
            account_id, page, ..
        }) => {
            assert_eq!(account_id, ACCOUNT);
            assert_eq!(page, 1);
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}
