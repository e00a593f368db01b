//! arXiv client tests against a mock API.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use paprly_server::client::ArxivClient;
use paprly_server::config::Config;
use paprly_server::error::ClientError;
use paprly_server::models::{SortCriterion, SortOrder};

fn atom_entry(id: &str, title: &str) -> String {
    format!(
        r#"<entry>
    <id>http://arxiv.org/abs/{id}</id>
    <updated>2021-01-02T00:00:00Z</updated>
    <published>2021-01-01T00:00:00Z</published>
    <title>{title}</title>
    <summary>Abstract of {title}.</summary>
    <author><name>Ada Lovelace</name></author>
    <author><name>Alan Turing</name></author>
  </entry>"#
    )
}

fn atom_feed(entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>http://arxiv.org/api/query</id>
  <title>arXiv Query</title>
  <updated>2024-01-01T00:00:00Z</updated>
  {}
</feed>"#,
        entries.join("\n")
    )
}

fn feed_of(count: usize, offset: usize) -> String {
    let entries: Vec<String> = (0..count)
        .map(|i| atom_entry(&format!("2101.{:05}v1", offset + i), &format!("Paper {}", offset + i)))
        .collect();
    atom_feed(&entries)
}

fn atom_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "application/atom+xml")
        .set_body_string(body)
}

fn client_with_page_size(server: &MockServer, page_size: usize) -> ArxivClient {
    let mut config = Config::for_testing(&server.uri());
    config.search_page_size = page_size;
    ArxivClient::new(&config).unwrap()
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_sends_query_and_sort_parameters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "quantum computing"))
        .and(query_param("start", "0"))
        .and(query_param("max_results", "3"))
        .and(query_param("sortBy", "relevance"))
        .and(query_param("sortOrder", "ascending"))
        .respond_with(atom_response(feed_of(3, 0)))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_page_size(&server, 100);
    let entries = client
        .search("quantum computing", 3, SortCriterion::Relevance, SortOrder::Ascending)
        .await
        .unwrap();

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0].title, "Paper 0");
    assert_eq!(entries[0].authors, vec!["Ada Lovelace", "Alan Turing"]);
}

#[tokio::test]
async fn test_search_pages_until_limit() {
    let server = MockServer::start().await;

    for (start, size) in [(0, 2), (2, 2), (4, 1)] {
        Mock::given(method("GET"))
            .and(path("/api/query"))
            .and(query_param("start", start.to_string()))
            .and(query_param("max_results", size.to_string()))
            .respond_with(atom_response(feed_of(size, start)))
            .expect(1)
            .mount(&server)
            .await;
    }

    let client = client_with_page_size(&server, 2);
    let entries = client
        .search("graphs", 5, SortCriterion::SubmittedDate, SortOrder::Descending)
        .await
        .unwrap();

    let ids: Vec<&str> = entries.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "http://arxiv.org/abs/2101.00000v1",
            "http://arxiv.org/abs/2101.00001v1",
            "http://arxiv.org/abs/2101.00002v1",
            "http://arxiv.org/abs/2101.00003v1",
            "http://arxiv.org/abs/2101.00004v1",
        ]
    );
}

#[tokio::test]
async fn test_search_stops_on_short_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("start", "0"))
        .respond_with(atom_response(feed_of(2, 0)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("start", "2"))
        .respond_with(atom_response(feed_of(1, 2)))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("start", "4"))
        .respond_with(atom_response(feed_of(2, 4)))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_with_page_size(&server, 2);
    let entries = client
        .search("graphs", 10, SortCriterion::SubmittedDate, SortOrder::Descending)
        .await
        .unwrap();

    assert_eq!(entries.len(), 3);
}

#[tokio::test]
async fn test_search_never_exceeds_limit() {
    let server = MockServer::start().await;

    // Upstream ignores max_results and sends more than asked for.
    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom_response(feed_of(8, 0)))
        .mount(&server)
        .await;

    let client = client_with_page_size(&server, 100);
    let entries = client
        .search("quantum computing", 3, SortCriterion::SubmittedDate, SortOrder::Descending)
        .await
        .unwrap();

    assert_eq!(entries.len(), 3);
}

#[tokio::test]
async fn test_search_zero_results_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom_response(feed_of(1, 0)))
        .expect(0)
        .mount(&server)
        .await;

    let client = client_with_page_size(&server, 100);
    let entries = client
        .search("anything", 0, SortCriterion::SubmittedDate, SortOrder::Descending)
        .await
        .unwrap();

    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_search_status_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&server)
        .await;

    let client = client_with_page_size(&server, 100);
    let err = client
        .search("graphs", 5, SortCriterion::SubmittedDate, SortOrder::Descending)
        .await
        .unwrap_err();

    assert!(matches!(err, ClientError::Status { status: 503, .. }), "got {err:?}");
}

// =============================================================================
// Lookup
// =============================================================================

#[tokio::test]
async fn test_fetch_by_id_uses_id_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("id_list", "2101.00001"))
        .respond_with(atom_response(atom_feed(&[atom_entry("2101.00001v3", "Lookup")])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_with_page_size(&server, 100);
    let entries = client.fetch_by_id("2101.00001").await.unwrap();

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "http://arxiv.org/abs/2101.00001v3");
    assert!(entries[0].published.is_some());
}

#[tokio::test]
async fn test_fetch_by_id_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not a feed"))
        .mount(&server)
        .await;

    let client = client_with_page_size(&server, 100);
    let err = client.fetch_by_id("2101.00001").await.unwrap_err();

    assert!(matches!(err, ClientError::Feed(_)), "got {err:?}");
}

#[tokio::test]
async fn test_fetch_by_id_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(
            atom_response(feed_of(1, 0)).set_delay(std::time::Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let mut config = Config::for_testing(&server.uri());
    config.lookup_timeout = std::time::Duration::from_millis(50);
    let client = ArxivClient::new(&config).unwrap();

    let err = client.fetch_by_id("2101.00001").await.unwrap_err();
    assert!(err.is_timeout(), "got {err:?}");
}
