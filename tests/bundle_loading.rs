//! Behavior-driven tests for loading bundles into a display region
//!
//! These tests verify WHAT a caller observes after a load: the region
//! content and the diagnostics emitted, never internal state.

use std::sync::Arc;
use std::time::Duration;

use ferrobundle_core::{
    BundleFetcher, BundleId, CollectingDiagnostics, DisplayRegion, FetcherConfig, HttpError,
    HttpResponse, LoadOutcome, MemoryRegion, StaticHttpClient,
};

const BASE_URL: &str = "http://localhost:5000";

fn bundle_url(id: &str) -> String {
    format!("{BASE_URL}/bundle/{id}")
}

fn fetcher_with(client: StaticHttpClient) -> (BundleFetcher, Arc<CollectingDiagnostics>) {
    let diagnostics = Arc::new(CollectingDiagnostics::new());
    let fetcher = BundleFetcher::new(FetcherConfig::default())
        .with_http_client(Arc::new(client))
        .with_diagnostics(diagnostics.clone());
    (fetcher, diagnostics)
}

fn region_with(content: &str) -> MemoryRegion {
    MemoryRegion::with_content("bundle-content", content).expect("valid region id")
}

// =============================================================================
// Successful loads
// =============================================================================

#[tokio::test]
async fn user_sees_heading_and_card_for_single_stock_bundle() {
    // Given: The server returns the "Tech Picks" bundle
    let (fetcher, diagnostics) = fetcher_with(StaticHttpClient::new().with_response(
        bundle_url("tech_picks"),
        HttpResponse::ok_json(
            r#"{"title": "Tech Picks", "stocks": [{"name": "Acme", "symbol": "ACM", "price": 120}]}"#,
        ),
    ));
    let region = region_with("");

    // When: The bundle is loaded
    let outcome = fetcher
        .load_bundle(&BundleId::new("tech_picks"), &region)
        .await;

    // Then: The region shows the heading and one card with the stock details
    assert_eq!(outcome, LoadOutcome::Rendered { stock_count: 1 });
    let html = region.content();
    assert!(html.contains("<h2 class=\"text-2xl font-bold mb-4\">Tech Picks</h2>"));
    assert_eq!(html.matches("glass-card").count(), 1);
    assert!(html.contains(">Acme<"));
    assert!(html.contains(">ACM<"));
    assert!(html.contains(">₹120<"));

    // And: Nothing was logged
    assert!(diagnostics.messages().is_empty());
}

#[tokio::test]
async fn cards_appear_once_per_stock_in_server_order() {
    // Given: A bundle with three banks
    let (fetcher, _) = fetcher_with(StaticHttpClient::new().with_response(
        bundle_url("efficient_banks"),
        HttpResponse::ok_json(
            r#"{
                "title": "Efficient Banks",
                "description": "Top performing banking stocks",
                "icon": "bank",
                "stocks": [
                    {"name": "HDFC Bank", "symbol": "HDFCBANK", "price": "1680.25"},
                    {"name": "ICICI Bank", "symbol": "ICICIBANK", "price": "985.25"},
                    {"name": "SBI", "symbol": "SBIN", "price": "565.80"}
                ]
            }"#,
        ),
    ));
    let region = region_with("");

    // When: It is loaded
    fetcher
        .load_bundle(&BundleId::new("efficient_banks"), &region)
        .await;

    // Then: The title appears once and the cards keep the server's order
    let html = region.content();
    assert_eq!(html.matches("Efficient Banks").count(), 1);
    assert_eq!(html.matches("glass-card").count(), 3);
    let positions: Vec<usize> = ["HDFCBANK", "ICICIBANK", "SBIN"]
        .iter()
        .map(|symbol| html.find(&format!(">{symbol}<")).expect("card present"))
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[tokio::test]
async fn numeric_bundle_ids_address_the_same_resource() {
    // Given: A server answering bundle 7
    let (fetcher, _) = fetcher_with(StaticHttpClient::new().with_response(
        bundle_url("7"),
        HttpResponse::ok_json(r#"{"title": "Seven", "stocks": []}"#),
    ));
    let region = region_with("");

    // When: The caller passes a numeric id
    let outcome = fetcher.load_bundle(&BundleId::from(7_u64), &region).await;

    // Then: The bundle is rendered with an empty grid
    assert_eq!(outcome, LoadOutcome::Rendered { stock_count: 0 });
    assert!(region.content().contains("Seven"));
}

#[tokio::test]
async fn hostile_bundle_text_cannot_inject_markup() {
    // Given: A bundle whose fields contain markup
    let (fetcher, _) = fetcher_with(StaticHttpClient::new().with_response(
        bundle_url("evil"),
        HttpResponse::ok_json(
            r#"{"title": "<img src=x onerror=alert(1)>", "stocks": [{"name": "<script>x()</script>", "symbol": "S", "price": "1"}]}"#,
        ),
    ));
    let region = region_with("");

    // When: It is loaded
    fetcher.load_bundle(&BundleId::new("evil"), &region).await;

    // Then: The markup is shown as text
    let html = region.content();
    assert!(!html.contains("<img"));
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
}

// =============================================================================
// Not found
// =============================================================================

#[tokio::test]
async fn error_marker_leaves_region_untouched_and_logs_once() {
    // Given: The server marks the bundle as missing (HTTP 404 with a JSON body)
    let (fetcher, diagnostics) = fetcher_with(StaticHttpClient::new().with_response(
        bundle_url("unknown"),
        HttpResponse::new(404, r#"{"error": "Bundle not found"}"#),
    ));
    let region = region_with("<p>previous bundle</p>");

    // When: The bundle is loaded
    let outcome = fetcher.load_bundle(&BundleId::new("unknown"), &region).await;

    // Then: Nothing is rendered and exactly one diagnostic is emitted
    assert_eq!(outcome, LoadOutcome::NotFound);
    assert_eq!(region.content(), "<p>previous bundle</p>");
    assert_eq!(diagnostics.messages(), ["Bundle not found"]);
}

#[tokio::test]
async fn boolean_error_marker_on_success_status_still_suppresses_render() {
    // Given: A 200 response carrying { "error": true }
    let (fetcher, diagnostics) = fetcher_with(StaticHttpClient::new().with_response(
        bundle_url("flagged"),
        HttpResponse::ok_json(r#"{"error": true}"#),
    ));
    let region = region_with("before");

    // When: The bundle is loaded
    let outcome = fetcher.load_bundle(&BundleId::new("flagged"), &region).await;

    // Then: The error marker wins over the HTTP status
    assert_eq!(outcome, LoadOutcome::NotFound);
    assert_eq!(region.content(), "before");
    assert_eq!(diagnostics.messages(), ["Bundle not found"]);
}

// =============================================================================
// Transport and decode failures
// =============================================================================

#[tokio::test]
async fn rejected_request_logs_error_with_detail() {
    // Given: The server is unreachable
    let (fetcher, diagnostics) = fetcher_with(StaticHttpClient::new().with_failure(
        bundle_url("efficient_banks"),
        HttpError::new("connection failed: tcp connect error"),
    ));
    let region = region_with("kept");

    // When: The bundle is loaded
    let outcome = fetcher
        .load_bundle(&BundleId::new("efficient_banks"), &region)
        .await;

    // Then: Nothing is rendered and one prefixed diagnostic carries the detail
    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(region.content(), "kept");
    let messages = diagnostics.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Error:"));
    assert!(messages[0].contains("tcp connect error"));
}

#[tokio::test]
async fn non_json_body_is_a_decode_failure() {
    // Given: The server answers with an HTML error page
    let (fetcher, diagnostics) = fetcher_with(StaticHttpClient::new().with_response(
        bundle_url("broken"),
        HttpResponse::new(500, "<html>Internal Server Error</html>"),
    ));
    let region = region_with("kept");

    // When: The bundle is loaded
    let outcome = fetcher.load_bundle(&BundleId::new("broken"), &region).await;

    // Then: The failure is logged, not rendered
    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(region.content(), "kept");
    let messages = diagnostics.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Error: invalid bundle payload"));
}

#[tokio::test]
async fn bundle_without_stocks_is_a_decode_failure() {
    // Given: A bundle body that carries a title but no stocks array
    let (fetcher, diagnostics) = fetcher_with(StaticHttpClient::new().with_response(
        bundle_url("tech_leaders"),
        HttpResponse::ok_json(r#"{"title": "Tech Leaders", "icon": "tech"}"#),
    ));
    let region = region_with("kept");

    // When: The bundle is loaded
    let outcome = fetcher
        .load_bundle(&BundleId::new("tech_leaders"), &region)
        .await;

    // Then: Nothing is rendered and one decode diagnostic names the field
    assert_eq!(outcome, LoadOutcome::Failed);
    assert_eq!(region.content(), "kept");
    let messages = diagnostics.messages();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].starts_with("Error: invalid bundle payload"));
    assert!(messages[0].contains("stocks"));
}

#[tokio::test]
async fn ids_with_path_separators_stay_in_one_segment() {
    // Given: A server that only knows the encoded id
    let client = Arc::new(StaticHttpClient::new().with_response(
        bundle_url("a%2Fb"),
        HttpResponse::ok_json(r#"{"title": "Encoded", "stocks": []}"#),
    ));
    let diagnostics = Arc::new(CollectingDiagnostics::new());
    let fetcher = BundleFetcher::new(FetcherConfig::default())
        .with_http_client(client.clone())
        .with_diagnostics(diagnostics);
    let region = region_with("");

    // When: An id containing '/' is loaded
    let outcome = fetcher.load_bundle(&BundleId::new("a/b"), &region).await;

    // Then: Exactly one request was made, to the encoded path
    assert!(outcome.is_rendered());
    let requests = client.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, bundle_url("a%2Fb"));
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn concurrent_loads_are_last_write_wins() {
    // Given: Two bundles, the first of which answers slowly
    let slow = bundle_url("slow");
    let client = StaticHttpClient::new()
        .with_response(
            slow.clone(),
            HttpResponse::ok_json(r#"{"title": "Slow Bundle", "stocks": []}"#),
        )
        .with_delay(&slow, Duration::from_millis(50))
        .with_response(
            bundle_url("fast"),
            HttpResponse::ok_json(r#"{"title": "Fast Bundle", "stocks": []}"#),
        );
    let (fetcher, diagnostics) = fetcher_with(client);
    let region = region_with("");

    // When: Both loads run concurrently against the same region
    let slow_id = BundleId::new("slow");
    let fast_id = BundleId::new("fast");
    let (first, second) = tokio::join!(
        fetcher.load_bundle(&slow_id, &region),
        fetcher.load_bundle(&fast_id, &region),
    );

    // Then: Both render and the later response owns the region
    assert!(first.is_rendered() && second.is_rendered());
    assert!(region.content().contains("Slow Bundle"));
    assert!(!region.content().contains("Fast Bundle"));
    assert!(diagnostics.messages().is_empty());
    assert_eq!(region.id(), "bundle-content");
}
