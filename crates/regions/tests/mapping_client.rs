//! Integration tests for [`RegionMappingClient`] against an in-process
//! HTTP server serving region-mapping documents.

use std::net::SocketAddr;

use assert_matches::assert_matches;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

use regionjob_regions::{RegionMappingClient, RegionProviderError, RegionProviderResolver};

const MAPPING: &str = r#"{
    "regionWmsMap": {
        "STE": { "layerName": "region_map:FID_STE_2011_AUST", "regionProp": "STE_CODE11" },
        "SA4": { "layerName": "region_map:FID_SA4_2011_AUST", "regionProp": "SA4_CODE11" }
    }
}"#;

/// Serve `router` on an ephemeral loopback port and return its address.
async fn serve(router: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    addr
}

// ---------------------------------------------------------------------------
// Test: known region type resolves from the fetched document
// ---------------------------------------------------------------------------

#[tokio::test]
async fn resolves_provider_from_remote_document() {
    let addr = serve(Router::new().route("/regionMapping.json", get(|| async { MAPPING }))).await;
    let client = RegionMappingClient::new(format!("http://{addr}/regionMapping.json"));

    let provider = client.resolve("SA4").await.unwrap();

    assert_eq!(provider.region_type, "SA4");
    assert_eq!(provider.region_prop.as_deref(), Some("SA4_CODE11"));
}

// ---------------------------------------------------------------------------
// Test: unknown region type is NotFound
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_region_type_is_not_found() {
    let addr = serve(Router::new().route("/regionMapping.json", get(|| async { MAPPING }))).await;
    let client = RegionMappingClient::new(format!("http://{addr}/regionMapping.json"));

    let result = client.resolve("LGA").await;

    assert_matches!(result, Err(RegionProviderError::NotFound { .. }));
}

// ---------------------------------------------------------------------------
// Test: non-2xx definitions response surfaces the status
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_status_is_reported() {
    let addr = serve(Router::new().route(
        "/regionMapping.json",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    ))
    .await;
    let client = RegionMappingClient::new(format!("http://{addr}/regionMapping.json"));

    let result = client.fetch_list().await;

    assert_matches!(result, Err(RegionProviderError::HttpStatus(503)));
}

// ---------------------------------------------------------------------------
// Test: unreachable definitions URL is a request error
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unreachable_url_is_request_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = RegionMappingClient::new(format!("http://{addr}/regionMapping.json"));

    assert_matches!(
        client.resolve("STE").await,
        Err(RegionProviderError::Request(_))
    );
}
