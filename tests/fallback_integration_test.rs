//! Remote-first detection with local fallback, against a mock service

use aishield::config::RemoteConfig;
use aishield::detection::{CatalogVariant, CategoryId, DetectionEngine};
use aishield::fallback::{FallbackOrchestrator, ScanSource, ScanStats};
use aishield::remote::HttpRemoteClient;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

const TEXT: &str = "Call me at 555-123-4567";

fn orchestrator_for(server: &mockito::ServerGuard, variant: CatalogVariant) -> FallbackOrchestrator {
    let config = RemoteConfig {
        base_url: server.url(),
        ..RemoteConfig::default()
    };
    let engine = Arc::new(DetectionEngine::new(variant).unwrap());
    let client = Arc::new(HttpRemoteClient::new(&config).unwrap());

    FallbackOrchestrator::new(engine, client).with_timeout(Duration::from_secs(2))
}

#[tokio::test]
async fn test_remote_result_is_returned_verbatim() {
    let mut server = mockito::Server::new_async().await;
    // The remote service masks differently than the local engine would
    let _mock = server
        .mock("POST", "/process_text")
        .with_status(200)
        .with_body(
            json!({
                "original_text": TEXT,
                "redacted_text": "Call me at <PHONE>",
                "entities": [{"type": "phone", "text": "555-123-4567", "start": 11, "end": 23}],
                "has_pii": true
            })
            .to_string(),
        )
        .create_async()
        .await;

    let processed = orchestrator_for(&server, CatalogVariant::Minimal)
        .process_text_with_source(TEXT)
        .await;

    assert_eq!(processed.source, ScanSource::Remote);
    assert_eq!(processed.result.redacted_text, "Call me at <PHONE>");
}

#[tokio::test]
async fn test_server_error_falls_back_to_local() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/process_text")
        .with_status(500)
        .create_async()
        .await;

    let processed = orchestrator_for(&server, CatalogVariant::Minimal)
        .process_text_with_source(TEXT)
        .await;

    assert_eq!(processed.source, ScanSource::Local);
    assert_eq!(processed.result.redacted_text, "Call me at [REDACTED]");
    assert_eq!(processed.result.entities[0].category, CategoryId::Phone);
}

#[tokio::test]
async fn test_malformed_json_falls_back_to_local() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/process_text")
        .with_status(200)
        .with_body("{\"original_text\": ")
        .create_async()
        .await;

    let processed = orchestrator_for(&server, CatalogVariant::Minimal)
        .process_text_with_source(TEXT)
        .await;

    assert_eq!(processed.source, ScanSource::Local);
    assert!(processed.result.has_pii);
}

#[tokio::test]
async fn test_out_of_bounds_spans_fall_back_to_local() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/process_text")
        .with_status(200)
        .with_body(
            json!({
                "original_text": TEXT,
                "redacted_text": "Call me at [REDACTED]",
                "entities": [{"type": "phone", "start": 11, "end": 400}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let processed = orchestrator_for(&server, CatalogVariant::Minimal)
        .process_text_with_source(TEXT)
        .await;

    assert_eq!(processed.source, ScanSource::Local);
    assert_eq!(processed.result.entities[0].end, 23);
}

#[tokio::test]
async fn test_code_point_offsets_fall_back_to_local() {
    let text = "Grüße, SSN 123-45-6789";
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/process_text")
        .with_status(200)
        .with_body(
            json!({
                "original_text": text,
                "redacted_text": "Grüße, SSN [REDACTED]",
                "entities": [{"type": "ssn", "text": "123-45-6789", "start": 11, "end": 22}]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let processed = orchestrator_for(&server, CatalogVariant::Extended)
        .process_text_with_source(text)
        .await;

    assert_eq!(processed.source, ScanSource::Local);
    assert_eq!(processed.result.entities[0].start, 13);
    assert_eq!(processed.result.redacted_text, "Grüße, SSN [REDACTED]");
}

#[tokio::test]
async fn test_unreachable_service_falls_back_to_local() {
    let config = RemoteConfig {
        base_url: "http://127.0.0.1:1".to_string(),
        ..RemoteConfig::default()
    };
    let engine = Arc::new(DetectionEngine::new(CatalogVariant::Extended).unwrap());
    let client = Arc::new(HttpRemoteClient::new(&config).unwrap());
    let orchestrator = FallbackOrchestrator::new(engine, client);

    let result = orchestrator.process_text("ping 10.0.0.254 now").await;
    assert_eq!(result.redacted_text, "ping [REDACTED] now");
}

#[tokio::test]
async fn test_stats_track_sources() {
    let mut server = mockito::Server::new_async().await;
    let _ok = server
        .mock("POST", "/process_text")
        .match_body(mockito::Matcher::Json(json!({"text": TEXT})))
        .with_status(200)
        .with_body(
            json!({
                "original_text": TEXT,
                "redacted_text": "Call me at [REDACTED]",
                "entities": [{"type": "phone", "start": 11, "end": 23}]
            })
            .to_string(),
        )
        .create_async()
        .await;
    let _fail = server
        .mock("POST", "/process_text")
        .match_body(mockito::Matcher::Json(json!({"text": "SSN 123-45-6789"})))
        .with_status(502)
        .create_async()
        .await;

    let orchestrator = orchestrator_for(&server, CatalogVariant::Extended);
    let mut stats = ScanStats::new();

    orchestrator.process_and_record(TEXT, &mut stats).await;
    orchestrator.process_and_record("SSN 123-45-6789", &mut stats).await;
    orchestrator.process_and_record("nothing here", &mut stats).await;

    assert_eq!(stats.scans, 3);
    assert_eq!(stats.pii_found, 2);
    assert_eq!(stats.remote_scans, 1);
    assert_eq!(stats.local_fallbacks, 2);
}
