//! End-to-end tests for the REST exposure
//!
//! Uses `axum_test::TestServer` against a router built by `ServerBuilder`.

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::TimeZone;
use paydash::prelude::*;
use serde_json::Value;

fn create_test_server(count: usize) -> TestServer {
    let generator = PaymentGenerator::new(GeneratorConfig::default()).unwrap();
    let now = Utc.with_ymd_and_hms(2025, 5, 1, 12, 0, 0).unwrap();
    let payments = generator.generate(count, &mut StdRng::seed_from_u64(7), now);

    let app = ServerBuilder::new()
        .with_service(InMemoryRecordService::new(payments).with_latency(Duration::ZERO))
        .build()
        .expect("Failed to build app");

    TestServer::try_new(app).expect("Failed to create test server")
}

// =============================================================================
// Health Check Tests
// =============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = create_test_server(0);

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "paydash");
    }

    #[tokio::test]
    async fn test_healthz_endpoint() {
        let server = create_test_server(0);

        let response = server.get("/healthz").await;
        response.assert_status_ok();
    }
}

// =============================================================================
// Payment Listing Tests
// =============================================================================

mod payment_tests {
    use super::*;

    #[tokio::test]
    async fn test_first_page() {
        let server = create_test_server(500);

        let response = server
            .get("/payments")
            .add_query_param("pageIndex", 0)
            .add_query_param("pageSize", 50)
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["data"].as_array().unwrap().len(), 50);
        assert_eq!(body["pageCount"], 10);
        assert_eq!(body["total"], 500);

        let first = &body["data"][0];
        assert_eq!(first["id"], "PAY-1000");
        assert_eq!(first["email"], "user1@example.com");
        assert!(
            ["pending", "processing", "success", "failed"]
                .contains(&first["status"].as_str().unwrap())
        );
    }

    #[tokio::test]
    async fn test_defaults_to_first_page_of_ten() {
        let server = create_test_server(25);

        let page: Page<Payment> = server.get("/payments").await.json();
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.page_count, 3);
        assert_eq!(page.total, 25);
    }

    #[tokio::test]
    async fn test_past_end_is_empty() {
        let server = create_test_server(500);

        let page: Page<Payment> = server
            .get("/payments")
            .add_query_param("pageIndex", 10)
            .add_query_param("pageSize", 50)
            .await
            .json();
        assert!(page.data.is_empty());
        assert_eq!(page.page_count, 10);
        assert_eq!(page.total, 500);
    }

    #[tokio::test]
    async fn test_zero_page_size_returns_400() {
        let server = create_test_server(10);

        let response = server
            .get("/payments")
            .add_query_param("pageSize", 0)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_ARGUMENT");
        assert_eq!(body["details"]["argument"], "page_size");
    }

    #[tokio::test]
    async fn test_negative_page_index_returns_400() {
        let server = create_test_server(10);

        let response = server
            .get("/payments")
            .add_query_param("pageIndex", -1)
            .add_query_param("pageSize", 5)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["details"]["argument"], "page_index");
    }

    #[tokio::test]
    async fn test_non_numeric_page_index_returns_json_400() {
        let server = create_test_server(10);

        let response = server
            .get("/payments")
            .add_query_param("pageIndex", "abc")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_ARGUMENT");
        assert_eq!(body["details"]["argument"], "query");
        assert!(!body["message"].as_str().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_fractional_page_size_returns_json_400() {
        let server = create_test_server(10);

        let response = server
            .get("/payments")
            .add_query_param("pageSize", "2.5")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["code"], "INVALID_ARGUMENT");
    }
}
