mod common;

use axum_test::TestServer;
use url_registry::routes::router;

#[tokio::test]
async fn test_health_endpoint_success() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["database"]["status"], "ok");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_health_endpoint_degraded() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(router(common::create_test_state(pool.clone()))).unwrap();

    pool.close().await;

    let response = server.get("/health").await;

    assert_eq!(response.status_code(), 503);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["database"]["status"], "error");
}
