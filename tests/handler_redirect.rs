mod common;

use axum_test::TestServer;
use url_registry::routes::router;

#[tokio::test]
async fn test_redirect_success() {
    let pool = common::create_test_pool().await;
    common::create_test_mapping(&pool, "redir1", "https://example.com/target").await;

    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let response = server.get("/redir1").await;

    assert_eq!(response.status_code(), 302);

    let location = response.header("location");
    assert_eq!(location, "https://example.com/target");
}

#[tokio::test]
async fn test_create_then_redirect() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let created = server
        .get("/create")
        .add_query_param("longURL", "https://example.com/a?x=1&y=2")
        .await;
    let code = common::parse_code(&created.text());

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/a?x=1&y=2");
}

#[tokio::test]
async fn test_redirect_encodes_control_characters_in_location() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let created = server
        .get("/create")
        .add_query_param("longURL", "https://a.com/x\ny")
        .await;
    created.assert_status_ok();
    let code = common::parse_code(&created.text());

    let response = server.get(&format!("/{code}")).await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://a.com/x%0Ay");
}

#[tokio::test]
async fn test_redirect_encodes_non_ascii_location() {
    let pool = common::create_test_pool().await;
    common::create_test_mapping(&pool, "unicd1", "https://example.com/café").await;

    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let response = server.get("/unicd1").await;

    assert_eq!(response.status_code(), 302);
    assert_eq!(response.header("location"), "https://example.com/caf%C3%A9");
}

#[tokio::test]
async fn test_redirect_not_found() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let response = server.get("/zzzzzz").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["code"], "zzzzzz");
}

#[tokio::test]
async fn test_redirect_malformed_code_is_not_found() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    server.get("/not-a-code!").await.assert_status_not_found();
    server.get("/a").await.assert_status_not_found();
}

#[tokio::test]
async fn test_root_is_not_found() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    server.get("/").await.assert_status_not_found();
}

#[tokio::test]
async fn test_favicon_is_no_content() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(router(common::create_test_state(pool))).unwrap();

    let response = server.get("/favicon.ico").await;

    assert_eq!(response.status_code(), 204);
}

#[tokio::test]
async fn test_redirect_storage_failure() {
    let pool = common::create_test_pool().await;
    let server = TestServer::new(router(common::create_test_state(pool.clone()))).unwrap();

    pool.close().await;

    let response = server.get("/abc123").await;

    assert_eq!(response.status_code(), 500);
}
