mod common;

use std::sync::Arc;

use axum::http::{StatusCode, header};
use axum_test::TestServer;
use link_shorten::routes::router;
use serde_json::json;

#[tokio::test]
async fn test_redirect_found() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "abc", "https://example.com/landing?ref=1").await;

    let response = server.get("/abc").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(
        response.header("location"),
        "https://example.com/landing?ref=1"
    );
}

#[tokio::test]
async fn test_redirect_percent_encodes_target_url() {
    let (server, _repo) = common::make_server();

    let cases = [
        ("nl", "https://example.com/a\nb", "https://example.com/ab"),
        ("uni", "https://example.com/\u{fc}", "https://example.com/%C3%BC"),
        ("space", "https://example.com/?q=a b", "https://example.com/?q=a%20b"),
    ];

    for (id, target_url, location) in cases {
        server
            .post("/api/_oein/links")
            .add_header("Authorization", common::admin_auth())
            .json(&json!({ "mode": "custom", "id": id, "targetUrl": target_url }))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server.get(&format!("/{id}")).await;

        response.assert_status(StatusCode::FOUND);
        assert_eq!(response.header("location"), location, "{id}");
    }
}

#[tokio::test]
async fn test_redirect_ignores_query_string() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "q", "https://example.com").await;

    let response = server.get("/q?utm_source=mail").await;

    response.assert_status(StatusCode::FOUND);
    assert_eq!(response.header("location"), "https://example.com");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "Case", "https://example.com").await;

    server.get("/Case").await.assert_status(StatusCode::FOUND);
    server.get("/case").await.assert_status_not_found();
}

#[tokio::test]
async fn test_unknown_id_serves_not_found_page() {
    let (server, _repo) = common::make_server();

    let response = server.get("/nonexistent").await;

    response.assert_status_not_found();
    let content_type = response.header("content-type");
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    assert!(response.text().contains("<html"));
}

#[tokio::test]
async fn test_not_found_page_falls_back_to_plain_text() {
    let repository = Arc::new(common::InMemoryLinkRepository::new());
    let state = common::create_test_state_with(
        repository,
        Some(common::ADMIN_PASSWORD),
        "/nonexistent/public".into(),
    );
    let server = TestServer::new(router(state)).unwrap();

    let response = server.get("/missing").await;

    response.assert_status_not_found();
    assert_eq!(response.text(), "Link not found");
}

#[tokio::test]
async fn test_unmatched_routes_are_not_found() {
    let (server, _repo) = common::make_server();

    for path in ["/", "/a/b/c"] {
        let response = server.get(path).await;
        response.assert_status_not_found();
    }
}

#[tokio::test]
async fn test_post_to_short_id_is_not_redirected() {
    let (server, repo) = common::make_server();
    common::create_test_link(&repo, "only-get", "https://example.com").await;

    let response = server.post("/only-get").await;

    assert_ne!(response.status_code(), StatusCode::FOUND);
}

// ─── PRODUCTION ROUTER ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_trailing_slash_is_trimmed_before_routing() {
    let (app, repo) = common::make_app();
    common::create_test_link(&repo, "abc", "https://example.com/slash").await;

    for uri in ["/abc", "/abc/"] {
        let response = common::get(&app, uri, false).await;

        assert_eq!(response.status(), StatusCode::FOUND, "{uri}");
        assert_eq!(
            response.headers()[header::LOCATION],
            "https://example.com/slash"
        );
    }
}

#[tokio::test]
async fn test_admin_ui_served_with_and_without_trailing_slash() {
    let (app, _repo) = common::make_app();

    for uri in ["/_oein", "/_oein/"] {
        let response = common::get(&app, uri, true).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let page = common::body_text(response).await;
        assert!(page.contains(r#"src="/_oein/app.js""#));
        assert!(page.contains(r#"href="/_oein/style.css""#));
    }

    for asset in ["/_oein/app.js", "/_oein/style.css"] {
        let response = common::get(&app, asset, true).await;
        assert_eq!(response.status(), StatusCode::OK, "{asset}");
    }
}

#[tokio::test]
async fn test_admin_api_through_production_router() {
    let (app, _repo) = common::make_app();

    let response = common::get(&app, "/api/_oein/links/", true).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = common::get(&app, "/api/_oein/links/", false).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
