mod common;

use axum::http::Method;
use shortlink::domain::repositories::LinkRepository;

#[tokio::test]
async fn test_put_then_get_round_trip() {
    let (server, _repo) = common::accepting_server();

    let created = server
        .put("/")
        .add_header("Host", "short.ly")
        .text("http://example.com")
        .await;

    created.assert_status_ok();
    assert_eq!(created.text(), "http://short.ly/1\n");

    let redirected = server.get("/1").add_header("Host", "short.ly").await;

    assert_eq!(redirected.status_code(), 301);
    assert_eq!(redirected.header("location"), "http://example.com");
}

#[tokio::test]
async fn test_short_url_path_resolves() {
    let (server, _repo) = common::accepting_server();

    for i in 0..37 {
        server
            .put("/")
            .add_header("Host", "short.ly")
            .text(format!("http://example.com/{i}"))
            .await
            .assert_status_ok();
    }

    let created = server
        .put("/")
        .add_header("Host", "short.ly")
        .text("http://example.com/last")
        .await;
    let short_url = created.text();
    let path = short_url
        .trim_end()
        .strip_prefix("http://short.ly")
        .unwrap()
        .to_string();
    assert_eq!(path, "/12");

    let redirected = server.get(&path).await;
    assert_eq!(redirected.header("location"), "http://example.com/last");
}

#[tokio::test]
async fn test_delete_is_server_error() {
    let (server, repo) = common::accepting_server();

    server
        .put("/")
        .add_header("Host", "short.ly")
        .text("http://example.com")
        .await
        .assert_status_ok();

    for path in ["/", "/1", "/anything"] {
        let response = server.delete(path).text("http://example.com").await;
        assert_eq!(response.status_code(), 500, "DELETE {path}");
    }

    assert_eq!(repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn test_other_methods_are_server_errors() {
    let (server, repo) = common::accepting_server();

    let response = server.post("/").text("http://example.com").await;
    assert_eq!(response.status_code(), 500);

    let response = server.patch("/1").await;
    assert_eq!(response.status_code(), 500);

    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_head_is_server_error() {
    let (server, _repo) = common::accepting_server();

    server
        .put("/")
        .add_header("Host", "short.ly")
        .text("http://example.com")
        .await
        .assert_status_ok();

    for path in ["/", "/1", "/zz"] {
        let response = server.method(Method::HEAD, path).await;
        assert_eq!(response.status_code(), 500, "HEAD {path}");
    }
}
