//! End-to-end tests against a real listener.

use path_param_headers::http::EchoResponse;

mod common;

#[tokio::test]
async fn test_echo_reports_injected_headers() {
    let (addr, shutdown) =
        common::start_echo_server(common::config_for("/products/{category}/{id}")).await;

    let res = common::client()
        .get(format!("http://{}/products/electronics/12345?sort=price&sort=name", addr))
        .send()
        .await
        .expect("echo server unreachable");

    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));
    assert_eq!(
        res.headers().get("content-type").unwrap(),
        "application/json"
    );

    let echo: EchoResponse = res.json().await.unwrap();
    assert_eq!(echo.method, "GET");
    assert_eq!(echo.path, "/products/electronics/12345");
    assert_eq!(echo.headers["x-path-category"], "electronics");
    assert_eq!(echo.path_params["Category"], "electronics");
    assert_eq!(echo.path_params["Id"], "12345");
    assert_eq!(echo.query_params["sort"], vec!["price", "name"]);

    shutdown.trigger();
}

#[tokio::test]
async fn test_unmatched_path_passes_through() {
    let (addr, shutdown) =
        common::start_echo_server(common::config_for("/products/{category}/{id}")).await;

    let res = common::client()
        .post(format!("http://{}/services/support/ticket", addr))
        .body("hello")
        .send()
        .await
        .expect("echo server unreachable");

    assert_eq!(res.status(), 200);
    let echo: EchoResponse = res.json().await.unwrap();
    assert_eq!(echo.method, "POST");
    assert_eq!(echo.path, "/services/support/ticket");
    assert!(echo.path_params.is_empty());

    shutdown.trigger();
}

#[tokio::test]
async fn test_injected_header_overwrites_client_value() {
    let (addr, shutdown) = common::start_echo_server(common::config_for("/u/{id}")).await;

    let res = common::client()
        .get(format!("http://{}/u/42", addr))
        .header("X-Path-Id", "spoofed")
        .send()
        .await
        .expect("echo server unreachable");

    let echo: EchoResponse = res.json().await.unwrap();
    assert_eq!(echo.path_params["Id"], "42");

    shutdown.trigger();
}

#[tokio::test]
async fn test_client_request_id_is_preserved() {
    let (addr, shutdown) = common::start_echo_server(common::config_for("/u/{id}")).await;

    let res = common::client()
        .get(format!("http://{}/", addr))
        .header("x-request-id", "req-1")
        .send()
        .await
        .expect("echo server unreachable");

    assert_eq!(res.headers().get("x-request-id").unwrap(), "req-1");
    let echo: EchoResponse = res.json().await.unwrap();
    assert_eq!(echo.path, "/");
    assert_eq!(echo.headers["x-request-id"], "req-1");

    shutdown.trigger();
}
