// HTTP tests for the service server routes
use crate::{
    server::{BuildState, Server, ServerBuilder, ServiceServerBuilder},
    GatewayConfig,
};

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use hyper::body::to_bytes;
use serde_json::{json, Value};
use tower::ServiceExt;

// Test helpers
fn build_router(cors_enabled: bool) -> Router {
    let config = GatewayConfig::new("SERVICE", "4000")
        .with_host("127.0.0.1")
        .with_cors(cors_enabled);

    let mut builder = ServiceServerBuilder::new();
    builder.build(&config).unwrap();

    match builder.result() {
        BuildState::Built(Server::Service(server)) => server.router(),
        other => panic!("expected a built service server, got {:?}", other),
    }
}

async fn body_json(response: Response) -> Value {
    let body_bytes = to_bytes(response.into_body()).await.unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

async fn body_text(response: Response) -> String {
    let body_bytes = to_bytes(response.into_body()).await.unwrap();
    String::from_utf8(body_bytes.to_vec()).unwrap()
}

fn graphql_post(uri: &str, query: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json!({ "query": query }).to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_post_graphql_hello() {
    let app = build_router(false);

    let response = app.oneshot(graphql_post("/graphql", "{ hello }")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "data": { "hello": "world" } }));
}

#[tokio::test]
async fn test_get_graphql_hello() {
    let app = build_router(false);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/graphql?query=%7B%20hello%20%7D")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "data": { "hello": "world" } }));
}

#[tokio::test]
async fn test_post_graphql_reports_unknown_field() {
    let app = build_router(false);

    let response = app.oneshot(graphql_post("/graphql", "{ nope }")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["errors"].is_array());
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_get_playground_serves_console() {
    let app = build_router(false);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/playground")
        .header(header::ACCEPT, "text/html,application/xhtml+xml,*/*;q=0.8")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = body_text(response).await;
    assert!(html.contains("GraphQL Playground"));
    assert!(html.contains("/graphql"));
}

#[tokio::test]
async fn test_get_playground_executes_query_for_json_clients() {
    let app = build_router(false);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/playground?query=%7B%20hello%20%7D")
        .header(header::ACCEPT, "application/json")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "data": { "hello": "world" } }));
}

#[tokio::test]
async fn test_get_playground_without_query_is_bad_request() {
    let app = build_router(false);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/playground")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_post_playground_executes_queries() {
    let app = build_router(false);

    let response = app.oneshot(graphql_post("/playground", "{ hello }")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "data": { "hello": "world" } }));
}

#[tokio::test]
async fn test_health_check() {
    let app = build_router(false);

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "GraphQL Gateway is running!");
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = build_router(false);

    let request = Request::builder()
        .uri("/graphiql")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_short_circuits() {
    let app = build_router(true);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/graphql")
        .header(header::ORIGIN, "http://example.com")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers().clone();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "86400");

    assert_eq!(headers.get_all(header::ACCESS_CONTROL_ALLOW_METHODS).iter().count(), 1);
    let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
    for method in ["POST", "GET", "OPTIONS", "PUT", "DELETE"] {
        assert!(methods.contains(method), "missing {} in {}", method, methods);
    }

    let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    for name in ["accept", "authorization", "content-type", "content-length", "accept-encoding"] {
        assert!(allowed.contains(name), "missing {} in {}", name, allowed);
    }

    assert!(body_text(response).await.is_empty());
}

#[tokio::test]
async fn test_cors_headers_on_regular_responses() {
    let app = build_router(true);

    let mut request = graphql_post("/graphql", "{ hello }");
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://example.com".parse().unwrap());
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let headers = response.headers().clone();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_METHODS],
        "POST, GET, OPTIONS, PUT, DELETE"
    );
    assert_eq!(
        headers[header::ACCESS_CONTROL_ALLOW_HEADERS],
        "Accept, Authorization, Content-Type, Content-Length, Accept-Encoding"
    );
    assert_eq!(body_json(response).await, json!({ "data": { "hello": "world" } }));
}

#[tokio::test]
async fn test_cors_disabled_adds_no_headers() {
    let app = build_router(false);

    let mut request = graphql_post("/graphql", "{ hello }");
    request
        .headers_mut()
        .insert(header::ORIGIN, "http://example.com".parse().unwrap());
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    for name in [
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        header::ACCESS_CONTROL_ALLOW_METHODS,
        header::ACCESS_CONTROL_ALLOW_HEADERS,
    ] {
        assert!(response.headers().get(&name).is_none(), "unexpected {}", name);
    }
}
