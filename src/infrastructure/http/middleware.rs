//! HTTP Middleware

use axum::{
    extract::Request,
    middleware::Next,
    response::Response,
};
use std::time::Instant;

/// 状态码为 4xx / 5xx 时记录日志
///
/// 业务错误（errno != 0）在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let latency_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms = latency_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            latency_ms = latency_ms,
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn bad_gateway_handler() -> StatusCode {
        StatusCode::BAD_GATEWAY
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/upstream", get(bad_gateway_handler))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    #[tokio::test]
    async fn test_ok_response_no_log() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/ok")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_unmatched_route_passes_through() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/api/missing")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_wrong_method_is_client_error() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/upstream")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_server_error_status_preserved() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/upstream")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }
}
