use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderName, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use filecmp_protocol::endpoints;

use crate::config::ServerConfig;
use crate::handler;

const CORS_METHODS: [Method; 6] = [
    Method::GET,
    Method::OPTIONS,
    Method::PATCH,
    Method::DELETE,
    Method::POST,
    Method::PUT,
];

fn cors_headers() -> Vec<HeaderName> {
    vec![
        HeaderName::from_static("x-csrf-token"),
        HeaderName::from_static("x-requested-with"),
        header::ACCEPT,
        HeaderName::from_static("accept-version"),
        header::CONTENT_LENGTH,
        HeaderName::from_static("content-md5"),
        header::CONTENT_TYPE,
        header::DATE,
        HeaderName::from_static("x-api-version"),
    ]
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let origin = match config.origin_header_values() {
        Ok(origins) if !origins.is_empty() => AllowOrigin::list(origins),
        Ok(_) => AllowOrigin::mirror_request(),
        Err(e) => {
            tracing::warn!("{e}; mirroring request origins instead");
            AllowOrigin::mirror_request()
        }
    };
    CorsLayer::new()
        .allow_credentials(true)
        .allow_origin(origin)
        .allow_methods(CORS_METHODS)
        .allow_headers(cors_headers())
}

/// Build the axum router with all filecmp endpoints.
pub fn build_router(config: &ServerConfig) -> Router {
    Router::new()
        .route(
            endpoints::COMPARE,
            post(handler::compare_handler).fallback(handler::method_not_allowed),
        )
        .route(endpoints::HEALTH, get(handler::health_handler))
        .route(endpoints::INFO, get(handler::info_handler))
        .layer(DefaultBodyLimit::max(config.max_upload_size))
        .layer(cors_layer(config))
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use serde_json::json;
    use tower::util::ServiceExt;

    use crate::test_support::{multipart_request, response_json, Part};

    fn request(method: Method) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(endpoints::COMPARE)
            .body(Body::empty())
            .unwrap()
    }

    #[tokio::test]
    async fn get_is_method_not_allowed() {
        let app = build_router(&ServerConfig::default());
        let (status, body) = response_json(app, request(Method::GET)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }

    #[tokio::test]
    async fn other_verbs_are_method_not_allowed() {
        for method in [Method::PUT, Method::DELETE, Method::PATCH] {
            let app = build_router(&ServerConfig::default());
            let (status, _) = response_json(app, request(method)).await;
            assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        }
    }

    #[tokio::test]
    async fn options_without_origin_is_ok() {
        let app = build_router(&ServerConfig::default());
        let response = app.oneshot(request(Method::OPTIONS)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn cors_preflight_is_answered() {
        let app = build_router(&ServerConfig::default());
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri(endpoints::COMPARE)
            .header(header::ORIGIN, "https://app.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://app.example");
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_CREDENTIALS], "true");
        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
        assert!(methods.contains("POST"));
    }

    #[tokio::test]
    async fn configured_origins_restrict_cors() {
        let config = ServerConfig {
            allowed_origins: vec!["https://allowed.example".into()],
            ..Default::default()
        };
        let app = build_router(&config);
        let mut req = multipart_request(&[Part::file("file1", "a", b"a"), Part::file("file2", "b", b"a")]);
        req.headers_mut().insert(header::ORIGIN, "https://other.example".parse().unwrap());
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
    }

    #[tokio::test]
    async fn wildcard_origin_falls_back_to_mirroring() {
        let config = ServerConfig { allowed_origins: vec!["*".into()], ..Default::default() };
        let app = build_router(&config);
        let req = Request::builder()
            .method(Method::OPTIONS)
            .uri(endpoints::COMPARE)
            .header(header::ORIGIN, "https://app.example")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .body(Body::empty())
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN], "https://app.example");
    }

    #[tokio::test]
    async fn non_multipart_body_is_server_error() {
        let app = build_router(&ServerConfig::default());
        let req = Request::builder()
            .method(Method::POST)
            .uri(endpoints::COMPARE)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{}"))
            .unwrap();
        let (status, body) = response_json(app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to compare files");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn oversized_upload_is_server_error() {
        let config = ServerConfig { max_upload_size: 64, ..Default::default() };
        let app = build_router(&config);
        let big = vec![b'x'; 1024];
        let req = multipart_request(&[Part::file("file1", "a", &big), Part::file("file2", "b", b"x")]);
        let (status, body) = response_json(app, req).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to compare files");
    }
}
