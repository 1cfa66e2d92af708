use axum::{
    http::{header, Method},
    routing::get,
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::server_config::ServerConfig;
use crate::handlers::health_handlers;

// Client-side routes. Each one answers with the SPA document.
pub const PAGE_ROUTES: [&str; 5] = ["/", "/about", "/contact", "/gallery", "/quiz"];

pub fn build_router(config: &ServerConfig) -> Router {
    let index = config.index_file();

    // Bundle files (wasm, js, media) first, then the SPA document as a 404
    // so the client can render its not-found page.
    let bundle = ServeDir::new(&config.frontend_dist)
        .not_found_service(ServeFile::new(&index));

    let mut router = Router::new().route("/api/health", get(health_handlers::health_check));
    for path in PAGE_ROUTES {
        router = router.route_service(path, ServeFile::new(&index));
    }

    let router = router.fallback_service(bundle).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO)),
    );

    // `trunk serve` runs on its own port during development
    if config.environment.is_development() {
        router.layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
                .allow_origin(Any)
                .allow_headers([header::CONTENT_TYPE]),
        )
    } else {
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::server_config::Environment;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use std::net::{IpAddr, Ipv4Addr};
    use std::path::PathBuf;
    use tower::ServiceExt;
    use uuid::Uuid;

    const INDEX_HTML: &str = "<!DOCTYPE html><html><body>coralguard</body></html>";

    struct TempBundle {
        dir: PathBuf,
    }

    impl TempBundle {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("coralguard-dist-{}", Uuid::new_v4()));
            std::fs::create_dir_all(dir.join("assets/3d")).unwrap();
            std::fs::write(dir.join("index.html"), INDEX_HTML).unwrap();
            std::fs::write(dir.join("coralguard-frontend.js"), "export default function init() {}").unwrap();
            std::fs::write(dir.join("assets/3d/model1.glb"), b"glTF").unwrap();
            Self { dir }
        }

        fn config(&self, environment: Environment) -> ServerConfig {
            ServerConfig {
                host: IpAddr::V4(Ipv4Addr::LOCALHOST),
                port: 3000,
                frontend_dist: self.dir.clone(),
                environment,
            }
        }
    }

    impl Drop for TempBundle {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.dir);
        }
    }

    async fn get(router: &Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8_lossy(&bytes).into_owned())
    }

    #[tokio::test]
    async fn health_reports_ok_and_version() {
        let bundle = TempBundle::new();
        let router = build_router(&bundle.config(Environment::Production));

        let (status, body) = get(&router, "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn page_routes_serve_the_spa_document() {
        let bundle = TempBundle::new();
        let router = build_router(&bundle.config(Environment::Production));

        for path in PAGE_ROUTES {
            let (status, body) = get(&router, path).await;
            assert_eq!(status, StatusCode::OK, "{path}");
            assert_eq!(body, INDEX_HTML, "{path}");
        }

        let (status, body) = get(&router, "/quiz?from=home").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, INDEX_HTML);
    }

    #[tokio::test]
    async fn bundle_files_are_served() {
        let bundle = TempBundle::new();
        let router = build_router(&bundle.config(Environment::Production));

        let (status, body) = get(&router, "/coralguard-frontend.js").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("init"));

        let (status, body) = get(&router, "/assets/3d/model1.glb").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "glTF");
    }

    #[tokio::test]
    async fn unknown_paths_get_the_spa_document_with_404() {
        let bundle = TempBundle::new();
        let router = build_router(&bundle.config(Environment::Production));

        for path in ["/reefs", "/assets/3d/model9.glb", "/api/unknown"] {
            let (status, body) = get(&router, path).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{path}");
            assert_eq!(body, INDEX_HTML, "{path}");
        }
    }

    #[tokio::test]
    async fn cors_only_in_development() {
        let bundle = TempBundle::new();
        let request = || {
            Request::builder()
                .uri("/api/health")
                .header(header::ORIGIN, "http://127.0.0.1:8080")
                .body(Body::empty())
                .unwrap()
        };

        let dev = build_router(&bundle.config(Environment::Development));
        let response = dev.oneshot(request()).await.unwrap();
        assert!(response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

        let prod = build_router(&bundle.config(Environment::Production));
        let response = prod.oneshot(request()).await.unwrap();
        assert!(!response.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }
}
