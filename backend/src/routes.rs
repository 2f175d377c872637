use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::set_header::SetResponseHeader;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;

const STATIC_CACHE_CONTROL: &str = "public, max-age=3600";

async fn health_check() -> &'static str {
    "OK"
}

/// `/api/health` plus the compiled site. Paths that match no file get
/// `index.html` so client-side anchors keep working.
pub fn router(config: &ServerConfig) -> Router {
    let site = ServeDir::new(&config.site_dir).fallback(ServeFile::new(config.index_file()));
    let site = SetResponseHeader::overriding(
        site,
        header::CACHE_CONTROL,
        HeaderValue::from_static(STATIC_CACHE_CONTROL),
    );

    Router::new()
        .route("/api/health", get(health_check))
        .fallback_service(site)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(
            CorsLayer::new()
                .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
                .allow_origin(AllowOrigin::exact(config.frontend_origin.clone()))
                .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::path::PathBuf;
    use tower::ServiceExt;

    struct SiteDir(PathBuf);

    impl SiteDir {
        fn new() -> Self {
            let dir = std::env::temp_dir().join(format!("flowix-site-{}", uuid::Uuid::new_v4()));
            std::fs::create_dir_all(dir.join("assets")).unwrap();
            std::fs::write(dir.join("index.html"), "<html>landing</html>").unwrap();
            std::fs::write(dir.join("assets/app.css"), "body{}").unwrap();
            Self(dir)
        }
    }

    impl Drop for SiteDir {
        fn drop(&mut self) {
            let _ = std::fs::remove_dir_all(&self.0);
        }
    }

    fn app(site: &SiteDir) -> Router {
        let dir = site.0.display().to_string();
        let config = ServerConfig::from_lookup(|key| match key {
            "SITE_DIR" => Some(dir.clone()),
            _ => None,
        })
        .unwrap();
        router(&config)
    }

    async fn fetch(app: Router, uri: &str) -> (StatusCode, Option<String>, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let cache = response
            .headers()
            .get(header::CACHE_CONTROL)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, cache, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn health_check_responds_ok() {
        let site = SiteDir::new();
        let (status, _, body) = fetch(app(&site), "/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "OK");
    }

    #[tokio::test]
    async fn serves_site_files_with_cache_header() {
        let site = SiteDir::new();
        let (status, cache, body) = fetch(app(&site), "/assets/app.css").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(cache.as_deref(), Some(STATIC_CACHE_CONTROL));
        assert_eq!(body, "body{}");
    }

    #[tokio::test]
    async fn root_serves_index() {
        let site = SiteDir::new();
        let (status, _, body) = fetch(app(&site), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>landing</html>");
    }

    #[tokio::test]
    async fn unknown_paths_fall_back_to_index() {
        let site = SiteDir::new();
        let (status, _, body) = fetch(app(&site), "/features").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<html>landing</html>");
    }
}
