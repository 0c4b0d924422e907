//! HTTP handlers for static asset serving.

use axum::{
    body::Body,
    http::{Response, StatusCode, Uri},
    response::IntoResponse,
};
use tracing::instrument;

use crate::static_assets;

/// Serve the embedded browser form.
///
/// Mounted as the router fallback: the root path serves `index.html`, any
/// other path is looked up among the embedded assets, and unknown paths are
/// a plain 404 (the form is a single page, there is no client-side routing
/// to fall back for).
#[instrument]
pub async fn serve_embedded_asset(uri: Uri) -> impl IntoResponse {
    let mut path = uri.path().trim_start_matches('/');

    if path.is_empty() || path.ends_with('/') {
        path = "index.html";
    }

    if let Some(content) = static_assets::Assets::get(path) {
        let mime = mime_guess::from_path(path).first_or_octet_stream();

        return Response::builder()
            .header(axum::http::header::CONTENT_TYPE, mime.as_ref())
            .header(axum::http::header::CACHE_CONTROL, "no-cache")
            .body(Body::from(content.data.into_owned()))
            .unwrap();
    }

    Response::builder().status(StatusCode::NOT_FOUND).body(Body::empty()).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, http::StatusCode};
    use axum_test::TestServer;

    fn create_test_router() -> Router {
        Router::new().fallback(serve_embedded_asset)
    }

    #[tokio::test]
    async fn root_serves_the_form_page() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/").await;
        response.assert_status_ok();
        assert!(response.headers()["content-type"].to_str().unwrap().contains("text/html"));
        assert!(response.text().contains("apiQueryForm"));
    }

    #[tokio::test]
    async fn named_assets_get_their_mime_type() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/script.js").await;
        response.assert_status_ok();
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.contains("javascript"), "unexpected mime: {content_type}");
    }

    #[tokio::test]
    async fn unknown_paths_are_404() {
        let server = TestServer::new(create_test_router()).unwrap();

        let response = server.get("/no-such-file.png").await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    }
}
