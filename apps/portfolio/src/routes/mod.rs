pub mod health;
pub mod page;
pub mod resume;

use axum::{routing::get, Router};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(page::handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/resume", get(resume::handle_get_resume))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use axum::response::Response;
    use serde_json::{json, Value};
    use tempfile::NamedTempFile;
    use tower::ServiceExt;

    use super::*;
    use crate::render::sections::NO_RESULTS_MESSAGE;
    use crate::render::RenderMode;
    use crate::resume::loader::ResumeLoader;
    use crate::resume::model::MISSING_NAME;

    fn sample_resume() -> Value {
        json!({
            "name": "Jane Doe",
            "contact": { "email": "jane@example.com", "linkedin": "https://linkedin.com/in/jane" },
            "experience": [{
                "title": "Engineer",
                "company": "Acme",
                "location": "Remote",
                "dates": "2021 - Present",
                "achievements": ["Shipped things"]
            }],
            "projects": [
                { "name": "Shop", "tech": ["Go"], "tags": ["backend"] },
                { "name": "Blog", "tech": ["React"], "tags": ["frontend"] }
            ],
            "skills": { "programming_languages": ["Go", "TypeScript"] },
            "unknown_field": [1, 2, 3]
        })
    }

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    fn app_for(path: &std::path::Path, render_mode: RenderMode) -> Router {
        build_router(AppState {
            loader: Arc::new(ResumeLoader::new(path)),
            render_mode,
        })
    }

    async fn send_get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_api_serves_document_with_cache_header() {
        let data = sample_resume();
        let file = write_temp(&data.to_string());

        let response = send_get(app_for(file.path(), RenderMode::Interactive), "/api/resume").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "s-maxage=60, stale-while-revalidate=300"
        );

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body, data);
    }

    #[tokio::test]
    async fn test_api_unparsable_source_is_500() {
        let file = write_temp("{ not json");

        let response = send_get(app_for(file.path(), RenderMode::Interactive), "/api/resume").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers().get(header::CACHE_CONTROL).is_none());

        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert!(body.get("error").and_then(Value::as_str).is_some());
    }

    #[tokio::test]
    async fn test_api_missing_source_is_500() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(&dir.path().join("resume.json"), RenderMode::Interactive);

        let response = send_get(app, "/api/resume").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_page_with_missing_source_renders_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(&dir.path().join("resume.json"), RenderMode::Interactive);

        let response = send_get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let html = body_text(response).await;
        assert!(html.contains(&format!("<h1>{MISSING_NAME}</h1>")));
        assert!(!html.contains(r#"id="education""#));
        assert!(!html.contains(r#"id="experience""#));
        assert!(!html.contains(r#"id="projects""#));
        assert!(!html.contains(r#"id="skills""#));
    }

    #[tokio::test]
    async fn test_page_renders_all_sections() {
        let file = write_temp(&sample_resume().to_string());

        let response = send_get(app_for(file.path(), RenderMode::Interactive), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let html = body_text(response).await;
        assert!(html.contains("<h1>Jane Doe</h1>"));
        assert!(html.contains("mailto:jane@example.com"));
        assert!(html.contains(r#"<form class="project-filter""#));
        assert!(html.contains("<h3>Shop</h3>"));
        assert!(html.contains("<h3>Blog</h3>"));
        assert!(html.contains(r#"id="experience""#));
        assert!(!html.contains(r#"id="education""#));
        assert!(html.contains("<h3>Programming Languages</h3>"));
    }

    #[tokio::test]
    async fn test_page_applies_query_and_tag() {
        let file = write_temp(&sample_resume().to_string());

        let html = body_text(send_get(app_for(file.path(), RenderMode::Interactive), "/?q=GO").await).await;
        assert!(html.contains("<h3>Shop</h3>"));
        assert!(!html.contains("<h3>Blog</h3>"));

        let html = body_text(send_get(app_for(file.path(), RenderMode::Interactive), "/?tag=frontend").await).await;
        assert!(!html.contains("<h3>Shop</h3>"));
        assert!(html.contains("<h3>Blog</h3>"));

        let html = body_text(send_get(app_for(file.path(), RenderMode::Interactive), "/?q=x&tag=").await).await;
        assert!(html.contains(NO_RESULTS_MESSAGE));
    }

    #[tokio::test]
    async fn test_static_page_ignores_filter() {
        let file = write_temp(&sample_resume().to_string());

        let html = body_text(send_get(app_for(file.path(), RenderMode::Static), "/?q=x").await).await;
        assert!(!html.contains("<form"));
        assert!(html.contains("<h3>Shop</h3>"));
        assert!(html.contains("<h3>Blog</h3>"));
        assert!(html.contains("two-column"));
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let app = app_for(&dir.path().join("resume.json"), RenderMode::Interactive);

        let response = send_get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body: Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "portfolio");
    }
}
