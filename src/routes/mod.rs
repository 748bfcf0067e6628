//! Route definitions for the site.
//!
//! ## Routes
//!
//! - `GET /` - Redirect to the contact page
//! - `GET /kontakt` - Contact page
//! - `GET /impressum` - Legal notice
//! - `GET /login` - Login form
//! - `GET /health` - Health check (JSON)
//!
//! Anything else falls through to a minimal 404 page.

mod health;
mod pages;

use axum::Router;
use axum::response::Redirect;
use axum::routing::get;

use crate::error::SiteError;
use crate::state::AppState;

/// Build the complete site router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::permanent("/kontakt") }))
        .route("/kontakt", get(pages::contact))
        .route("/impressum", get(pages::impressum))
        .route("/login", get(pages::login))
        .route("/health", get(health::health_check))
        .fallback(not_found)
        .with_state(state)
}

/// Minimal 404 for unknown paths, rendered through the shared error page.
async fn not_found() -> SiteError {
    SiteError::NotFound
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::router;
    use crate::state::test_state;

    async fn get(path: &str) -> (StatusCode, String, axum::http::HeaderMap) {
        let app = router(test_state());
        let response = app
            .oneshot(Request::builder().uri(path).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let headers = response.headers().clone();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap(), headers)
    }

    #[tokio::test]
    async fn impressum_renders_html_with_fallback_record() {
        let (status, body, headers) = get("/impressum").await;
        assert_eq!(status, StatusCode::OK);
        let content_type = headers
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default();
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("DS Allroundservices"));
        assert!(body.contains("Darmstädter Straße 0 63741 Aschaffenburg"));
    }

    #[tokio::test]
    async fn contact_sets_the_session_token_cookie() {
        let (status, body, headers) = get("/kontakt").await;
        assert_eq!(status, StatusCode::OK);
        assert!(headers.contains_key("set-cookie"));
        assert!(body.contains("name=\"form_token\""));
    }

    #[tokio::test]
    async fn login_renders_the_form() {
        let (status, body, _) = get("/login").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("type=\"password\""));
    }

    #[tokio::test]
    async fn html_responses_carry_security_headers() {
        let (_, _, headers) = get("/impressum").await;
        assert!(headers.contains_key("content-security-policy"));
        assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
        assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    }

    #[tokio::test]
    async fn root_redirects_to_contact() {
        let (status, _, headers) = get("/").await;
        assert_eq!(status, StatusCode::PERMANENT_REDIRECT);
        assert_eq!(headers.get("location").unwrap(), "/kontakt");
    }

    #[tokio::test]
    async fn unknown_path_is_a_minimal_404() {
        let (status, body, _) = get("/does-not-exist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Seite nicht gefunden"));
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body, _) = get("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"status\":\"ok\""));
    }
}
