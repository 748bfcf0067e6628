//! Error types for the site.
//!
//! Errors are rendered as minimal HTML error pages. The client always gets
//! a generic message; the underlying detail only goes to the log.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use maud::{DOCTYPE, html};

/// Site error type.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The requested path does not map to any page.
    #[error("page not found")]
    NotFound,

    /// Internal server error (page construction, rendering, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for SiteError {
    fn into_response(self) -> Response {
        let (status, title, message) = match &self {
            Self::NotFound => (
                StatusCode::NOT_FOUND,
                "Seite nicht gefunden",
                "Die angeforderte Seite existiert nicht.",
            ),
            Self::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Fehler",
                    "Es ist ein interner Fehler aufgetreten. Bitte versuchen Sie es später erneut.",
                )
            }
        };

        let markup = html! {
            (DOCTYPE)
            html lang="de" {
                head {
                    meta charset="utf-8";
                    meta name="viewport" content="width=device-width, initial-scale=1";
                    title { (title) }
                    meta name="robots" content="noindex";
                    style { (maud::PreEscaped(crate::render::layout::ERROR_CSS)) }
                }
                body {
                    main class="error-page" {
                        h1 { (title) }
                        p { (message) }
                        a href="/" { "Zur Startseite" }
                    }
                }
            }
        };

        (status, Html(markup.into_string())).into_response()
    }
}
