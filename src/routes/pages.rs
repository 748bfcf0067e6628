//! Page handlers: the entry point for every rendered page.
//!
//! Each handler follows the same sequence: ensure the session form token
//! (one-time per session), read the consent state, construct the page,
//! drive the render pipeline, and reply with the assembled document. Any
//! failure surfaces as [`SiteError`] and renders the minimal generic error
//! page instead, never a half-built one.

use axum::extract::State;
use axum::http::{HeaderValue, header};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::cookie::{CookieJar, PrivateCookieJar};
use maud::Markup;

use crate::consent::ConsentState;
use crate::error::SiteError;
use crate::pages::{ContactPage, ImpressumPage, LoginPage};
use crate::render::{self, Page, RenderContext, layout};
use crate::session;
use crate::state::AppState;

/// `GET /kontakt`
pub async fn contact(
    State(state): State<AppState>,
    cookies: CookieJar,
    jar: PrivateCookieJar,
) -> Result<Response, SiteError> {
    let page = ContactPage::new(&state);
    respond(&state, cookies, jar, &page).await
}

/// `GET /impressum`
pub async fn impressum(
    State(state): State<AppState>,
    cookies: CookieJar,
    jar: PrivateCookieJar,
) -> Result<Response, SiteError> {
    let page = ImpressumPage::new(&state);
    respond(&state, cookies, jar, &page).await
}

/// `GET /login`
pub async fn login(
    State(state): State<AppState>,
    cookies: CookieJar,
    jar: PrivateCookieJar,
) -> Result<Response, SiteError> {
    let page = LoginPage::new();
    respond(&state, cookies, jar, &page).await
}

/// Shared entry-point sequence for all pages.
async fn respond(
    state: &AppState,
    cookies: CookieJar,
    jar: PrivateCookieJar,
    page: &dyn Page,
) -> Result<Response, SiteError> {
    let (jar, form_token) = session::ensure_form_token(jar);
    let consent = ConsentState::from_jar(&cookies);

    let ctx = RenderContext {
        state,
        consent,
        form_token,
    };
    let markup = render::render_page(page, &ctx).await?;

    Ok((jar, html_response(markup)).into_response())
}

/// Build an HTML response with security headers.
fn html_response(markup: Markup) -> Response {
    let mut response = Html(markup.into_string()).into_response();
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static(layout::CSP_HEADER),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use maud::html;

    #[test]
    fn html_response_sets_content_type_and_security_headers() {
        let response = html_response(html! { p { "hi" } });
        let headers = response.headers();
        assert!(
            headers
                .get(header::CONTENT_TYPE)
                .and_then(|v| v.to_str().ok())
                .unwrap_or_default()
                .starts_with("text/html")
        );
        assert!(headers.contains_key(header::CONTENT_SECURITY_POLICY));
        assert_eq!(headers.get(header::X_FRAME_OPTIONS).unwrap(), "DENY");
    }
}
