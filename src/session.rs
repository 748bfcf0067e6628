//! Per-session form token.
//!
//! Every session carries one opaque 64-hex-character token, embedded as a
//! hidden field in the contact and login forms so the submission handlers
//! can tie a post back to the session that rendered the form. The token is
//! created once per session from a cryptographically strong source and
//! reused on every later request; it lives in an encrypted cookie.

use axum_extra::extract::cookie::{Cookie, PrivateCookieJar, SameSite};

/// Name of the encrypted cookie holding the form token.
pub const FORM_TOKEN_COOKIE: &str = "form_token";

/// Token length in hex characters (32 random bytes).
const TOKEN_LEN: usize = 64;

/// Ensure the session has a form token, creating one if absent.
///
/// Idempotent: a well-formed existing token is reused as-is. Only when the
/// cookie is missing or damaged is a fresh token generated and stored.
/// Returns the (possibly updated) jar together with the token value.
pub fn ensure_form_token(jar: PrivateCookieJar) -> (PrivateCookieJar, String) {
    if let Some(cookie) = jar.get(FORM_TOKEN_COOKIE) {
        let existing = cookie.value().to_string();
        if is_well_formed(&existing) {
            return (jar, existing);
        }
        tracing::warn!("discarding malformed session form token");
    }

    let token = generate_token();
    let cookie = Cookie::build((FORM_TOKEN_COOKIE, token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build();
    (jar.add(cookie), token)
}

/// Generate a fresh token: 32 random bytes, lowercase hex.
fn generate_token() -> String {
    let bytes: [u8; 32] = rand::random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn is_well_formed(value: &str) -> bool {
    value.len() == TOKEN_LEN
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
