//! Cookie-consent state, consulted before emitting third-party resources.
//!
//! The consent banner (owned by the hosting infrastructure) records the
//! visitor's choice in a plain `consent` cookie as a comma-separated list
//! of category names. Pages only ask [`ConsentState::allows`] before
//! referencing any external resource; no consent cookie means only the
//! necessary category is allowed.

use axum_extra::extract::cookie::CookieJar;

/// Name of the plain cookie written by the consent banner.
pub const CONSENT_COOKIE: &str = "consent";

/// Consent categories a third-party resource can fall under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentCategory {
    /// Always allowed; required for the site to function.
    Necessary,
    /// Comfort features such as externally hosted fonts.
    Functional,
    Analytics,
    Marketing,
}

/// The visitor's recorded consent choices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsentState {
    functional: bool,
    analytics: bool,
    marketing: bool,
}

impl ConsentState {
    /// Read the consent state from the request's cookies.
    pub fn from_jar(jar: &CookieJar) -> Self {
        jar.get(CONSENT_COOKIE)
            .map(|cookie| Self::parse(cookie.value()))
            .unwrap_or_default()
    }

    /// Parse a consent cookie value. Unknown category names are ignored.
    pub fn parse(value: &str) -> Self {
        let mut state = Self::default();
        for part in value.split(',') {
            match part.trim().to_ascii_lowercase().as_str() {
                "functional" => state.functional = true,
                "analytics" => state.analytics = true,
                "marketing" => state.marketing = true,
                _ => {}
            }
        }
        state
    }

    /// Whether resources in the given category may be emitted.
    pub fn allows(&self, category: ConsentCategory) -> bool {
        match category {
            ConsentCategory::Necessary => true,
            ConsentCategory::Functional => self.functional,
            ConsentCategory::Analytics => self.analytics,
            ConsentCategory::Marketing => self.marketing,
        }
    }

    /// A state with every category granted.
    #[cfg(test)]
    pub(crate) fn all() -> Self {
        Self {
            functional: true,
            analytics: true,
            marketing: true,
        }
    }
}
