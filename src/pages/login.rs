//! Login page: the credential form for the internal area.
//!
//! Only the form is rendered here; credential verification happens in the
//! submission handler owned by the hosting infrastructure.

use async_trait::async_trait;
use maud::{Markup, html};

use crate::error::SiteError;
use crate::render::{Page, RenderContext};

/// The login page.
pub struct LoginPage;

impl LoginPage {
    pub fn new() -> Self {
        Self
    }
}

impl Default for LoginPage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Page for LoginPage {
    fn title(&self) -> String {
        "Login".to_string()
    }

    /// The internal area has no business showing up in search results.
    fn metadata(&self, _ctx: &RenderContext<'_>) -> Markup {
        html! {
            meta name="robots" content="noindex";
        }
    }

    async fn body(&self, ctx: &RenderContext<'_>) -> Result<Markup, SiteError> {
        Ok(html! {
            section class="hero" {
                h1 { "Login" }
                p { "Anmeldung für den internen Bereich." }
            }

            section {
                form class="stacked" method="post" action="/login" {
                    input type="hidden" name="form_token" value=(ctx.form_token);
                    label for="username" { "Benutzername" }
                    input type="text" id="username" name="username" autocomplete="username" required;
                    label for="password" { "Passwort" }
                    input type="password" id="password" name="password" autocomplete="current-password" required;
                    button type="submit" { "Anmelden" }
                }
            }
        })
    }
}
