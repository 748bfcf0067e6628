//! Contact page: reachability details from the settings store plus a
//! message form.

use async_trait::async_trait;
use maud::{Markup, html};
use sqlx::SqlitePool;

use crate::consent::ConsentCategory;
use crate::error::SiteError;
use crate::render::{Page, RenderContext};
use crate::settings::{self, Fallbacks, SettingValue};
use crate::state::AppState;

/// Settings keys this page interpolates.
const REQUIRED_KEYS: &[&str] = &[
    "site_name",
    "contact_address",
    "contact_phone",
    "contact_email",
    "opening_hours",
];

fn fallbacks() -> Fallbacks {
    Fallbacks::from([
        (
            "site_name",
            SettingValue::Text("DS Allroundservices".to_string()),
        ),
        (
            "contact_address",
            SettingValue::Text("Darmstädter Straße 0 63741 Aschaffenburg".to_string()),
        ),
        (
            "contact_phone",
            SettingValue::Text("+49 6021 000000".to_string()),
        ),
        (
            "contact_email",
            SettingValue::Text("info@ds-allroundservices.de".to_string()),
        ),
        (
            "opening_hours",
            SettingValue::Text("Mo–Fr 8:00–17:00 Uhr".to_string()),
        ),
    ])
}

/// The contact page.
pub struct ContactPage {
    db: SqlitePool,
}

impl ContactPage {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }
}

#[async_trait]
impl Page for ContactPage {
    fn title(&self) -> String {
        "Kontakt".to_string()
    }

    /// Display font from the external host, only with functional consent.
    fn metadata(&self, ctx: &RenderContext<'_>) -> Markup {
        html! {
            @if ctx.consent.allows(ConsentCategory::Functional) {
                link rel="preconnect" href="https://fonts.gstatic.com" crossorigin;
                link rel="stylesheet" href="https://fonts.googleapis.com/css2?family=Inter:wght@400;600;700&display=swap";
            }
        }
    }

    async fn body(&self, ctx: &RenderContext<'_>) -> Result<Markup, SiteError> {
        let settings = settings::load(&self.db, REQUIRED_KEYS, &fallbacks()).await;

        Ok(html! {
            section class="hero" {
                h1 { "Kontakt" }
                p {
                    (settings.get("site_name"))
                    " – wir sind für Sie da. Rufen Sie an oder schreiben Sie uns."
                }
            }

            section {
                h2 { "So erreichen Sie uns" }
                dl class="details" {
                    dt { "Anschrift" }
                    dd { (settings.get("contact_address")) }
                    dt { "Telefon" }
                    dd { (settings.get("contact_phone")) }
                    dt { "E-Mail" }
                    dd {
                        a href={ "mailto:" (settings.get("contact_email")) } {
                            (settings.get("contact_email"))
                        }
                    }
                    dt { "Öffnungszeiten" }
                    dd { (settings.get("opening_hours")) }
                }
            }

            section {
                h2 { "Nachricht senden" }
                form class="stacked" method="post" action="/kontakt/nachricht" {
                    input type="hidden" name="form_token" value=(ctx.form_token);
                    label for="name" { "Name" }
                    input type="text" id="name" name="name" required;
                    label for="email" { "E-Mail" }
                    input type="email" id="email" name="email" required;
                    label for="message" { "Nachricht" }
                    textarea id="message" name="message" rows="6" required {}
                    button type="submit" { "Absenden" }
                }
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consent::ConsentState;
    use crate::render::render_page;
    use crate::state::test_state;

    fn ctx(state: &AppState, consent: ConsentState) -> RenderContext<'_> {
        RenderContext {
            state,
            consent,
            form_token: "f".repeat(64),
        }
    }

    #[tokio::test]
    async fn body_carries_the_form_token() {
        let state = test_state();
        let page = ContactPage::new(&state);
        let html = render_page(&page, &ctx(&state, ConsentState::default()))
            .await
            .unwrap()
            .into_string();
        assert!(html.contains(&"f".repeat(64)));
        assert!(html.contains("name=\"form_token\""));
    }

    #[tokio::test]
    async fn font_link_requires_functional_consent() {
        let state = test_state();
        let page = ContactPage::new(&state);

        let without = page
            .metadata(&ctx(&state, ConsentState::default()))
            .into_string();
        assert!(!without.contains("fonts.googleapis.com"));

        let with = page.metadata(&ctx(&state, ConsentState::all())).into_string();
        assert!(with.contains("fonts.googleapis.com"));
    }

    #[tokio::test]
    async fn fallback_details_render_when_store_unreachable() {
        let state = test_state();
        let page = ContactPage::new(&state);
        let html = render_page(&page, &ctx(&state, ConsentState::default()))
            .await
            .unwrap()
            .into_string();
        assert!(html.contains("mailto:info@ds-allroundservices.de"));
        assert!(html.contains("Mo–Fr 8:00–17:00 Uhr"));
    }
}
