//! Legal notice (Impressum) page.
//!
//! German law requires the provider identification to stay reachable even
//! when the backing store is down, so this page carries a full fallback
//! record for every field it interpolates.

use async_trait::async_trait;
use maud::{Markup, html};
use sqlx::SqlitePool;

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
    "company_vat_id",
];

/// Fixed provider record served when the store cannot be read.
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
            "company_vat_id",
            SettingValue::Text("DE000000000".to_string()),
        ),
    ])
}

/// The legal notice page.
pub struct ImpressumPage {
    db: SqlitePool,
}

impl ImpressumPage {
    pub fn new(state: &AppState) -> Self {
        Self {
            db: state.db.clone(),
        }
    }
}

#[async_trait]
impl Page for ImpressumPage {
    fn title(&self) -> String {
        "Impressum".to_string()
    }

    fn metadata(&self, _ctx: &RenderContext<'_>) -> Markup {
        html! {}
    }

    async fn body(&self, _ctx: &RenderContext<'_>) -> Result<Markup, SiteError> {
        let settings = settings::load(&self.db, REQUIRED_KEYS, &fallbacks()).await;

        Ok(html! {
            section class="hero" {
                h1 { "Impressum" }
            }

            section class="legal-block" {
                h2 { "Angaben gemäß § 5 TMG" }
                p { (settings.get("site_name")) }
                p { (settings.get("contact_address")) }
            }

            section class="legal-block" {
                h2 { "Kontakt" }
                dl class="details" {
                    dt { "Telefon" }
                    dd { (settings.get("contact_phone")) }
                    dt { "E-Mail" }
                    dd {
                        a href={ "mailto:" (settings.get("contact_email")) } {
                            (settings.get("contact_email"))
                        }
                    }
                }
            }

            section class="legal-block" {
                h2 { "Umsatzsteuer-ID" }
                p {
                    "Umsatzsteuer-Identifikationsnummer gemäß § 27 a Umsatzsteuergesetz: "
                    (settings.get("company_vat_id"))
                }
            }

            p class="legal-note" {
                "Trotz sorgfältiger inhaltlicher Kontrolle übernehmen wir keine "
                "Haftung für die Inhalte externer Links. Für den Inhalt der "
                "verlinkten Seiten sind ausschließlich deren Betreiber verantwortlich."
            }
        })
    }
}
