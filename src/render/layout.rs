//! Shared document chrome: head assembly, nav header, footer, inline CSS.
//!
//! The site ships a single inline stylesheet and no JavaScript, so a page
//! is always one self-contained HTML document.

use chrono::Datelike;
use maud::{DOCTYPE, Markup, PreEscaped, html};

/// Inline CSS shared by all pages.
///
/// Flat, understated design. Spacing and subtle background shifts for
/// hierarchy, one accent color for links and buttons.
pub const PAGE_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#1a1a1a;--fg2:#555;--fg3:#999;--accent:#0a5c36;--accent-hover:#07472a;--surface:#fff;--border:rgba(10,92,54,.15)}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column}
main{max-width:720px;width:100%;margin:0 auto;flex:1;padding:2rem 1rem}
a{color:var(--accent);text-decoration:none}
a:hover{text-decoration:underline}

.site-header{background:var(--surface);border-bottom:1px solid var(--border)}
.site-header nav{max-width:720px;margin:0 auto;display:flex;align-items:center;gap:1.5rem;padding:1rem}
.site-brand{font-weight:700;font-size:1.1rem;color:var(--fg);margin-right:auto}
.site-brand:hover{text-decoration:none;color:var(--accent)}
.site-header nav a{color:var(--fg2);font-size:.95rem}
.site-header nav a:hover{color:var(--accent);text-decoration:none}

.hero{margin-bottom:2rem}
.hero h1{font-size:1.75rem;font-weight:700;letter-spacing:-.02em}
.hero p{color:var(--fg2);margin-top:.5rem}

section+section{margin-top:2rem}
h2{font-size:1.2rem;font-weight:600;margin-bottom:.75rem}

dl.details{display:grid;grid-template-columns:max-content 1fr;gap:.4rem 1.5rem}
dl.details dt{font-weight:600;color:var(--fg2)}
dl.details dd{color:var(--fg)}

.legal-block{padding:1.25rem;border:1px solid var(--border);border-radius:8px;background:var(--surface)}
.legal-block+.legal-block{margin-top:1rem}
.legal-block h2{margin-bottom:.5rem}
.legal-note{color:var(--fg3);font-size:.9rem;margin-top:2rem}

form.stacked{display:flex;flex-direction:column;gap:.85rem;max-width:420px}
form.stacked label{font-weight:600;font-size:.9rem;color:var(--fg2)}
form.stacked input,form.stacked textarea{font:inherit;padding:.55rem .7rem;border:1px solid var(--border);border-radius:6px;background:var(--surface)}
form.stacked input:focus,form.stacked textarea:focus{outline:2px solid var(--accent);outline-offset:-1px;border-color:transparent}
form.stacked button{font:inherit;font-weight:600;color:#fff;background:var(--accent);border:none;border-radius:6px;padding:.6rem 1.1rem;cursor:pointer;align-self:flex-start}
form.stacked button:hover{background:var(--accent-hover)}

.site-footer{border-top:1px solid var(--border);background:var(--surface)}
.site-footer .inner{max-width:720px;margin:0 auto;padding:1rem;display:flex;gap:1.5rem;color:var(--fg3);font-size:.85rem}
.site-footer a{color:var(--fg3)}
"#;

/// CSS for the minimal error page, which deliberately shares nothing with
/// the regular chrome.
pub const ERROR_CSS: &str = r#"
body{font-family:-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;background:#fafafa;color:#1a1a1a;display:flex;align-items:center;justify-content:center;min-height:100vh;margin:0}
.error-page{text-align:center;padding:2rem}
.error-page h1{font-size:1.5rem;margin-bottom:.75rem}
.error-page p{color:#555;margin-bottom:1.5rem}
.error-page a{color:#0a5c36}
"#;

/// Content-Security-Policy for every HTML response. No script execution;
/// styles are inline; images and form posts stay on this origin, with
/// fonts allowed from the consent-gated font host.
pub const CSP_HEADER: &str = "default-src 'none'; style-src 'unsafe-inline' https://fonts.googleapis.com; font-src https://fonts.gstatic.com; img-src 'self' data:; form-action 'self'; frame-ancestors 'none'";

/// Assemble the full document around the page's parts, in fixed order:
/// title, head metadata, nav header, body, footer.
pub fn shell(title: &str, metadata: Markup, body: Markup, site_name: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang="de" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) " – " (site_name) }
                (metadata)
                style { (PreEscaped(PAGE_CSS)) }
            }
            body {
                (site_header(site_name))
                main { (body) }
                (site_footer(site_name))
            }
        }
    }
}

/// Shared nav header with the brand and the page links.
fn site_header(site_name: &str) -> Markup {
    html! {
        header class="site-header" {
            nav {
                a class="site-brand" href="/" { (site_name) }
                a href="/kontakt" { "Kontakt" }
                a href="/impressum" { "Impressum" }
                a href="/login" { "Login" }
            }
        }
    }
}

/// Shared footer with the copyright line and legal link.
fn site_footer(site_name: &str) -> Markup {
    let year = chrono::Utc::now().year();
    html! {
        footer class="site-footer" {
            div class="inner" {
                span { "© " (year) " " (site_name) }
                a href="/impressum" { "Impressum" }
            }
        }
    }
}
