//! HTML escaping for settings values interpolated into markup.
//!
//! Literal markup in this crate is written through maud and is trusted;
//! settings values come from the store and are not. Every such value is
//! escaped exactly once, at the point of interpolation, via the
//! [`maud::Render`] impl on [`SettingValue`]: templates write `(value)`
//! and get the policy by construction. Callers must not pre-escape.

use maud::{Markup, PreEscaped, Render};

use crate::settings::SettingValue;

/// Encode the five HTML-significant characters so a value can neither
/// inject markup nor break out of a quoted attribute.
pub fn escape(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

impl Render for SettingValue {
    fn render(&self) -> Markup {
        PreEscaped(escape(self.to_text().as_ref()))
    }
}
