//! Settings resolution: read the key/value store and coerce each entry to
//! its declared type.
//!
//! The store is a single flat table:
//!
//! ```sql
//! CREATE TABLE settings (
//!     setting_key   TEXT PRIMARY KEY,
//!     setting_value TEXT NOT NULL,
//!     setting_type  TEXT NOT NULL
//! );
//! ```
//!
//! Values are persisted as strings and carry a type tag from the store
//! schema; [`coerce`] maps each `(value, tag)` pair to a typed
//! [`SettingValue`]. Resolution never fails the page: a dead store yields
//! the caller's full fallback record, a malformed value falls back per key,
//! and a missing required key is backfilled with an empty placeholder so
//! markup interpolation never sees an absent entry.

use std::borrow::Cow;
use std::collections::BTreeMap;

use sqlx::SqlitePool;

/// One row of the `settings` table as persisted.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct SettingRow {
    /// Unique key, e.g. `contact_email`.
    pub setting_key: String,
    /// Value as stored (always a string).
    pub setting_value: String,
    /// Declared type tag from the store schema, e.g. `string` or `json`.
    pub setting_type: String,
}

/// A stored value coerced to its declared runtime type.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Json(serde_json::Value),
    Null,
}

impl SettingValue {
    /// Stable, locale-independent text form of the value, used when a
    /// coerced value is interpolated into markup.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            Self::Text(s) => Cow::Borrowed(s),
            Self::Integer(i) => Cow::Owned(i.to_string()),
            Self::Float(f) => Cow::Owned(f.to_string()),
            Self::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            Self::Json(v) => Cow::Owned(serde_json::to_string(v).unwrap_or_default()),
            Self::Null => Cow::Borrowed(""),
        }
    }
}

/// Why a stored value could not be coerced to its declared type.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CoerceError {
    #[error("not an integer: {0:?}")]
    Integer(String),

    #[error("not a number: {0:?}")]
    Float(String),

    #[error("not a boolean: {0:?}")]
    Bool(String),

    #[error("invalid JSON: {0}")]
    Json(String),

    #[error("expected a JSON array")]
    NotArray,

    #[error("expected a JSON object")]
    NotObject,
}

/// Coerce a stored string value according to its declared type tag.
///
/// Tags are matched case-insensitively. An unrecognized tag is not an
/// error: the raw string passes through unchanged, so new tags in the
/// store degrade to plain text instead of breaking pages.
pub fn coerce(raw: &str, declared: &str) -> Result<SettingValue, CoerceError> {
    match declared.to_ascii_lowercase().as_str() {
        "string" => Ok(SettingValue::Text(raw.to_string())),
        "int" | "integer" => raw
            .trim()
            .parse::<i64>()
            .map(SettingValue::Integer)
            .map_err(|_| CoerceError::Integer(raw.to_string())),
        "float" | "double" => raw
            .trim()
            .parse::<f64>()
            .map(SettingValue::Float)
            .map_err(|_| CoerceError::Float(raw.to_string())),
        "bool" | "boolean" => parse_bool(raw)
            .map(SettingValue::Bool)
            .ok_or_else(|| CoerceError::Bool(raw.to_string())),
        "json" => serde_json::from_str(raw)
            .map(SettingValue::Json)
            .map_err(|err| CoerceError::Json(err.to_string())),
        "array" => match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) if value.is_array() => Ok(SettingValue::Json(value)),
            Ok(_) => Err(CoerceError::NotArray),
            Err(err) => Err(CoerceError::Json(err.to_string())),
        },
        "object" => match serde_json::from_str::<serde_json::Value>(raw) {
            Ok(value) if value.is_object() => Ok(SettingValue::Json(value)),
            Ok(_) => Err(CoerceError::NotObject),
            Err(err) => Err(CoerceError::Json(err.to_string())),
        },
        "null" => Ok(SettingValue::Null),
        _ => Ok(SettingValue::Text(raw.to_string())),
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Fallback record supplied by a page: the values served when the store
/// cannot be read at all, and the per-key substitutes for malformed values.
pub type Fallbacks = BTreeMap<&'static str, SettingValue>;

/// Coerced settings for one render. Response-scoped: built fresh per page,
/// never cached.
#[derive(Debug, Clone, Default)]
pub struct ResolvedSettings {
    values: BTreeMap<String, SettingValue>,
}

static MISSING: SettingValue = SettingValue::Null;

impl ResolvedSettings {
    fn from_fallbacks(fallbacks: &Fallbacks) -> Self {
        Self {
            values: fallbacks
                .iter()
                .map(|(key, value)| ((*key).to_string(), value.clone()))
                .collect(),
        }
    }

    /// Look up a resolved value. Every key a page declared as required is
    /// present after [`load`]; an unknown key reads as null.
    pub fn get(&self, key: &str) -> &SettingValue {
        self.values.get(key).unwrap_or(&MISSING)
    }

    /// Text form of a resolved value, see [`SettingValue::to_text`].
    pub fn text(&self, key: &str) -> Cow<'_, str> {
        self.get(key).to_text()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.values.len()
    }
}

const SETTINGS_QUERY: &str = "SELECT setting_key, setting_value, setting_type FROM settings";

/// Load and resolve the settings table.
///
/// Infallible by contract: the page must still render when the store is
/// down. Failure handling, in order:
///
/// - store unreachable or query fails: the whole load is abandoned and the
///   caller's `fallbacks` are returned verbatim
/// - a value cannot be coerced to its declared type: the fallback for that
///   key is used if the page supplied one, otherwise the key is treated as
///   missing
/// - a required key is absent after the full read: an empty placeholder is
///   inserted so interpolation never sees a missing entry
///
/// Each degradation logs one diagnostic. The store is never mutated and
/// nothing is retried or cached.
pub async fn load(db: &SqlitePool, required: &[&str], fallbacks: &Fallbacks) -> ResolvedSettings {
    let rows = match sqlx::query_as::<_, SettingRow>(SETTINGS_QUERY).fetch_all(db).await {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!(error = %err, "settings store unavailable, serving fallback values");
            return ResolvedSettings::from_fallbacks(fallbacks);
        }
    };

    let mut values = BTreeMap::new();
    for row in rows {
        match coerce(&row.setting_value, &row.setting_type) {
            Ok(value) => {
                values.insert(row.setting_key, value);
            }
            Err(err) => {
                tracing::warn!(
                    key = %row.setting_key,
                    declared = %row.setting_type,
                    error = %err,
                    "malformed setting value"
                );
                if let Some(fallback) = fallbacks.get(row.setting_key.as_str()) {
                    values.insert(row.setting_key, fallback.clone());
                }
            }
        }
    }

    for key in required {
        if !values.contains_key(*key) {
            tracing::warn!(key = %key, "required setting missing, inserting empty placeholder");
            values.insert((*key).to_string(), SettingValue::Text(String::new()));
        }
    }

    ResolvedSettings { values }
}
