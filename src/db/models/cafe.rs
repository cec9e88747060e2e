//! Cafe Model

use serde::{Deserialize, Serialize};

/// Cafe listing entity
///
/// `name` is unique across all records. Everything except `coffee_price` is
/// immutable after creation.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cafe {
    pub id: i64,
    pub name: String,
    /// Opaque URL string, not validated
    pub map_url: String,
    /// Opaque URL string, not validated
    pub img_url: String,
    pub location: String,
    /// Free-form capacity description, e.g. "20-30"
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// Free-form price text, e.g. "£2.50"
    pub coffee_price: Option<String>,
}

/// Create cafe payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CafeCreate {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Parse a boolean query parameter from its canonical tokens.
///
/// Accepts `true`/`false`/`1`/`0` (case-insensitive); an absent parameter
/// defaults to `false`. Anything else is rejected, so the literal string
/// "false" can never coerce to `true`.
pub fn parse_bool_param(name: &str, value: Option<&str>) -> Result<bool, String> {
    match value {
        None => Ok(false),
        Some(raw) => match raw.to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(format!("{name} must be one of true/false/1/0, got '{raw}'")),
        },
    }
}
